use crate::palette::{self, Tint, owned};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavyScale {
    pub navy0: String,
    pub navy1: String,
    pub navy2: String,
    pub navy3: String,
    pub navy4: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreyScale {
    pub grey0: String,
    pub grey1: String,
    pub grey2: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhiteScale {
    pub white100: String,
    pub white80: String,
    pub white60: String,
    pub white40: String,
    pub white25: String,
    pub white20: String,
    pub white15: String,
    pub white10: String,
    pub white5: String,
}

token_table! {
    /// Full color table for one theme mode.
    pub struct ColorPalette / ColorOverrides {
        // === Base ===
        pub base_black: String,
        pub black_gray: String,
        pub black_gray_opacity: Tint,
        pub light: String,
        pub light_opacity: Tint,
        pub black: String,
        pub black_opacity: Tint,

        // === Primary ===
        pub light_primary: String,
        pub dark_primary: String,
        pub primary_opacity: Tint,
        pub primary: String,
        pub highlight: String,

        // === Secondary ===
        pub region: String,
        pub secondary: String,
        pub pro: String,

        // === Semantic ===
        pub dark: String,
        pub dark_opacity: Tint,
        pub dark_gradient: Vec<String>,
        pub silver_gradient: Vec<String>,

        // === Gray scale ===
        pub light_gray: String,
        pub lighter_gray: String,
        pub gray: String,
        pub gray_dark: String,
        pub gray_darker: String,

        // === Theme surfaces ===
        pub primary_gradient: Vec<String>,
        pub main_text: String,
        pub sub_text: String,
        pub background: String,
        pub popup_background: String,
        pub break_line: String,
        pub header_gradient: Vec<String>,
        pub loading_gradient: Vec<String>,

        // === Status ===
        pub danger: String,
        pub success: String,
        pub warning: String,

        // === Misc ===
        pub light_dark: String,
        pub skeleton: String,
        pub border_cover: String,
        pub icon_button_background: String,

        // === Variants ===
        pub pro_premium_gradient: Vec<String>,
        pub navy: NavyScale,
        pub grey: GreyScale,
        pub white: WhiteScale,
    }
}

fn white_scale() -> WhiteScale {
    let white = palette::WHITE_TINT;
    WhiteScale {
        white100: white.opacity(1.0),
        white80: white.opacity(0.8),
        white60: white.opacity(0.6),
        white40: white.opacity(0.4),
        white25: white.opacity(0.25),
        white20: white.opacity(0.2),
        white15: white.opacity(0.15),
        white10: white.opacity(0.1),
        white5: white.opacity(0.05),
    }
}

pub fn create_light_colors() -> ColorPalette {
    ColorPalette {
        base_black: palette::BASE_BLACK.to_string(),
        black_gray: palette::BLACK_GRAY.to_string(),
        black_gray_opacity: palette::BLACK_GRAY_TINT,
        light: palette::WHITE.to_string(),
        light_opacity: palette::WHITE_TINT,
        black: palette::BLACK.to_string(),
        black_opacity: palette::BLACK_TINT,

        light_primary: palette::LIGHT_ORANGE.to_string(),
        dark_primary: palette::DARK_ORANGE.to_string(),
        primary_opacity: palette::ORANGE_TINT,
        primary: palette::ORANGE.to_string(),
        highlight: "#F47D42".to_string(),

        region: palette::REGION.to_string(),
        secondary: palette::SEA_GREEN.to_string(),
        pro: palette::PRO.to_string(),

        dark: palette::DARK_BLUE.to_string(),
        dark_opacity: palette::DARK_BLUE_TINT,
        dark_gradient: owned(&palette::GRADIENT_DARK_BLUE),
        silver_gradient: owned(&palette::GRADIENT_SILVER),

        light_gray: palette::LIGHT_GRAY.to_string(),
        lighter_gray: palette::LIGHTER_GRAY.to_string(),
        gray: palette::GRAY.to_string(),
        gray_dark: palette::GRAY_DARK.to_string(),
        gray_darker: palette::GRAY_DARKER.to_string(),

        primary_gradient: owned(&palette::GRADIENT_ORANGE),
        main_text: palette::DARK_BLUE.to_string(),
        sub_text: palette::GRAY_DARK.to_string(),
        background: palette::LIGHT_BLUE.to_string(),
        popup_background: palette::WHITE.to_string(),
        break_line: "rgba(26, 49, 84, 0.1)".to_string(),
        header_gradient: owned(&["#779ECB", "#2B3D5F"]),
        loading_gradient: owned(&["rgba(225, 232, 235, 0.5)", "rgba(225, 232, 235, 0.1)"]),

        danger: "rgba(249, 98, 98, 1)".to_string(),
        success: "#FFF4E0".to_string(),
        warning: palette::YELLOW.to_string(),

        light_dark: palette::LIGHT_DARK.to_string(),
        skeleton: "#E1E8EB".to_string(),
        border_cover: "rgba(26, 49, 84, 0.1)".to_string(),
        icon_button_background: "rgba(255, 255, 255, 0.1)".to_string(),

        pro_premium_gradient: owned(&palette::PRO_PREMIUM_GRADIENT),
        navy: NavyScale {
            navy0: "#1A3154".to_string(),
            navy1: "#2B3E60".to_string(),
            navy2: "#6B80A0".to_string(),
            navy3: "#D6E4F3".to_string(),
            navy4: "#EBF2FA".to_string(),
        },
        grey: GreyScale {
            grey0: "rgba(110, 127, 157, 0.5)".to_string(),
            grey1: "#747F9F".to_string(),
            grey2: "#DDE6F1".to_string(),
        },
        white: white_scale(),
    }
}

/// Dark colors are the light table with the surface and text fields swapped out.
pub fn create_dark_colors() -> ColorPalette {
    let light = create_light_colors();
    let skeleton = light.white.white15.clone();

    light.merged(&ColorOverrides {
        main_text: Some(palette::WHITE.to_string()),
        sub_text: Some(palette::LIGHTER_GRAY.to_string()),
        background: Some(palette::DARK_BLACK_BLUE.to_string()),
        popup_background: Some("#272E35".to_string()),
        break_line: Some("#D2E7FF33".to_string()),
        header_gradient: Some(owned(&["#1E252B", "#303B4D"])),
        loading_gradient: Some(owned(&[
            "rgba(225, 232, 235, 0.2)",
            "rgba(225, 232, 235, 0.1)",
        ])),
        gray_dark: Some("rgba(255, 255, 255, 0.6)".to_string()),
        skeleton: Some(skeleton),
        border_cover: Some("#D2E7FF33".to_string()),
        icon_button_background: Some("rgba(255, 255, 255, 0.1)".to_string()),
        success: Some("#463F33".to_string()),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_and_dark_backgrounds() {
        assert_eq!(create_light_colors().background, "#F3F8FC");
        assert_eq!(create_dark_colors().background, "#1A1C20");
    }

    #[test]
    fn test_primary_is_mode_independent() {
        assert_eq!(create_light_colors().primary, "#F47D42");
        assert_eq!(create_dark_colors().primary, "#F47D42");
    }

    #[test]
    fn test_dark_overrides_documented_fields_only() {
        let light = create_light_colors();
        let dark = create_dark_colors();

        assert_eq!(dark.main_text, palette::WHITE);
        assert_eq!(dark.sub_text, palette::LIGHTER_GRAY);
        assert_eq!(dark.popup_background, "#272E35");
        assert_eq!(dark.gray_dark, "rgba(255, 255, 255, 0.6)");
        assert_eq!(dark.skeleton, light.white.white15);
        assert_eq!(dark.success, "#463F33");

        assert_eq!(dark.navy, light.navy);
        assert_eq!(dark.primary_gradient, light.primary_gradient);
        assert_eq!(dark.danger, light.danger);
        assert_eq!(dark.gray, light.gray);
    }

    #[test]
    fn test_camel_case_serialization() {
        let value = serde_json::to_value(create_light_colors()).unwrap();
        assert_eq!(value["mainText"], "#1a3154");
        assert_eq!(value["white"]["white15"], "rgba(255, 255, 255, 0.15)");
        assert_eq!(value["blackGrayOpacity"]["r"], 42);
    }
}
