use crate::palette;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowOffset {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowStyle {
    pub shadow_color: String,
    pub shadow_offset: ShadowOffset,
    pub shadow_radius: f32,
    pub elevation: u32,
    pub shadow_opacity: f32,
}

token_table! {
    pub struct ShadowSystem / ShadowOverrides {
        pub default: ShadowStyle,
        pub light: ShadowStyle,
        pub dark: ShadowStyle,
        pub darker: ShadowStyle,
        pub black_dark: ShadowStyle,
    }
}

token_keys! {
    pub enum ShadowType for ShadowSystem -> ShadowStyle {
        Default => default = "default",
        Light => light = "light",
        Dark => dark = "dark",
        Darker => darker = "darker",
        BlackDark => black_dark = "blackDark",
    }
}

token_table! {
    /// Mode-dependent shadow tints.
    pub struct ShadowColorSystem / ShadowColorOverrides {
        pub popup_background: String,
    }
}

fn shadow(
    color: &str,
    (width, height): (f32, f32),
    radius: f32,
    elevation: u32,
    opacity: f32,
) -> ShadowStyle {
    ShadowStyle {
        shadow_color: color.to_string(),
        shadow_offset: ShadowOffset { width, height },
        shadow_radius: radius,
        elevation,
        shadow_opacity: opacity,
    }
}

pub fn create_shadow_system() -> ShadowSystem {
    ShadowSystem {
        default: shadow(palette::DARK_BLUE, (0.5, 2.0), 5.0, 2, 0.15),
        light: shadow(palette::DARK_BLUE, (0.25, 1.0), 2.0, 1, 0.125),
        dark: shadow(palette::DARK_BLUE, (0.25, 2.0), 2.0, 4, 0.25),
        darker: shadow(palette::DARK_BLUE, (0.5, 6.0), 8.0, 4, 0.25),
        black_dark: shadow(palette::BASE_BLACK, (0.5, 6.0), 8.0, 9, 1.0),
    }
}

pub fn create_light_shadow_colors() -> ShadowColorSystem {
    ShadowColorSystem {
        popup_background: "#E8EAEE".to_string(),
    }
}

pub fn create_dark_shadow_colors() -> ShadowColorSystem {
    ShadowColorSystem {
        popup_background: "#39414A".to_string(),
    }
}
