//! Raw palette constants shared by the light and dark color tables.

use serde::{Deserialize, Serialize};

/// An RGB base that can be rendered at any opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Tint {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Renders the tint as a CSS-style `rgba(...)` string.
    ///
    /// `alpha` is clamped to `0.0..=1.0`.
    pub fn opacity(&self, alpha: f32) -> String {
        let alpha = if alpha.is_nan() {
            0.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub const BASE_BLACK: &str = "#000000";
pub const BLACK_GRAY: &str = "#2A2D33";
pub const BLACK_GRAY_TINT: Tint = Tint::rgb(42, 45, 51);

pub const WHITE: &str = "#FFFFFF";
pub const WHITE_TINT: Tint = Tint::rgb(255, 255, 255);
pub const BLACK: &str = "#14161A";
pub const BLACK_TINT: Tint = Tint::rgb(20, 22, 26);

pub const ORANGE: &str = "#F47D42";
pub const LIGHT_ORANGE: &str = "#FFB38A";
pub const DARK_ORANGE: &str = "#D9602A";
pub const ORANGE_TINT: Tint = Tint::rgb(244, 125, 66);
pub const GRADIENT_ORANGE: [&str; 2] = ["#F79A5B", ORANGE];

pub const REGION: &str = "#4A90E2";
pub const SEA_GREEN: &str = "#2BB5A0";
pub const PRO: &str = "#C9A227";
pub const PRO_PREMIUM_GRADIENT: [&str; 2] = ["#F6D365", PRO];

pub const DARK_BLUE: &str = "#1a3154";
pub const DARK_BLUE_TINT: Tint = Tint::rgb(26, 49, 84);
pub const GRADIENT_DARK_BLUE: [&str; 2] = ["#2B3E60", DARK_BLUE];
pub const GRADIENT_SILVER: [&str; 2] = ["#E3E8EE", "#B8C2CC"];

pub const LIGHT_GRAY: &str = "#D6DEE6";
pub const LIGHTER_GRAY: &str = "#E9EEF3";
pub const GRAY: &str = "#A3AEBB";
pub const GRAY_DARK: &str = "#6E7F9D";
pub const GRAY_DARKER: &str = "#4B5A73";

pub const LIGHT_DARK: &str = "#2B3038";
pub const LIGHT_BLUE: &str = "#F3F8FC";
pub const DARK_BLACK_BLUE: &str = "#1A1C20";
pub const YELLOW: &str = "#FFC94D";

pub(crate) fn owned(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_palette_values() {
        assert_eq!(ORANGE, "#F47D42");
        assert_eq!(DARK_BLUE, "#1a3154");
        assert_eq!(LIGHT_BLUE, "#F3F8FC");
        assert_eq!(DARK_BLACK_BLUE, "#1A1C20");
    }

    #[test]
    fn test_tint_opacity() {
        assert_eq!(WHITE_TINT.opacity(0.5), "rgba(255, 255, 255, 0.5)");
        assert_eq!(DARK_BLUE_TINT.opacity(1.0), "rgba(26, 49, 84, 1)");
        assert_eq!(ORANGE_TINT.opacity(3.0), "rgba(244, 125, 66, 1)");
        assert_eq!(BLACK_TINT.opacity(-1.0), "rgba(20, 22, 26, 0)");
    }

    #[test]
    fn test_tint_hex_matches_named_color() {
        assert_eq!(ORANGE_TINT.hex(), ORANGE);
        assert_eq!(WHITE_TINT.hex(), WHITE);
        assert_eq!(DARK_BLUE_TINT.hex(), DARK_BLUE.to_uppercase());
    }
}
