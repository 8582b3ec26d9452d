//! Screen-size aware scaling for typography and spacing.

use serde::{Deserialize, Serialize};

token_table! {
    /// Controls when a screen counts as a tablet and how much it scales.
    pub struct ResponsiveConfig / ResponsiveOverrides {
        pub tablet_breakpoint: u32,
        pub scaling_factor: f32,
    }
}

impl Default for ResponsiveConfig {
    fn default() -> Self {
        Self {
            tablet_breakpoint: 768,
            scaling_factor: 1.2,
        }
    }
}

impl ResponsiveConfig {
    /// Defaults with `overrides` applied on top.
    pub fn configure(overrides: &ResponsiveOverrides) -> Self {
        Self::default().merged(overrides)
    }
}

/// Window size in logical pixels. The zero size stands for an unknown screen,
/// which is treated as a phone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScreenMetrics {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenDimensions {
    pub width: u32,
    pub height: u32,
    pub is_tablet: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Responsive {
    pub config: ResponsiveConfig,
    pub screen: ScreenMetrics,
}

impl Responsive {
    pub fn new(config: ResponsiveConfig, screen: ScreenMetrics) -> Self {
        Self { config, screen }
    }

    pub fn is_tablet(&self) -> bool {
        self.screen.width >= self.config.tablet_breakpoint
    }

    pub fn font_size(&self, size: u32) -> u32 {
        self.scale(size)
    }

    pub fn spacing(&self, spacing: u32) -> u32 {
        self.scale(spacing)
    }

    fn scale(&self, value: u32) -> u32 {
        if self.is_tablet() {
            (value as f32 * self.config.scaling_factor).round() as u32
        } else {
            value
        }
    }

    pub fn screen_dimensions(&self) -> ScreenDimensions {
        ScreenDimensions {
            width: self.screen.width,
            height: self.screen.height,
            is_tablet: self.is_tablet(),
        }
    }

    /// Name of the widest breakpoint whose minimum width fits the screen.
    ///
    /// Falls back to the narrowest entry, or `"default"` for an empty table.
    pub fn breakpoint<'a>(&self, table: &[(&'a str, u32)]) -> &'a str {
        let mut sorted: Vec<(&'a str, u32)> = table.to_vec();
        sorted.sort_by_key(|(_, min_width)| *min_width);

        sorted
            .iter()
            .rev()
            .find(|(_, min_width)| self.screen.width >= *min_width)
            .or_else(|| sorted.first())
            .map(|(name, _)| *name)
            .unwrap_or("default")
    }
}

/// Line height for a font size: 1.25x from 18 up, 1.5x below.
pub fn calculate_line_height(font_size: u32) -> u32 {
    let multiplier = if font_size >= 18 { 1.25 } else { 1.5 };
    (font_size as f32 * multiplier).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(width: u32) -> Responsive {
        Responsive::new(
            ResponsiveConfig::default(),
            ScreenMetrics { width, height: 900 },
        )
    }

    #[test]
    fn test_line_height_rule() {
        assert_eq!(calculate_line_height(36), 45);
        assert_eq!(calculate_line_height(18), 23);
        assert_eq!(calculate_line_height(16), 24);
        assert_eq!(calculate_line_height(14), 21);
        assert_eq!(calculate_line_height(8), 12);
    }

    #[test]
    fn test_phone_does_not_scale() {
        let phone = screen(390);
        assert!(!phone.is_tablet());
        assert_eq!(phone.font_size(14), 14);
        assert_eq!(phone.spacing(16), 16);
    }

    #[test]
    fn test_tablet_scales() {
        let tablet = screen(1024);
        assert!(tablet.is_tablet());
        assert_eq!(tablet.font_size(14), 17);
        assert_eq!(tablet.spacing(10), 12);
        assert!(tablet.screen_dimensions().is_tablet);
    }

    #[test]
    fn test_configure_merges_partial() {
        let config = ResponsiveConfig::configure(&ResponsiveOverrides {
            scaling_factor: Some(1.5),
            ..Default::default()
        });
        assert_eq!(config.tablet_breakpoint, 768);
        assert_eq!(config.scaling_factor, 1.5);
    }

    #[test]
    fn test_breakpoint_lookup() {
        let table = [("tablet", 768), ("smallPhone", 0), ("phone", 321)];
        assert_eq!(screen(320).breakpoint(&table), "smallPhone");
        assert_eq!(screen(321).breakpoint(&table), "phone");
        assert_eq!(screen(800).breakpoint(&table), "tablet");
    }

    #[test]
    fn test_breakpoint_fallbacks() {
        let table = [("wide", 1200), ("medium", 600)];
        assert_eq!(screen(100).breakpoint(&table), "medium");
        assert_eq!(screen(100).breakpoint(&[]), "default");
    }
}
