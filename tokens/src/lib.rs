//! # themekit tokens
//!
//! Design tokens and theme composition. Everything here is pure: token tables
//! are built fresh on every call and a [`Theme`] is never mutated in place.
//!
//! ## Modules
//!
//! - [`palette`] - Raw color constants and opacity tints
//! - [`colors`] - Light and dark color tables
//! - [`typography`] - Font families and text variants
//! - [`spacing`] - Spacing scale
//! - [`shadows`] - Shadow styles and shadow tints
//! - [`breakpoints`] - Device breakpoints and layout widths
//! - [`responsive`] - Tablet detection and size scaling
//! - [`mode`] - Theme modes and the user's mode config
//! - [`themes`] - Theme composition and overrides
//!
//! ## Usage
//!
//! ```no_run
//! use tokens::{ThemeMode, ThemeOverrides, create_theme, merge_theme};
//!
//! let dark = create_theme(ThemeMode::Dark, None);
//! let tweaked = merge_theme(&dark, &ThemeOverrides::default());
//! assert_eq!(dark, tweaked);
//! ```

#[macro_use]
mod table;

pub mod breakpoints;
pub mod colors;
pub mod error;
pub mod mode;
pub mod palette;
pub mod responsive;
pub mod shadows;
pub mod spacing;
pub mod themes;
pub mod typography;

pub use breakpoints::{BreakPoint, BreakpointSystem, ResponsiveLayoutSystem};
pub use colors::{ColorOverrides, ColorPalette, create_dark_colors, create_light_colors};
pub use error::ParseTokenError;
pub use mode::{ThemeMode, ThemeModeConfig, ThemeSource, is_valid_scheme};
pub use responsive::{Responsive, ResponsiveConfig, ScreenMetrics, calculate_line_height};
pub use shadows::{ShadowColorSystem, ShadowStyle, ShadowSystem, ShadowType};
pub use spacing::{SpacingSystem, SpacingToken};
pub use themes::{
    DEFAULT_THEMES, DefaultThemes, Theme, ThemeConfig, ThemeOverrides, create_dark_theme,
    create_light_theme, create_theme, get_theme_by_mode, merge_theme,
};
pub use typography::{FontFamilies, FontOverrides, TextType, TextVariant, TypographySystem};
