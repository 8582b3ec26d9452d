use crate::breakpoints::{
    BreakpointOverrides, BreakpointSystem, ResponsiveLayoutOverrides, ResponsiveLayoutSystem,
    create_breakpoint_system, create_responsive_layout_system,
};
use crate::colors::{ColorOverrides, ColorPalette, create_dark_colors, create_light_colors};
use crate::mode::ThemeMode;
use crate::responsive::Responsive;
use crate::shadows::{
    ShadowColorOverrides, ShadowColorSystem, ShadowOverrides, ShadowSystem,
    create_dark_shadow_colors, create_light_shadow_colors, create_shadow_system,
};
use crate::spacing::{SpacingOverrides, SpacingSystem, create_spacing_system};
use crate::typography::{
    FontOverrides, TypographyOverrides, TypographySystem, create_typography_system,
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Caller customization applied when a theme is composed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub fonts: FontOverrides,
    /// Screen metrics for responsive typography. `None` means an unscaled phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<Responsive>,
}

impl ThemeConfig {
    pub fn with_fonts(fonts: FontOverrides) -> Self {
        Self {
            fonts,
            responsive: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub colors: ColorPalette,
    pub typography: TypographySystem,
    pub spacing: SpacingSystem,
    pub shadow: ShadowSystem,
    pub shadow_color: ShadowColorSystem,
    pub breakpoints: BreakpointSystem,
    pub responsive_layout: ResponsiveLayoutSystem,
}

/// Partial [`Theme`] for [`merge_theme`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<ShadowColorOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<BreakpointOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive_layout: Option<ResponsiveLayoutOverrides>,
}

impl From<&Theme> for ThemeOverrides {
    fn from(theme: &Theme) -> Self {
        Self {
            colors: Some((&theme.colors).into()),
            typography: Some((&theme.typography).into()),
            spacing: Some((&theme.spacing).into()),
            shadow: Some((&theme.shadow).into()),
            shadow_color: Some((&theme.shadow_color).into()),
            breakpoints: Some((&theme.breakpoints).into()),
            responsive_layout: Some((&theme.responsive_layout).into()),
        }
    }
}

fn compose(
    colors: ColorPalette,
    shadow_color: ShadowColorSystem,
    config: &ThemeConfig,
) -> Theme {
    let responsive = config.responsive.clone().unwrap_or_default();

    Theme {
        colors,
        typography: create_typography_system(Some(&config.fonts), &responsive),
        spacing: create_spacing_system(),
        shadow: create_shadow_system(),
        shadow_color,
        breakpoints: create_breakpoint_system(),
        responsive_layout: create_responsive_layout_system(),
    }
}

pub fn create_light_theme(config: &ThemeConfig) -> Theme {
    compose(create_light_colors(), create_light_shadow_colors(), config)
}

pub fn create_dark_theme(config: &ThemeConfig) -> Theme {
    compose(create_dark_colors(), create_dark_shadow_colors(), config)
}

/// Builds a fresh theme for `mode`. A missing config means defaults.
pub fn create_theme(mode: ThemeMode, config: Option<&ThemeConfig>) -> Theme {
    let default_config;
    let config = match config {
        Some(config) => config,
        None => {
            default_config = ThemeConfig::default();
            &default_config
        }
    };

    match mode {
        ThemeMode::Light => create_light_theme(config),
        ThemeMode::Dark => create_dark_theme(config),
    }
}

pub fn get_theme_by_mode(mode: ThemeMode, config: Option<&ThemeConfig>) -> Theme {
    create_theme(mode, config)
}

/// Returns `base` with `overrides` applied one level into each sub-table.
pub fn merge_theme(base: &Theme, overrides: &ThemeOverrides) -> Theme {
    fn apply<T: Clone, O>(base: &T, overrides: Option<&O>, merge: fn(&T, &O) -> T) -> T {
        match overrides {
            Some(overrides) => merge(base, overrides),
            None => base.clone(),
        }
    }

    Theme {
        colors: apply(&base.colors, overrides.colors.as_ref(), ColorPalette::merged),
        typography: apply(
            &base.typography,
            overrides.typography.as_ref(),
            TypographySystem::merged,
        ),
        spacing: apply(&base.spacing, overrides.spacing.as_ref(), SpacingSystem::merged),
        shadow: apply(&base.shadow, overrides.shadow.as_ref(), ShadowSystem::merged),
        shadow_color: apply(
            &base.shadow_color,
            overrides.shadow_color.as_ref(),
            ShadowColorSystem::merged,
        ),
        breakpoints: apply(
            &base.breakpoints,
            overrides.breakpoints.as_ref(),
            BreakpointSystem::merged,
        ),
        responsive_layout: apply(
            &base.responsive_layout,
            overrides.responsive_layout.as_ref(),
            ResponsiveLayoutSystem::merged,
        ),
    }
}

#[derive(Debug, Clone)]
pub struct DefaultThemes {
    pub light: Theme,
    pub dark: Theme,
}

impl DefaultThemes {
    pub fn get(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

/// Light and dark themes built with the default config.
pub static DEFAULT_THEMES: Lazy<DefaultThemes> = Lazy::new(|| DefaultThemes {
    light: create_light_theme(&ThemeConfig::default()),
    dark: create_dark_theme(&ThemeConfig::default()),
});
