use super::ThemeStore;
use crate::select::{ThemeContext, ThemeSelect};
use tokens::{ColorPalette, Theme, ThemeMode, ThemeSource, get_theme_by_mode};

/// Derived views. Themes are recomputed on every call from the current
/// mode and custom configuration.
impl ThemeStore {
    pub fn current_theme_mode(&self) -> ThemeMode {
        self.read().mode
    }

    /// The tab-bar mode: the override when set, the main mode otherwise.
    pub fn tab_theme_mode(&self) -> ThemeMode {
        let state = self.read();
        state.tab_mode.unwrap_or(state.mode)
    }

    pub fn current_theme(&self) -> Theme {
        self.theme_for(ThemeSource::Mode)
    }

    pub fn current_tab_theme(&self) -> Theme {
        self.theme_for(ThemeSource::TabMode)
    }

    pub fn theme_for(&self, source: ThemeSource) -> Theme {
        let (_, theme) = self.snapshot(source);
        theme
    }

    /// Mode and theme for `source`, read under one lock.
    fn snapshot(&self, source: ThemeSource) -> (ThemeMode, Theme) {
        let (mode, config) = {
            let state = self.read();
            let mode = match source {
                ThemeSource::Mode => state.mode,
                ThemeSource::TabMode => state.tab_mode.unwrap_or(state.mode),
            };
            (mode, state.theme_config.clone())
        };
        (mode, get_theme_by_mode(mode, config.as_ref()))
    }

    pub fn current_colors(&self) -> ColorPalette {
        self.current_theme().colors
    }

    /// Builds a value from the current mode and theme, e.g. a style sheet.
    pub fn themed<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&ThemeContext<'_>) -> R,
    {
        let (mode, theme) = self.snapshot(ThemeSource::Mode);
        f(&ThemeContext::new(mode, &theme))
    }

    /// Resolves a selection against the current mode and theme.
    pub fn select<T: Clone>(&self, select: &ThemeSelect<T>) -> Option<T> {
        self.themed(|ctx| select.resolve(ctx.mode, ctx.theme))
    }

    /// Resolves a selection against the tab-bar mode and theme.
    pub fn select_tab<T: Clone>(&self, select: &ThemeSelect<T>) -> Option<T> {
        let (mode, theme) = self.snapshot(ThemeSource::TabMode);
        select.resolve(mode, &theme)
    }
}
