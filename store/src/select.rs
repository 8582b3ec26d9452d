//! Per-mode value selection.
//!
//! A [`ThemeSelect`] describes a value that may depend on the active mode:
//! a literal, a light/dark mapping, or a derivation from the current theme.
//!
//! ```no_run
//! use themekit::select::{Derived, ThemeSelect};
//! use tokens::{ThemeMode, create_theme};
//!
//! let border: ThemeSelect<String> = ThemeSelect::modes("#E0E0E0".into(), "#39414A".into());
//! let text = ThemeSelect::derive(|ctx| Derived::Value(ctx.colors.main_text.clone()));
//!
//! let theme = create_theme(ThemeMode::Dark, None);
//! assert_eq!(border.resolve(ThemeMode::Dark, &theme).as_deref(), Some("#39414A"));
//! assert!(text.resolve(ThemeMode::Dark, &theme).is_some());
//! ```

use serde_json::{Map, Value};
use std::fmt;
use std::ops::Deref;
use tokens::{Theme, ThemeMode};

/// What a derivation sees: the mode in effect and the theme built for it.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext<'a> {
    pub mode: ThemeMode,
    pub theme: &'a Theme,
}

impl<'a> ThemeContext<'a> {
    pub fn new(mode: ThemeMode, theme: &'a Theme) -> Self {
        Self { mode, theme }
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }
}

impl Deref for ThemeContext<'_> {
    type Target = Theme;

    fn deref(&self) -> &Theme {
        self.theme
    }
}

/// Light/dark pair with at least one side present.
///
/// Dark falls back to light; light never falls back to dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeMap<T> {
    light: Option<T>,
    dark: Option<T>,
}

impl<T> ModeMap<T> {
    pub fn new(light: T, dark: T) -> Self {
        Self {
            light: Some(light),
            dark: Some(dark),
        }
    }

    pub fn light_only(light: T) -> Self {
        Self {
            light: Some(light),
            dark: None,
        }
    }

    pub fn dark_only(dark: T) -> Self {
        Self {
            light: None,
            dark: Some(dark),
        }
    }

    /// Returns `None` when both sides are missing.
    pub fn from_parts(light: Option<T>, dark: Option<T>) -> Option<Self> {
        if light.is_none() && dark.is_none() {
            None
        } else {
            Some(Self { light, dark })
        }
    }

    pub fn light(&self) -> Option<&T> {
        self.light.as_ref()
    }

    pub fn dark(&self) -> Option<&T> {
        self.dark.as_ref()
    }

    pub fn select(&self, mode: ThemeMode) -> Option<&T> {
        match mode {
            ThemeMode::Light => self.light.as_ref(),
            ThemeMode::Dark => self.dark.as_ref().or(self.light.as_ref()),
        }
    }

    pub fn into_selected(self, mode: ThemeMode) -> Option<T> {
        match mode {
            ThemeMode::Light => self.light,
            ThemeMode::Dark => self.dark.or(self.light),
        }
    }

    pub fn map<U, F>(self, mut f: F) -> ModeMap<U>
    where
        F: FnMut(T) -> U,
    {
        ModeMap {
            light: self.light.map(&mut f),
            dark: self.dark.map(&mut f),
        }
    }
}

/// Result of a derivation. A mapping is resolved once more against the mode;
/// derivations cannot return further derivations.
#[derive(Debug, Clone, PartialEq)]
pub enum Derived<T> {
    Value(T),
    Modes(ModeMap<T>),
}

impl<T> Derived<T> {
    pub fn into_selected(self, mode: ThemeMode) -> Option<T> {
        match self {
            Derived::Value(value) => Some(value),
            Derived::Modes(map) => map.into_selected(mode),
        }
    }
}

impl<T> From<ModeMap<T>> for Derived<T> {
    fn from(map: ModeMap<T>) -> Self {
        Derived::Modes(map)
    }
}

pub type DeriveFn<T> = Box<dyn Fn(&ThemeContext<'_>) -> Derived<T> + Send + Sync>;

pub enum ThemeSelect<T> {
    Value(T),
    Modes(ModeMap<T>),
    Derive(DeriveFn<T>),
}

impl<T> ThemeSelect<T> {
    pub fn value(value: T) -> Self {
        ThemeSelect::Value(value)
    }

    pub fn modes(light: T, dark: T) -> Self {
        ThemeSelect::Modes(ModeMap::new(light, dark))
    }

    pub fn derive<F>(f: F) -> Self
    where
        F: Fn(&ThemeContext<'_>) -> Derived<T> + Send + Sync + 'static,
    {
        ThemeSelect::Derive(Box::new(f))
    }

    /// Resolves against `mode` and the theme built for it.
    pub fn resolve(&self, mode: ThemeMode, theme: &Theme) -> Option<T>
    where
        T: Clone,
    {
        match self {
            ThemeSelect::Value(value) => Some(value.clone()),
            ThemeSelect::Modes(map) => map.select(mode).cloned(),
            ThemeSelect::Derive(f) => f(&ThemeContext::new(mode, theme)).into_selected(mode),
        }
    }
}

impl<T> From<ModeMap<T>> for ThemeSelect<T> {
    fn from(map: ModeMap<T>) -> Self {
        ThemeSelect::Modes(map)
    }
}

impl<T: fmt::Debug> fmt::Debug for ThemeSelect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeSelect::Value(value) => f.debug_tuple("Value").field(value).finish(),
            ThemeSelect::Modes(map) => f.debug_tuple("Modes").field(map).finish(),
            ThemeSelect::Derive(_) => f.write_str("Derive(<fn>)"),
        }
    }
}

/// Resolves an optional selection; `None` passes through.
pub fn resolve<T: Clone>(
    input: Option<&ThemeSelect<T>>,
    mode: ThemeMode,
    theme: &Theme,
) -> Option<T> {
    input.and_then(|select| select.resolve(mode, theme))
}

fn is_mode_mapping(map: &Map<String, Value>) -> bool {
    !map.is_empty()
        && map.len() <= 2
        && map.keys().all(|key| key == "light" || key == "dark")
}

impl ThemeSelect<Value> {
    /// Classifies a dynamic value by shape.
    ///
    /// `null` yields `None`. A non-empty object whose keys are all `light` or
    /// `dark` becomes a mapping, with `null` sides treated as missing. Every
    /// other value, including `{}`, is a literal.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Object(mut map) if is_mode_mapping(&map) => {
                let light = map.remove("light").filter(|v| !v.is_null());
                let dark = map.remove("dark").filter(|v| !v.is_null());
                ModeMap::from_parts(light, dark).map(ThemeSelect::Modes)
            }
            other => Some(ThemeSelect::Value(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokens::create_theme;

    #[test]
    fn test_mode_map_dark_falls_back_to_light() {
        let map = ModeMap::light_only("L");
        assert_eq!(map.select(ThemeMode::Dark), Some(&"L"));

        let map = ModeMap::dark_only("D");
        assert_eq!(map.select(ThemeMode::Light), None);
        assert_eq!(map.select(ThemeMode::Dark), Some(&"D"));
    }

    #[test]
    fn test_from_parts_rejects_empty() {
        assert!(ModeMap::<u8>::from_parts(None, None).is_none());
        assert!(ModeMap::from_parts(Some(1), None).is_some());
    }

    #[test]
    fn test_map_preserves_sides() {
        let map = ModeMap::dark_only(2).map(|v| v * 10);
        assert_eq!(map.light(), None);
        assert_eq!(map.dark(), Some(&20));
    }

    #[test]
    fn test_derive_returning_mapping_resolves_once() {
        let theme = create_theme(ThemeMode::Dark, None);
        let select = ThemeSelect::derive(|ctx| {
            if ctx.is_dark() {
                ModeMap::new(1, 2).into()
            } else {
                Derived::Value(0)
            }
        });

        assert_eq!(select.resolve(ThemeMode::Dark, &theme), Some(2));
    }

    #[test]
    fn test_from_json_shapes() {
        assert!(ThemeSelect::<Value>::from_json(Value::Null).is_none());

        let theme = create_theme(ThemeMode::Dark, None);
        let cases = [
            (json!({"light": "L", "dark": "D"}), Some(json!("D"))),
            (json!({"light": "L"}), Some(json!("L"))),
            (json!({"dark": null, "light": 3}), Some(json!(3))),
            (json!({"light": "L", "other": "O"}), Some(json!({"light": "L", "other": "O"}))),
            (json!({}), Some(json!({}))),
            (json!([1, 2]), Some(json!([1, 2]))),
            (json!(false), Some(json!(false))),
        ];

        for (input, expected) in cases {
            let select = ThemeSelect::<Value>::from_json(input.clone());
            assert_eq!(
                resolve(select.as_ref(), ThemeMode::Dark, &theme),
                expected,
                "input {input}"
            );
        }
    }

    #[test]
    fn test_all_null_mapping_is_undefined() {
        assert!(ThemeSelect::<Value>::from_json(json!({"light": null})).is_none());
    }

    #[test]
    fn test_debug_hides_closure() {
        let select: ThemeSelect<u8> = ThemeSelect::derive(|_| Derived::Value(1));
        assert_eq!(format!("{select:?}"), "Derive(<fn>)");
    }
}
