/// Declares a token table together with its partial override type.
///
/// The override struct mirrors every field as an `Option`. `merged` applies it
/// one level deep: a `Some` field replaces the base value whole, `None` keeps
/// it. `From<&Table>` builds a fully populated override.
macro_rules! token_table {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $overrides:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        #[doc = concat!("Partial [`", stringify!($name), "`]. `None` fields keep the base value.")]
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $overrides {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            /// Returns a copy with every field present in `overrides` replaced.
            pub fn merged(&self, overrides: &$overrides) -> Self {
                Self {
                    $(
                        $field: overrides
                            .$field
                            .clone()
                            .unwrap_or_else(|| self.$field.clone()),
                    )*
                }
            }
        }

        impl $overrides {
            /// True when no field is overridden.
            pub fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }
        }

        impl From<&$name> for $overrides {
            fn from(table: &$name) -> Self {
                Self {
                    $(
                        $field: Some(table.$field.clone()),
                    )*
                }
            }
        }
    };
}

/// Declares a lookup key enum over a table's fields.
///
/// Generates `ALL`, `as_str`, `Display`, `FromStr` and a `get` accessor on the
/// table returning a reference to the keyed field.
macro_rules! token_keys {
    (
        $(#[$meta:meta])*
        pub enum $key:ident for $table:ident -> $value:ty {
            $( $variant:ident => $field:ident = $name:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $key {
            $( $variant, )*
        }

        impl $key {
            pub const ALL: &'static [$key] = &[$( $key::$variant, )*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $key::$variant => $name, )*
                }
            }
        }

        impl std::fmt::Display for $key {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $key {
            type Err = $crate::error::ParseTokenError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $name => Ok($key::$variant), )*
                    _ => Err($crate::error::ParseTokenError::new(stringify!($key), s)),
                }
            }
        }

        impl $table {
            pub fn get(&self, key: $key) -> &$value {
                match key {
                    $( $key::$variant => &self.$field, )*
                }
            }
        }
    };
}
