use crate::responsive::{Responsive, calculate_line_height};
use serde::{Deserialize, Serialize};

token_table! {
    /// Font family names by weight.
    pub struct FontFamilies / FontOverrides {
        pub xbold: String,
        pub bold: String,
        pub semi_bold: String,
        pub medium: String,
        pub light: String,
        pub capitalize_medium: String,
        pub capitalize_bold: String,
    }
}

pub const DEFAULT_XBOLD: &str = "SVN-GilroyXBold";
pub const DEFAULT_BOLD: &str = "SVN-GilroyBold";
pub const DEFAULT_SEMI_BOLD: &str = "SVN-GilroySemiBold";
pub const DEFAULT_MEDIUM: &str = "SVN-GilroyMedium";
pub const DEFAULT_LIGHT: &str = "SVN-GilroyLight";
pub const DEFAULT_CAPITALIZE_MEDIUM: &str = "Bebas Neue Pro Regular";
pub const DEFAULT_CAPITALIZE_BOLD: &str = "Bebas Neue Pro Bold";

impl Default for FontFamilies {
    fn default() -> Self {
        Self {
            xbold: DEFAULT_XBOLD.to_string(),
            bold: DEFAULT_BOLD.to_string(),
            semi_bold: DEFAULT_SEMI_BOLD.to_string(),
            medium: DEFAULT_MEDIUM.to_string(),
            light: DEFAULT_LIGHT.to_string(),
            capitalize_medium: DEFAULT_CAPITALIZE_MEDIUM.to_string(),
            capitalize_bold: DEFAULT_CAPITALIZE_BOLD.to_string(),
        }
    }
}

/// Default families with any overridden field swapped in.
pub fn create_font_config(overrides: Option<&FontOverrides>) -> FontFamilies {
    match overrides {
        Some(overrides) => FontFamilies::default().merged(overrides),
        None => FontFamilies::default(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextVariant {
    pub font_size: u32,
    pub line_height: u32,
    pub font_family: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextVariants {
    pub header: TextVariant,
    pub heading1: TextVariant,
    pub heading2: TextVariant,
    pub title: TextVariant,
    #[serde(rename = "sub-title")]
    pub sub_title: TextVariant,
    pub h1: TextVariant,
    pub h2: TextVariant,
    pub h3: TextVariant,
    pub h4: TextVariant,
    pub h5: TextVariant,
    pub h6: TextVariant,
    pub h7: TextVariant,
    pub h8: TextVariant,
    #[serde(rename = "xxx-large")]
    pub xxx_large: TextVariant,
    #[serde(rename = "xx-large")]
    pub xx_large: TextVariant,
    #[serde(rename = "x-large")]
    pub x_large: TextVariant,
    pub large: TextVariant,
    pub normal: TextVariant,
    pub small: TextVariant,
    #[serde(rename = "x-small")]
    pub x_small: TextVariant,
    #[serde(rename = "xx-small")]
    pub xx_small: TextVariant,
}

token_keys! {
    /// Name of a text variant.
    pub enum TextType for TextVariants -> TextVariant {
        Header => header = "header",
        Heading1 => heading1 = "heading1",
        Heading2 => heading2 = "heading2",
        Title => title = "title",
        SubTitle => sub_title = "sub-title",
        H1 => h1 = "h1",
        H2 => h2 = "h2",
        H3 => h3 = "h3",
        H4 => h4 = "h4",
        H5 => h5 = "h5",
        H6 => h6 = "h6",
        H7 => h7 = "h7",
        H8 => h8 = "h8",
        XxxLarge => xxx_large = "xxx-large",
        XxLarge => xx_large = "xx-large",
        XLarge => x_large = "x-large",
        Large => large = "large",
        Normal => normal = "normal",
        Small => small = "small",
        XSmall => x_small = "x-small",
        XxSmall => xx_small = "xx-small",
    }
}

/// Builds every text variant for the given families and screen.
///
/// Headings use the bold family, body sizes the medium family. `h3` and
/// `x-large` keep the line height of a 20pt font.
pub fn create_text_variants(fonts: &FontFamilies, responsive: &Responsive) -> TextVariants {
    let variant = |size: u32, line_basis: u32, family: &str| TextVariant {
        font_size: responsive.font_size(size),
        line_height: calculate_line_height(line_basis),
        font_family: family.to_string(),
    };
    let bold = |size: u32| variant(size, size, &fonts.bold);
    let medium = |size: u32| variant(size, size, &fonts.medium);

    TextVariants {
        header: bold(36),
        heading1: bold(32),
        heading2: bold(30),
        title: bold(28),
        sub_title: bold(26),
        h1: bold(24),
        h2: bold(20),
        h3: variant(18, 20, &fonts.bold),
        h4: bold(16),
        h5: bold(14),
        h6: bold(12),
        h7: bold(10),
        h8: bold(8),
        xxx_large: medium(36),
        xx_large: medium(24),
        x_large: variant(18, 20, &fonts.medium),
        large: medium(16),
        normal: medium(14),
        small: medium(12),
        x_small: medium(10),
        xx_small: medium(8),
    }
}

token_table! {
    pub struct TypographySystem / TypographyOverrides {
        pub fonts: FontFamilies,
        pub text_variants: TextVariants,
    }
}

pub fn create_typography_system(
    overrides: Option<&FontOverrides>,
    responsive: &Responsive,
) -> TypographySystem {
    let fonts = create_font_config(overrides);
    let text_variants = create_text_variants(&fonts, responsive);

    TypographySystem {
        fonts,
        text_variants,
    }
}
