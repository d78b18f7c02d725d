use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark { ThemeName::Dark } else { ThemeName::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeName::Dark)
    }
}

/// Colours and font for one display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub graph_background: &'static str,
    pub graph_text: &'static str,
    pub font: &'static str,
}

pub const LIGHT_PALETTE: Palette = Palette {
    background: "#FFFFFF",
    text: "#000000",
    graph_background: "#F5F5F5",
    graph_text: "#000000",
    font: "Arial, sans-serif",
};

pub const DARK_PALETTE: Palette = Palette {
    background: "#2C2C2C",
    text: "#E0E0E0",
    graph_background: "#3A3A3A",
    graph_text: "#FFFFFF",
    font: "Arial, sans-serif",
};

pub fn palette_for(theme: ThemeName) -> &'static Palette {
    match theme {
        ThemeName::Light => &LIGHT_PALETTE,
        ThemeName::Dark => &DARK_PALETTE,
    }
}

/// Style record applied to the page root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStyle {
    pub background_color: &'static str,
    pub color: &'static str,
    pub height: &'static str,
    pub width: &'static str,
    pub font_family: &'static str,
    pub padding: &'static str,
    pub transition: &'static str,
}

impl PageStyle {
    /// Inline CSS declaration list for the root element's `style` attribute.
    pub fn to_css(&self) -> String {
        format!(
            "background-color: {}; color: {}; height: {}; width: {}; font-family: {}; padding: {}; transition: {};",
            self.background_color,
            self.color,
            self.height,
            self.width,
            self.font_family,
            self.padding,
            self.transition,
        )
    }
}

pub fn page_style_for(theme: ThemeName) -> PageStyle {
    let palette = palette_for(theme);
    PageStyle {
        background_color: palette.background,
        color: palette.text,
        height: "100vh",
        width: "100vw",
        font_family: palette.font,
        padding: "20px",
        transition: "background-color 0.5s ease",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn theme_names_round_trip_through_strings() {
        assert_eq!(ThemeName::Dark.as_ref(), "dark");
        assert_eq!(ThemeName::from_str("light").unwrap(), ThemeName::Light);
        assert_eq!(ThemeName::from_dark_flag(true), ThemeName::Dark);
    }

    #[test]
    fn css_lists_every_property() {
        let css = page_style_for(ThemeName::Light).to_css();
        assert!(css.starts_with("background-color: #FFFFFF; color: #000000;"));
        assert!(css.contains("font-family: Arial, sans-serif;"));
        assert!(css.ends_with("transition: background-color 0.5s ease;"));
    }
}
