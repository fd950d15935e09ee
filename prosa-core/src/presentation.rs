use serde::{Deserialize, Serialize};

/// Duplicates a carousel's cards once so the strip can scroll past its end
/// without a visible seam. Runs a single time at startup.
pub fn loop_strip<T: Clone>(cards: &[T]) -> Vec<T> {
    let mut strip = Vec::with_capacity(cards.len() * 2);
    strip.extend_from_slice(cards);
    strip.extend_from_slice(cards);
    strip
}

/// Color-vision simulation modes offered by the accessibility panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorFilter {
    #[default]
    None,
    Protanopia,
    Deuteranopia,
    Tritanopia,
}

impl ColorFilter {
    /// Maps the panel selector's value. Unknown values disable the filter.
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "protanopia" => Self::Protanopia,
            "deuteranopia" => Self::Deuteranopia,
            "tritanopia" => Self::Tritanopia,
            _ => Self::None,
        }
    }

    /// Value for the page-wide presentation filter property.
    pub fn css_value(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Protanopia => "url(#protanopia-filter)",
            Self::Deuteranopia => "url(#deuteranopia-filter)",
            Self::Tritanopia => "url(#tritanopia-filter)",
        }
    }
}
