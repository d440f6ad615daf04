use serde::Deserialize;

use super::tokens::Colors;

/// Semantic colour category of a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    None,
    Primary,
    Success,
    Warning,
    Danger,
}

/// Colours used to paint a tag of a given intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentPalette {
    pub background: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
}

impl Intent {
    /// All intents in display order.
    pub const ALL: [Intent; 5] = [
        Intent::None,
        Intent::Primary,
        Intent::Success,
        Intent::Warning,
        Intent::Danger,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::None => "none",
            Intent::Primary => "primary",
            Intent::Success => "success",
            Intent::Warning => "warning",
            Intent::Danger => "danger",
        }
    }

    pub fn palette(&self) -> IntentPalette {
        let (background, text, icon) = match self {
            Intent::None => (Colors::GRAY_100, Colors::GRAY_900, Colors::GRAY_900),
            Intent::Primary => (Colors::BLUE_50, Colors::BLUE_700, Colors::BLUE_500),
            Intent::Success => (Colors::GREEN_50, Colors::GREEN_700, Colors::GREEN_500),
            Intent::Warning => (Colors::YELLOW_50, Colors::YELLOW_700, Colors::YELLOW_500),
            Intent::Danger => (Colors::RED_50, Colors::RED_700, Colors::RED_500),
        };
        IntentPalette {
            background,
            text,
            icon,
        }
    }
}
