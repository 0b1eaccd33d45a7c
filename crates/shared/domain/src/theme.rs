use serde::{Deserialize, Serialize};

/// Colour scheme of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Night => "Night",
        }
    }

    /// Icon of the toggle button, which always offers the other theme.
    #[must_use]
    pub const fn toggle_icon(self) -> &'static str {
        match self {
            Self::Day => "fas fa-moon",
            Self::Night => "fas fa-sun",
        }
    }
}
