//! History/chart panel visibility
//!
//! The two panels are never shown together: showing one hides the other.

/// Which panel is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panels {
    /// Both hidden
    #[default]
    None,
    /// Transaction history shown, chart hidden
    List,
    /// Chart shown, history hidden
    Chart,
}

impl Panels {
    pub fn list_visible(self) -> bool {
        self == Self::List
    }

    pub fn chart_visible(self) -> bool {
        self == Self::Chart
    }

    /// State after pressing the history toggle
    pub fn toggle_list(self) -> Self {
        match self {
            Self::List => Self::None,
            Self::None | Self::Chart => Self::List,
        }
    }

    /// State after pressing the chart toggle
    pub fn toggle_chart(self) -> Self {
        match self {
            Self::Chart => Self::None,
            Self::None | Self::List => Self::Chart,
        }
    }
}
