use super::display_preference::ErrorDisplay;
use serde::Deserialize;
use serde::Serialize;

/// Represents all user prefs for the details widget.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    error_display: ErrorDisplay,
}

impl UserPrefs {
    pub fn new(error_display: ErrorDisplay) -> Self {
        Self { error_display }
    }

    pub fn error_display(&self) -> &ErrorDisplay {
        &self.error_display
    }
}
