use std::env;

use serde::Deserialize;
use serde::Serialize;

/// Whether per-field validation messages are rendered under their inputs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::EnumIs)]
pub enum ErrorDisplay {
    /// Messages are computed and kept in state but not shown.
    Hidden,
    /// Each non-empty message is shown beneath its input.
    Inline,
}

impl ErrorDisplay {
    /// Resolves the preference from the environment, with an in-code default.
    ///
    /// # Environment Variables (case-insensitive for "true"):
    /// - `SHOW_FIELD_ERRORS`:
    ///   If "true" or "1", render messages inline.
    ///   Read at runtime first, then at compile time (for wasm builds, which
    ///   have no process environment).
    pub fn from_env() -> Self {
        /// **Easy toggle:** Set to `true` to render messages by default.
        /// This is the lowest priority setting.
        const SHOW_FIELD_ERRORS: bool = false;

        let runtime = env::var("SHOW_FIELD_ERRORS").ok();
        let value = runtime.as_deref().or(option_env!("SHOW_FIELD_ERRORS"));

        Self::from_flag(value).unwrap_or(if SHOW_FIELD_ERRORS {
            Self::Inline
        } else {
            Self::Hidden
        })
    }

    /// Interprets a flag value. `None` when the variable is unset.
    fn from_flag(value: Option<&str>) -> Option<Self> {
        value.map(|val| {
            if val.eq_ignore_ascii_case("true") || val == "1" {
                Self::Inline
            } else {
                Self::Hidden
            }
        })
    }
}

impl Default for ErrorDisplay {
    fn default() -> Self {
        Self::from_env()
    }
}
