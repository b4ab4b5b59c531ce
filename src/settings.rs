//! Board configuration.
//!
//! Settings are plain serde data so the embedding application can load them
//! from whatever source it already uses. Every field has a default, so an
//! empty JSON object is a valid configuration.

use crate::board::adapters::gesture::DropPrecision;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Configuration for a board session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BoardSettings {
    /// Precision the gesture adapter applies to every drop.
    pub drop_precision: DropPrecision,
    /// First day of the week shown by the week window.
    pub week_starts_on: Weekday,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            drop_precision: DropPrecision::IndexPrecise,
            week_starts_on: Weekday::Mon,
        }
    }
}

impl BoardSettings {
    /// Parses settings from JSON, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the payload is malformed or a
    /// field holds an unknown value.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    /// Sets the drop precision.
    #[must_use]
    pub const fn with_drop_precision(mut self, precision: DropPrecision) -> Self {
        self.drop_precision = precision;
        self
    }

    /// Sets the first day of the week.
    #[must_use]
    pub const fn with_week_starts_on(mut self, weekday: Weekday) -> Self {
        self.week_starts_on = weekday;
        self
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
mod tests {
    use super::BoardSettings;
    use crate::board::adapters::gesture::DropPrecision;
    use chrono::Weekday;

    #[test]
    fn empty_object_yields_defaults() {
        let settings = BoardSettings::from_json("{}").expect("valid settings");
        assert_eq!(settings, BoardSettings::default());
        assert_eq!(settings.drop_precision, DropPrecision::IndexPrecise);
        assert_eq!(settings.week_starts_on, Weekday::Mon);
    }

    #[test]
    fn stage_only_precision_is_parsed() {
        let settings = BoardSettings::from_json(r#"{"drop_precision":"stage_only"}"#)
            .expect("valid settings");
        assert_eq!(settings.drop_precision, DropPrecision::StageOnly);
    }

    #[test]
    fn week_start_is_parsed() {
        let settings =
            BoardSettings::from_json(r#"{"week_starts_on":"Sun"}"#).expect("valid settings");
        assert_eq!(settings.week_starts_on, Weekday::Sun);
    }

    #[test]
    fn unknown_precision_is_rejected() {
        let result = BoardSettings::from_json(r#"{"drop_precision":"pixel_perfect"}"#);
        assert!(result.is_err());
    }
}
