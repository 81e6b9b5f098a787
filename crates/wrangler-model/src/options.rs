//! Configuration options for the normalization engine.

use serde::{Deserialize, Serialize};

/// Length of a regulation match in minutes.
pub const DEFAULT_FULL_MATCH_MINUTES: u32 = 90;

/// Options controlling engine behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Denominator of `frac_minutes_played`. Must be non-zero.
    pub full_match_minutes: u32,

    /// Whether the caller should run
    /// `NormalizationEngine::check_dependencies` before extraction.
    ///
    /// The engine itself never reads this flag; the `event-wrangler run`
    /// pipeline does. Issues are reported as warnings only and extracted
    /// tables are the same either way.
    pub check_dependencies: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            full_match_minutes: DEFAULT_FULL_MATCH_MINUTES,
            check_dependencies: true,
        }
    }
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_full_match_minutes(mut self, minutes: u32) -> Self {
        self.full_match_minutes = minutes;
        self
    }

    #[must_use]
    pub fn with_dependency_check(mut self, enable: bool) -> Self {
        self.check_dependencies = enable;
        self
    }
}
