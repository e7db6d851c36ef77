//! Timeline configuration.

use serde::{Deserialize, Serialize};

use crate::DEFAULT_WINDOW_YEARS;

/// Query defaults for a [`TimelineIndex`](crate::TimelineIndex).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Maximum absolute year distance for an event to count as visible.
    pub default_window: u32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            default_window: DEFAULT_WINDOW_YEARS,
        }
    }
}
