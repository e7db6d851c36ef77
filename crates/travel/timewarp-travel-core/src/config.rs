//! Travel effect configuration.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::TravelError;

/// Timing and spin parameters for a travel transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelConfig {
    /// Length of the transition in milliseconds. Must be > 0.
    pub duration_ms: u32,
    /// Minimum extra rotation (radians) added on top of the start angle.
    pub base_turns: f32,
    /// Upper bound of the random overshoot (radians) added after `base_turns`.
    pub extra_turns: f32,
    /// Visibility window used when settling; `None` uses the index default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<u32>,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1200,
            base_turns: 4.0 * PI,
            extra_turns: 6.0 * PI,
            window: None,
        }
    }
}

impl TravelConfig {
    #[inline]
    pub fn duration_s(&self) -> f32 {
        self.duration_ms as f32 / 1000.0
    }

    pub fn validate(&self) -> Result<(), TravelError> {
        if self.duration_ms == 0 {
            return Err(TravelError::InvalidConfig {
                reason: "duration_ms must be > 0".into(),
            });
        }
        for (name, v) in [("base_turns", self.base_turns), ("extra_turns", self.extra_turns)] {
            if !v.is_finite() || v < 0.0 {
                return Err(TravelError::InvalidConfig {
                    reason: format!("{name} must be finite and >= 0, got {v}"),
                });
            }
        }
        Ok(())
    }
}
