use serde::{Deserialize, Serialize};
use timewarp_timeline_core::TimelineConfig;
use timewarp_travel_core::TravelConfig;

use crate::error::SessionError;

/// Everything a session needs besides the event set and the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub timeline: TimelineConfig,
    pub travel: TravelConfig,
    /// Globe radius in scene units.
    pub globe_radius: f64,
    /// Height of markers above the globe surface.
    pub marker_lift: f64,
    /// Idle rotation speed in radians per second.
    pub idle_spin_per_second: f32,
    pub slider_min: i32,
    pub slider_max: i32,
    pub initial_year: i32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeline: TimelineConfig::default(),
            travel: TravelConfig::default(),
            globe_radius: 1.8,
            marker_lift: 0.06,
            // 0.0016 rad per frame at 60 Hz
            idle_spin_per_second: 0.096,
            slider_min: -3000,
            slider_max: 2025,
            initial_year: 1453,
        }
    }
}

impl SessionConfig {
    pub fn from_json(s: &str) -> Result<Self, SessionError> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| SessionError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        self.travel.validate()?;
        if self.slider_min > self.slider_max {
            return Err(SessionError::InvalidConfig {
                reason: format!(
                    "slider_min {} exceeds slider_max {}",
                    self.slider_min, self.slider_max
                ),
            });
        }
        if !(self.globe_radius.is_finite() && self.globe_radius > 0.0) {
            return Err(SessionError::InvalidConfig {
                reason: format!("globe_radius must be > 0, got {}", self.globe_radius),
            });
        }
        if !self.marker_lift.is_finite() || !self.idle_spin_per_second.is_finite() {
            return Err(SessionError::InvalidConfig {
                reason: "marker_lift and idle_spin_per_second must be finite".into(),
            });
        }
        Ok(())
    }

    /// Clamp a year into the slider range.
    #[inline]
    pub fn clamp_year(&self, year: i32) -> i32 {
        year.clamp(self.slider_min, self.slider_max)
    }
}
