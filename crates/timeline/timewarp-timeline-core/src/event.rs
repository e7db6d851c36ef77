//! Canonical event data model.

use serde::{Deserialize, Serialize};

use crate::era::format_year;
use crate::error::TimelineError;

/// Latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Both components finite and inside `lat ∈ [-90,90]`, `lon ∈ [-180,180]`.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

/// A single historical event. Immutable once handed to a
/// [`TimelineIndex`](crate::TimelineIndex).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Astronomical year numbering; negative values are BCE.
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub era: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub detail: String,
}

impl Event {
    /// Text-only event (no location, no detail).
    pub fn new(id: impl Into<String>, title: impl Into<String>, year: i32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            month: None,
            location: None,
            era: None,
            summary: String::new(),
            detail: String::new(),
        }
    }

    pub fn with_location(mut self, lat: f64, lon: f64) -> Self {
        self.location = Some(GeoPoint::new(lat, lon));
        self
    }

    pub fn with_text(mut self, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        self.summary = summary.into();
        self.detail = detail.into();
        self
    }

    pub fn with_month(mut self, month: u8) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_era(mut self, era: impl Into<String>) -> Self {
        self.era = Some(era.into());
        self
    }

    /// Absolute distance in years; widened so extreme inputs cannot overflow.
    #[inline]
    pub fn distance_to(&self, year: i32) -> u64 {
        (i64::from(self.year) - i64::from(year)).unsigned_abs()
    }

    /// Info panel subtitle, e.g. `"480 BCE • 38.80°, 22.54°"`.
    pub fn meta_line(&self) -> String {
        match self.location {
            Some(p) => format!("{} • {:.2}°, {:.2}°", format_year(self.year), p.lat, p.lon),
            None => format_year(self.year),
        }
    }

    /// Per-event checks; uniqueness is checked by the index.
    pub fn validate(&self) -> Result<(), TimelineError> {
        if self.id.is_empty() {
            return Err(TimelineError::invalid(format!(
                "event '{}' has an empty id",
                self.title
            )));
        }
        if let Some(p) = self.location {
            if !p.is_valid() {
                return Err(TimelineError::invalid(format!(
                    "event '{}' has out-of-range location ({}, {})",
                    self.id, p.lat, p.lon
                )));
            }
        }
        if let Some(m) = self.month {
            if !(1..=12).contains(&m) {
                return Err(TimelineError::invalid(format!(
                    "event '{}' has month {m}",
                    self.id
                )));
            }
        }
        Ok(())
    }
}
