//! Visible marker set for the globe.

use serde::{Deserialize, Serialize};
use timewarp_timeline_core::{Event, Vec3};

/// Resting marker scale before pulsing.
pub const BASE_MARKER_SCALE: f64 = 0.22;

/// One event marker placed on (slightly above) the globe surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub event_id: String,
    pub position: Vec3,
    pub scale: f64,
}

/// Gentle per-marker pulse, phase-shifted by marker index.
#[inline]
pub fn pulse_scale(clock_s: f64, index: usize) -> f64 {
    BASE_MARKER_SCALE * (1.0 + 0.08 * (clock_s * 6.0 + index as f64).sin())
}

/// Markers for the located events in `events`; text-only events are skipped.
pub(crate) fn place_markers(events: &[&Event], radius: f64) -> Vec<Marker> {
    events
        .iter()
        .filter_map(|ev| {
            ev.location.map(|p| Marker {
                event_id: ev.id.clone(),
                position: p.to_vec3(radius),
                scale: BASE_MARKER_SCALE,
            })
        })
        .collect()
}

pub(crate) fn apply_pulse(markers: &mut [Marker], clock_s: f64) {
    for (i, m) in markers.iter_mut().enumerate() {
        m.scale = pulse_scale(clock_s, i);
    }
}
