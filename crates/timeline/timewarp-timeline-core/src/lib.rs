//! Timewarp Timeline Core
//!
//! Owns the canonical, read-only list of historical events and answers
//! "which events are visible around year Y" queries. Rendering, input and
//! animation live elsewhere; this crate only knows about years and events.

pub mod config;
pub mod dataset;
pub mod era;
pub mod error;
pub mod event;
pub mod geo;
pub mod index;

pub use config::TimelineConfig;
pub use dataset::{builtin, parse_events_json, parse_text_only_json};
pub use era::format_year;
pub use error::TimelineError;
pub use event::{Event, GeoPoint};
pub use geo::{lat_lon_to_vec3, Vec3};
pub use index::TimelineIndex;

/// Visibility window used by the richest demo variant.
pub const DEFAULT_WINDOW_YEARS: u32 = 15;
