//! timewarp-session
//!
//! Host-facing glue for the time machine demo. A [`Session`] owns the slider
//! year, the idle spin, the visible marker set and the info panel, and drives
//! the [`TransitionController`](timewarp_travel_core::TransitionController)
//! from a single per-frame callback. Rendering is delegated to a
//! [`Renderer`] supplied by the host.

pub mod config;
pub mod error;
pub mod markers;
pub mod panel;
pub mod renderer;
pub mod session;

pub use crate::config::SessionConfig;
pub use crate::error::SessionError;
pub use crate::markers::{pulse_scale, Marker};
pub use crate::panel::{InfoPanel, ResultsView, NO_EVENTS_MESSAGE};
pub use crate::renderer::{NullRenderer, Renderer};
pub use crate::session::{FrameReport, Session, TravelButton};
