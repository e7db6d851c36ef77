//! Timewarp Travel Core (renderer-agnostic)
//!
//! The "time travel" effect as an explicit state machine: a travel request
//! moves the controller from `Idle` to `Traveling`, each frame `tick(dt)`
//! emits an eased rotation angle, and once the configured duration has
//! elapsed the controller settles, queries the timeline for the target year
//! and notifies the presentation layer.

pub mod config;
pub mod controller;
pub mod easing;
pub mod error;
pub mod outputs;
pub mod overshoot;
pub mod presenter;
pub mod state;

pub use config::TravelConfig;
pub use controller::TransitionController;
pub use easing::{ease_out_cubic, lerp_f32};
pub use error::TravelError;
pub use outputs::{TickOutput, TravelPlan};
pub use overshoot::{FixedOvershoot, OvershootSource, RngOvershoot};
pub use presenter::{NullPresenter, Presenter};
pub use state::{TravelPhase, TravelState};
pub use timewarp_timeline_core::{Event, TimelineIndex};
