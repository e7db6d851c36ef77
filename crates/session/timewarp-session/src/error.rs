use thiserror::Error;
use timewarp_timeline_core::TimelineError;
use timewarp_travel_core::TravelError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Timeline(#[from] TimelineError),
    #[error(transparent)]
    Travel(#[from] TravelError),
    #[error("invalid session config: {reason}")]
    InvalidConfig { reason: String },
    #[error("session config parse error: {0}")]
    Parse(String),
}
