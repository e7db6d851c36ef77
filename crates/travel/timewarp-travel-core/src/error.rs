//! Error types for travel requests and ticks.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TravelError {
    /// A transition is already in flight; the request was ignored
    #[error("Travel already in progress toward {in_flight_year}")]
    Busy { in_flight_year: i32 },

    /// Caller supplied a value the state machine cannot accept
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Configuration cannot drive a transition
    #[error("Invalid travel config: {reason}")]
    InvalidConfig { reason: String },
}
