use serde::{Deserialize, Serialize};

/// Phase of the travel state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TravelPhase {
    #[default]
    Idle,
    Traveling,
}

impl TravelPhase {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Traveling => "traveling",
        }
    }

    #[inline]
    pub fn is_traveling(&self) -> bool {
        matches!(self, Self::Traveling)
    }
}

/// Mutable transition state. `start_angle`/`peak_angle` only mean something
/// while `phase == Traveling`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelState {
    pub phase: TravelPhase,
    pub target_year: i32,
    /// Seconds since the travel was accepted.
    pub elapsed: f32,
    pub start_angle: f32,
    pub peak_angle: f32,
}
