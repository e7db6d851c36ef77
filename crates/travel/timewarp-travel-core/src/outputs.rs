//! Output contracts from the transition controller.

use serde::{Deserialize, Serialize};

/// Accepted travel request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TravelPlan {
    pub target_year: i32,
    pub start_angle: f32,
    pub peak_angle: f32,
    pub duration_s: f32,
}

/// Result of one `tick`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TickOutput {
    /// No transition in flight; the renderer keeps its own rotation.
    Idle,
    /// Mid-flight rotation for this frame.
    Traveling { rotation_angle: f32, progress: f32 },
    /// Final frame of a transition. Emitted exactly once per accepted request.
    Settled {
        rotation_angle: f32,
        target_year: i32,
        /// Ids of the visible events, nearest first.
        visible: Vec<String>,
        /// Id of the event opened automatically, if exactly one matched.
        auto_opened: Option<String>,
    },
}

impl TickOutput {
    /// Angle the renderer should apply this frame, if any.
    #[inline]
    pub fn rotation_angle(&self) -> Option<f32> {
        match self {
            Self::Idle => None,
            Self::Traveling { rotation_angle, .. } | Self::Settled { rotation_angle, .. } => {
                Some(*rotation_angle)
            }
        }
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Settled { .. })
    }
}
