use relnav_core::LogSummary;
use serde::{Deserialize, Serialize};

/// Displacement request in the robot's frame at acceptance time
///
/// `x` is forward (negative is behind), `y` is to the left (negative is right).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplacementGoal {
    pub x: f64,
    pub y: f64,
}

impl DisplacementGoal {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl LogSummary for DisplacementGoal {
    fn log_summary(&self) -> String {
        format!("Goal(dx={:.3}, dy={:.3})", self.x, self.y)
    }
}
