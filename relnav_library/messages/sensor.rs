use crate::messages::geometry::{Point2, Quaternion};
use relnav_core::LogSummary;
use serde::{Deserialize, Serialize};

/// Odometry sample: absolute position and orientation since the base started
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Odometry {
    pub position: Point2,
    pub orientation: Quaternion,
    /// Nanoseconds since epoch
    pub timestamp: u64,
}

impl Odometry {
    pub fn new(position: Point2, orientation: Quaternion) -> Self {
        Self {
            position,
            orientation,
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64,
        }
    }

    /// Planar pose shorthand
    pub fn from_pose(x: f64, y: f64, yaw: f64) -> Self {
        Self::new(Point2::new(x, y), Quaternion::from_yaw(yaw))
    }

    pub fn yaw(&self) -> f64 {
        self.orientation.yaw()
    }
}

impl LogSummary for Odometry {
    fn log_summary(&self) -> String {
        format!(
            "Odometry(x={:.3}, y={:.3}, yaw={:.1}°)",
            self.position.x,
            self.position.y,
            self.yaw().to_degrees()
        )
    }
}

/// Bumper / wheel-drop sensor state
///
/// Any nonzero indicator means the robot is in contact with something.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BumperEvent {
    pub bump_indicator: i32,
}

impl BumperEvent {
    pub fn new(bump_indicator: i32) -> Self {
        Self { bump_indicator }
    }

    pub fn is_contact(&self) -> bool {
        self.bump_indicator != 0
    }
}

impl LogSummary for BumperEvent {
    fn log_summary(&self) -> String {
        format!("Bumper({:#04x})", self.bump_indicator)
    }
}
