//! Pose Tracker
//!
//! Turns raw yaw samples into the controller's heading convention and records
//! absolute odometry positions.
//!
//! Headings are measured from the goal frame: the world yaw the robot had
//! when the goal was accepted reads as zero.
//!
//! # Heading convention
//!
//! The sign of the heading is tied to the side of the active goal:
//!
//! - goal on the left or straight ahead: heading is kept in `[0, 2π)`,
//!   negative raw yaw gets `2π` added
//! - goal on the right: heading is kept in `[-2π, 0)`, non-negative raw yaw
//!   gets `2π` subtracted
//!
//! The wrap discontinuity therefore never sits on the side the robot is
//! turning toward. Rotation decisions rely on this exact asymmetry.
//!
//! # Example
//!
//! ```rust
//! use relnav_library::algorithms::pose_tracker::PoseTracker;
//!
//! assert!(PoseTracker::normalize_heading(-0.5, false) > 0.0);
//! assert!(PoseTracker::normalize_heading(0.5, true) < 0.0);
//! ```

use crate::algorithms::robot_state::RobotState;
use crate::messages::Point2;
use relnav_core::{NavError, NavResult};
use std::f64::consts::{PI, TAU};

// Quaternion round trips leave this much noise on a yaw that should equal the frame
const FRAME_ALIGNED_EPSILON: f64 = 1e-9;

/// Wrap an angle into (-π, π]
pub fn wrap_angle(mut angle: f64) -> f64 {
    while angle > PI {
        angle -= TAU;
    }
    while angle <= -PI {
        angle += TAU;
    }
    angle
}

#[derive(Debug, Clone, Default)]
pub struct PoseTracker {
    samples: u64,
    log_interval: u64,
}

impl PoseTracker {
    /// `log_interval` pose samples pass between heading traces; 0 disables them
    pub fn new(log_interval: u64) -> Self {
        Self {
            samples: 0,
            log_interval,
        }
    }

    /// Map a raw yaw in (-π, π] onto the goal-side convention
    pub fn normalize_heading(raw_yaw: f64, goal_side_negative: bool) -> f64 {
        let raw_negative = raw_yaw < 0.0;
        if !goal_side_negative {
            if raw_negative {
                raw_yaw + TAU
            } else {
                raw_yaw
            }
        } else if raw_negative {
            raw_yaw
        } else {
            raw_yaw - TAU
        }
    }

    /// Update `state.heading` from a raw world-frame yaw sample
    ///
    /// Non-finite samples are rejected and the previous heading is kept.
    pub fn update_heading(&mut self, state: &mut RobotState, raw_yaw: f64) -> NavResult<f64> {
        if !raw_yaw.is_finite() {
            return Err(NavError::invalid_input(format!(
                "non-finite yaw sample {}, keeping heading {:.3}",
                raw_yaw, state.heading
            )));
        }

        state.raw_yaw = raw_yaw;
        let negative_side = state.goal_side_negative();
        Self::refresh_heading(state);

        self.samples += 1;
        if self.log_interval > 0 && (self.samples - 1) % self.log_interval == 0 {
            log::info!("Heading is {:.1}°", state.heading.to_degrees());
            if negative_side {
                log::info!("Heading is expected to be negative");
            } else {
                log::info!("Heading is expected to be positive");
            }
        }

        Ok(state.heading)
    }

    /// Recompute `state.heading` from the last raw yaw after the frame or
    /// goal side changed
    pub fn refresh_heading(state: &mut RobotState) -> f64 {
        let mut relative = wrap_angle(state.raw_yaw - state.frame_yaw);
        if relative.abs() < FRAME_ALIGNED_EPSILON {
            relative = 0.0;
        }
        state.heading = Self::normalize_heading(relative, state.goal_side_negative());
        state.heading
    }

    /// Record an absolute odometry position
    pub fn record_odometry(&mut self, state: &mut RobotState, position: &Point2) -> NavResult<()> {
        if !position.is_finite() {
            return Err(NavError::invalid_input(format!(
                "non-finite odometry position ({}, {})",
                position.x, position.y
            )));
        }
        state.odom_x = position.x;
        state.odom_y = position.y;
        Ok(())
    }

    /// Number of heading samples accepted so far
    pub fn sample_count(&self) -> u64 {
        self.samples
    }
}
