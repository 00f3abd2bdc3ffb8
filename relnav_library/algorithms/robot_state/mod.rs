//! Robot state aggregate
//!
//! A single mutable struct owned by the motion controller. Components receive
//! it by `&mut` for the duration of one event and never keep references.

use std::fmt;

/// Translation axis in the goal frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

/// Sequencer phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPhase {
    /// No goal active
    #[default]
    Idle,
    /// Turning to face backward because the goal lies behind the robot
    Orienting180,
    /// Driving along the initial forward axis
    TranslatingX,
    /// Turning toward the goal side
    OrientingY,
    /// Driving the lateral leg
    TranslatingY,
}

impl fmt::Display for MotionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionPhase::Idle => write!(f, "Idle"),
            MotionPhase::Orienting180 => write!(f, "Orienting180"),
            MotionPhase::TranslatingX => write!(f, "TranslatingX"),
            MotionPhase::OrientingY => write!(f, "OrientingY"),
            MotionPhase::TranslatingY => write!(f, "TranslatingY"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RobotState {
    /// Signed displacement still to travel, goal frame
    pub remaining_x: f64,
    pub remaining_y: f64,
    /// Signed yaw relative to the goal frame, in the goal-side convention (rad)
    pub heading: f64,
    /// Lateral-leg heading: +π/2 left, −π/2 right, 0 for a straight goal
    pub heading_goal: f64,

    /// Latest absolute odometry sample, world frame
    pub odom_x: f64,
    pub odom_y: f64,
    /// Odometry values already charged against the remaining distance
    pub odom_x_prev: f64,
    pub odom_y_prev: f64,
    /// Latest raw yaw sample, world frame
    pub raw_yaw: f64,
    /// World yaw of the goal frame's X axis, taken at acceptance
    pub frame_yaw: f64,

    pub tolerance: f64,

    pub goal_active: bool,
    /// Goal lies to the right (dy < 0); fixes the heading sign convention
    pub right_side_goal: bool,
    pub oriented_for_y: bool,
    pub started_x_negative: bool,
    pub turned_to_face_backward: bool,
}

impl RobotState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the accepted goal lies to the right of the start pose.
    ///
    /// Fixed at acceptance; straight-ahead goals and the idle state count as
    /// the left (non-negative) side.
    pub fn goal_side_negative(&self) -> bool {
        self.right_side_goal
    }

    pub fn remaining(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.remaining_x,
            Axis::Y => self.remaining_y,
        }
    }

    pub fn set_remaining(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.remaining_x = value,
            Axis::Y => self.remaining_y = value,
        }
    }

    /// Odometry progress since the last rebase, rotated into the goal frame
    pub fn frame_delta(&self) -> (f64, f64) {
        let dx = self.odom_x - self.odom_x_prev;
        let dy = self.odom_y - self.odom_y_prev;
        let (sin, cos) = self.frame_yaw.sin_cos();
        (dx * cos + dy * sin, dy * cos - dx * sin)
    }

    /// Progress along one goal-frame axis since the last rebase
    pub fn frame_progress(&self, axis: Axis) -> f64 {
        let (along_x, along_y) = self.frame_delta();
        match axis {
            Axis::X => along_x,
            Axis::Y => along_y,
        }
    }

    /// Mark the latest odometry sample as consumed
    pub fn rebase_odometry(&mut self) {
        self.odom_x_prev = self.odom_x;
        self.odom_y_prev = self.odom_y;
    }

    /// Drop the active goal: distances zeroed, flags cleared
    ///
    /// Heading, odometry samples and the last goal frame are kept.
    pub fn reset_to_idle(&mut self) {
        self.remaining_x = 0.0;
        self.remaining_y = 0.0;
        self.heading_goal = 0.0;
        self.goal_active = false;
        self.right_side_goal = false;
        self.oriented_for_y = false;
        self.started_x_negative = false;
        self.turned_to_face_backward = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_new_state_is_idle() {
        let state = RobotState::new();
        assert!(!state.goal_active);
        assert_eq!(state.remaining_x, 0.0);
        assert_eq!(state.remaining_y, 0.0);
        assert!(!state.goal_side_negative());
    }

    #[test]
    fn test_reset_keeps_sensor_samples() {
        let mut state = RobotState {
            remaining_x: 0.4,
            remaining_y: -0.2,
            heading: -1.0,
            heading_goal: -std::f64::consts::FRAC_PI_2,
            odom_x: 2.0,
            odom_y: 1.0,
            goal_active: true,
            right_side_goal: true,
            oriented_for_y: true,
            ..RobotState::default()
        };
        state.reset_to_idle();

        assert!(!state.goal_active);
        assert!(!state.goal_side_negative());
        assert!(!state.oriented_for_y);
        assert_eq!(state.remaining_x, 0.0);
        assert_eq!(state.remaining_y, 0.0);
        assert_eq!(state.heading, -1.0);
        assert_eq!(state.odom_x, 2.0);
    }

    #[test]
    fn test_axis_accessors() {
        let mut state = RobotState::new();
        state.odom_x = -0.2;
        state.odom_y = 0.3;
        assert_eq!(state.frame_progress(Axis::Y), 0.3);
        state.rebase_odometry();
        state.set_remaining(Axis::Y, 0.7);
        assert_eq!(state.remaining(Axis::Y), 0.7);
        assert_eq!(state.frame_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_frame_delta_rotates_into_goal_frame() {
        // goal frame X points along world +Y
        let state = RobotState {
            odom_x: 1.0,
            odom_y: 3.0,
            odom_x_prev: 1.0,
            odom_y_prev: 1.0,
            frame_yaw: FRAC_PI_2,
            ..RobotState::default()
        };
        let (along_x, along_y) = state.frame_delta();
        assert!((along_x - 2.0).abs() < 1e-12);
        assert!(along_y.abs() < 1e-12);

        // world -X is the goal frame's left
        let state = RobotState {
            odom_x: -0.5,
            frame_yaw: FRAC_PI_2,
            ..RobotState::default()
        };
        assert!((state.frame_progress(Axis::Y) - 0.5).abs() < 1e-12);
    }
}
