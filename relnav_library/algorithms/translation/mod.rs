//! Translation Controller
//!
//! Forward motion in fixed increments, one axis at a time. Each step commands
//! a linear velocity for one movement interval; afterwards the distance
//! actually covered is read back from odometry, projected onto the goal
//! frame, and charged against the remaining displacement.
//!
//! Velocity is always positive: the robot has already been turned to face
//! along the direction of travel, so the sign of the remaining distance only
//! tells the read-back which way odometry will move.

use crate::algorithms::robot_state::{Axis, RobotState};
use crate::config::MotionConfig;
use crate::messages::CmdVel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TranslationDecision {
    /// Full-length step
    Increment { velocity: f64 },
    /// Final partial step covering the residual
    Partial { velocity: f64 },
    /// Residual is within tolerance
    Arrived,
}

impl TranslationDecision {
    pub fn command(&self) -> Option<CmdVel> {
        match *self {
            TranslationDecision::Increment { velocity }
            | TranslationDecision::Partial { velocity } => Some(CmdVel::forward(velocity)),
            TranslationDecision::Arrived => None,
        }
    }
}

/// Classify a residual distance
///
/// The increment check comes first, so a residual exactly equal to the
/// increment takes a full step even when the tolerance is as large.
pub fn decide(remaining: f64, tolerance: f64, config: &MotionConfig) -> TranslationDecision {
    let magnitude = remaining.abs();
    if magnitude >= config.increment_amount {
        TranslationDecision::Increment {
            velocity: config.increment_amount * config.movement_multiple,
        }
    } else if magnitude <= tolerance {
        TranslationDecision::Arrived
    } else {
        TranslationDecision::Partial {
            velocity: magnitude * config.movement_multiple,
        }
    }
}

/// Next step along `axis` for the current state
pub fn advance(state: &RobotState, axis: Axis, config: &MotionConfig) -> TranslationDecision {
    let remaining = state.remaining(axis);
    let decision = decide(remaining, state.tolerance, config);
    log::debug!("{} remaining {:.3} -> {:?}", axis, remaining, decision);
    decision
}

/// Charge the odometry progress since the last read-back against `axis`
///
/// Returns the signed distance covered along the goal-frame axis. Motion
/// across the axis is discarded with the rebase.
pub fn read_back(state: &mut RobotState, axis: Axis) -> f64 {
    let moved = state.frame_progress(axis);
    let remaining = state.remaining(axis) - moved;
    state.set_remaining(axis, remaining);
    state.rebase_odometry();
    log::info!("Moved {:.3} along {}, {:.3} remaining", moved, axis, remaining);
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn config() -> MotionConfig {
        MotionConfig::default()
    }

    #[test]
    fn test_full_increment_velocity() {
        match decide(0.75, 0.1, &config()) {
            TranslationDecision::Increment { velocity } => assert_relative_eq!(velocity, 0.18),
            other => panic!("expected increment, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_residual_still_drives_forward() {
        let cmd = decide(-0.75, 0.1, &config()).command().unwrap();
        assert!(cmd.linear > 0.0);
        assert_relative_eq!(cmd.angular, 0.0);
    }

    #[test]
    fn test_partial_step_scales_residual() {
        match decide(0.15, 0.05, &config()) {
            TranslationDecision::Partial { .. } => panic!("0.15 is above the increment"),
            TranslationDecision::Increment { .. } => {}
            TranslationDecision::Arrived => panic!("not within tolerance"),
        }
        match decide(0.08, 0.05, &config()) {
            TranslationDecision::Partial { velocity } => {
                assert_relative_eq!(velocity, 0.08 * 1.8, epsilon = 1e-12)
            }
            other => panic!("expected partial, got {:?}", other),
        }
    }

    #[test]
    fn test_increment_wins_on_exact_boundary() {
        assert!(matches!(
            decide(0.1, 0.1, &config()),
            TranslationDecision::Increment { .. }
        ));
        assert_eq!(decide(0.0999, 0.1, &config()), TranslationDecision::Arrived);
        assert_eq!(decide(-0.05, 0.1, &config()), TranslationDecision::Arrived);
    }

    #[test]
    fn test_read_back_charges_only_its_axis() {
        let mut state = RobotState {
            remaining_x: 1.0,
            remaining_y: -0.5,
            odom_x: 0.02,
            odom_y: -0.1,
            ..RobotState::default()
        };

        let moved = read_back(&mut state, Axis::Y);
        assert_relative_eq!(moved, -0.1);
        assert_relative_eq!(state.remaining_y, -0.4);
        // X residual untouched, cross-axis drift dropped
        assert_relative_eq!(state.remaining_x, 1.0);
        assert_relative_eq!(state.odom_x_prev, 0.02);
        assert_relative_eq!(state.odom_y_prev, -0.1);
    }

    #[test]
    fn test_read_back_in_rotated_frame() {
        // goal accepted facing world +Y: forward travel is world +Y
        let mut state = RobotState {
            remaining_x: 1.0,
            odom_x: 0.0,
            odom_y: 0.1,
            frame_yaw: FRAC_PI_2,
            ..RobotState::default()
        };
        let moved = read_back(&mut state, Axis::X);
        assert_relative_eq!(moved, 0.1, epsilon = 1e-12);
        assert_relative_eq!(state.remaining_x, 0.9, epsilon = 1e-12);

        // the lateral leg then runs along world -X
        state.remaining_y = 0.5;
        state.odom_x = -0.1;
        let moved = read_back(&mut state, Axis::Y);
        assert_relative_eq!(moved, 0.1, epsilon = 1e-12);
        assert_relative_eq!(state.remaining_y, 0.4, epsilon = 1e-12);
        assert_relative_eq!(state.remaining_x, 0.9, epsilon = 1e-12);
    }

    #[test]
    fn test_backward_travel_reduces_negative_residual() {
        let mut state = RobotState {
            remaining_x: -1.0,
            odom_x: 4.9,
            odom_x_prev: 5.0,
            ..RobotState::default()
        };
        read_back(&mut state, Axis::X);
        assert_relative_eq!(state.remaining_x, -0.9, epsilon = 1e-12);
    }
}
