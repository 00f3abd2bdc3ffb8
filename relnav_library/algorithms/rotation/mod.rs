//! Rotation Controller
//!
//! Heading control built from calibrated quarter turns plus a proportional
//! fine correction.
//!
//! # Decision bands
//!
//! Given a signed yaw offset (target minus current heading):
//!
//! | offset                         | decision                    |
//! |--------------------------------|-----------------------------|
//! | `offset >= π/2`                | quarter turn left           |
//! | `offset <= -π/2`               | quarter turn right          |
//! | `angle_tolerance <= |offset|`  | `angular = offset × gain`   |
//! | otherwise                      | aligned                     |
//!
//! Both quarter-turn boundaries are inclusive. Each decision issues a single
//! command and the caller waits out its settle time before asking again.

use crate::algorithms::robot_state::RobotState;
use crate::config::MotionConfig;
use crate::messages::CmdVel;
use std::f64::consts::{FRAC_PI_2, PI};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationDecision {
    RotateLeft,
    RotateRight,
    FineCorrection { angular: f64 },
    Aligned,
}

impl RotationDecision {
    /// Command and settle time for this decision; `None` once aligned
    pub fn command(&self, config: &MotionConfig) -> Option<(CmdVel, Duration)> {
        match *self {
            RotationDecision::RotateLeft => Some((
                CmdVel::rotate(config.left_turn_velocity),
                config.turn_settle(),
            )),
            RotationDecision::RotateRight => Some((
                CmdVel::rotate(config.right_turn_velocity),
                config.turn_settle(),
            )),
            RotationDecision::FineCorrection { angular } => {
                Some((CmdVel::rotate(angular), config.movement_interval()))
            }
            RotationDecision::Aligned => None,
        }
    }
}

/// Classify a yaw offset into one of the four bands
pub fn decide(yaw_offset: f64, config: &MotionConfig) -> RotationDecision {
    if yaw_offset >= FRAC_PI_2 {
        RotationDecision::RotateLeft
    } else if yaw_offset <= -FRAC_PI_2 {
        RotationDecision::RotateRight
    } else if yaw_offset.abs() >= config.angle_tolerance {
        RotationDecision::FineCorrection {
            angular: yaw_offset * config.fine_turn_gain,
        }
    } else {
        RotationDecision::Aligned
    }
}

/// Offset toward the lateral-leg heading
pub fn face_destination_offset(state: &RobotState) -> f64 {
    state.heading_goal - state.heading
}

/// Offset toward facing backward, expressed on the goal side
pub fn turn_180_offset(state: &RobotState) -> f64 {
    let target = if state.goal_side_negative() { -PI } else { PI };
    target - state.heading
}

/// Turn toward `heading_goal`; marks `oriented_for_y` once aligned
pub fn face_destination(state: &mut RobotState, config: &MotionConfig) -> RotationDecision {
    let offset = face_destination_offset(state);
    let decision = decide(offset, config);
    log::debug!(
        "face_destination: heading={:.1}° goal={:.1}° offset={:.1}° -> {:?}",
        state.heading.to_degrees(),
        state.heading_goal.to_degrees(),
        offset.to_degrees(),
        decision
    );
    if decision == RotationDecision::Aligned {
        state.oriented_for_y = true;
        log::info!("Facing destination at {:.1}°", state.heading.to_degrees());
    }
    decision
}

/// Turn to face backward; marks `turned_to_face_backward` once aligned
pub fn turn_180(state: &mut RobotState, config: &MotionConfig) -> RotationDecision {
    let offset = turn_180_offset(state);
    let decision = decide(offset, config);
    log::debug!(
        "turn_180: heading={:.1}° offset={:.1}° -> {:?}",
        state.heading.to_degrees(),
        offset.to_degrees(),
        decision
    );
    if decision == RotationDecision::Aligned {
        state.turned_to_face_backward = true;
        log::info!("Turned to face backward at {:.1}°", state.heading.to_degrees());
    }
    decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config() -> MotionConfig {
        MotionConfig::default()
    }

    #[test]
    fn test_quarter_turn_boundaries_are_inclusive() {
        assert_eq!(decide(FRAC_PI_2, &config()), RotationDecision::RotateLeft);
        assert_eq!(decide(-FRAC_PI_2, &config()), RotationDecision::RotateRight);
        assert_eq!(decide(PI, &config()), RotationDecision::RotateLeft);
    }

    #[test]
    fn test_fine_band_scales_offset() {
        let cfg = config();
        match decide(0.5, &cfg) {
            RotationDecision::FineCorrection { angular } => {
                assert_relative_eq!(angular, 0.5 * cfg.fine_turn_gain)
            }
            other => panic!("expected fine correction, got {:?}", other),
        }
        match decide(-0.3, &cfg) {
            RotationDecision::FineCorrection { angular } => assert!(angular < 0.0),
            other => panic!("expected fine correction, got {:?}", other),
        }
    }

    #[test]
    fn test_tolerance_boundary_still_corrects() {
        let cfg = config();
        assert!(matches!(
            decide(cfg.angle_tolerance, &cfg),
            RotationDecision::FineCorrection { .. }
        ));
        assert_eq!(decide(cfg.angle_tolerance * 0.99, &cfg), RotationDecision::Aligned);
        assert_eq!(decide(0.0, &cfg), RotationDecision::Aligned);
    }

    #[test]
    fn test_commands_and_settle_times() {
        let cfg = config();
        let (cmd, settle) = RotationDecision::RotateLeft.command(&cfg).unwrap();
        assert_relative_eq!(cmd.angular, 2.54629);
        assert_relative_eq!(cmd.linear, 0.0);
        assert_eq!(settle, Duration::from_millis(600));

        let (cmd, settle) = RotationDecision::RotateRight.command(&cfg).unwrap();
        assert_relative_eq!(cmd.angular, -2.56);
        assert_eq!(settle, Duration::from_millis(600));

        let (_, settle) = RotationDecision::FineCorrection { angular: 0.2 }
            .command(&cfg)
            .unwrap();
        assert_eq!(settle, Duration::from_millis(500));

        assert!(RotationDecision::Aligned.command(&cfg).is_none());
    }

    #[test]
    fn test_face_destination_marks_oriented() {
        let cfg = config();
        let mut state = RobotState {
            heading: FRAC_PI_2 - 0.05,
            heading_goal: FRAC_PI_2,
            goal_active: true,
            ..RobotState::default()
        };
        assert_eq!(face_destination(&mut state, &cfg), RotationDecision::Aligned);
        assert!(state.oriented_for_y);
    }

    #[test]
    fn test_face_destination_from_forward_turns_left() {
        let cfg = config();
        let mut state = RobotState {
            heading: 0.0,
            heading_goal: FRAC_PI_2,
            goal_active: true,
            ..RobotState::default()
        };
        assert_eq!(face_destination(&mut state, &cfg), RotationDecision::RotateLeft);
        assert!(!state.oriented_for_y);
    }

    #[test]
    fn test_turn_180_target_follows_goal_side() {
        let left = RobotState {
            heading_goal: FRAC_PI_2,
            heading: 0.0,
            ..RobotState::default()
        };
        assert_relative_eq!(turn_180_offset(&left), PI);

        let right = RobotState {
            heading_goal: -FRAC_PI_2,
            right_side_goal: true,
            heading: -std::f64::consts::TAU,
            ..RobotState::default()
        };
        assert_relative_eq!(turn_180_offset(&right), PI);
    }

    #[test]
    fn test_straight_goal_faces_forward_again() {
        let cfg = config();
        // heading already forward: nothing to do
        let mut state = RobotState {
            heading_goal: 0.0,
            heading: 0.0,
            goal_active: true,
            ..RobotState::default()
        };
        assert_eq!(face_destination(&mut state, &cfg), RotationDecision::Aligned);

        // after a turnaround the way back is to the right
        state.heading = PI;
        state.oriented_for_y = false;
        assert_eq!(face_destination(&mut state, &cfg), RotationDecision::RotateRight);
        state.heading = FRAC_PI_2;
        assert_eq!(face_destination(&mut state, &cfg), RotationDecision::RotateRight);
    }

    #[test]
    fn test_turn_180_only_marks_when_no_command_issued() {
        let cfg = config();
        let mut state = RobotState {
            heading_goal: FRAC_PI_2,
            heading: PI - 0.4,
            goal_active: true,
            started_x_negative: true,
            ..RobotState::default()
        };
        assert!(matches!(
            turn_180(&mut state, &cfg),
            RotationDecision::FineCorrection { .. }
        ));
        assert!(!state.turned_to_face_backward);

        state.heading = PI - 0.01;
        assert_eq!(turn_180(&mut state, &cfg), RotationDecision::Aligned);
        assert!(state.turned_to_face_backward);
    }
}
