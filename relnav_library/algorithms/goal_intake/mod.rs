//! Goal Intake
//!
//! Accepts at most one displacement goal at a time. A goal that arrives while
//! another is active is refused outright; the active goal is never merged,
//! queued or replaced.

use crate::algorithms::robot_state::RobotState;
use crate::messages::DisplacementGoal;
use std::f64::consts::FRAC_PI_2;

/// Why a goal was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Another goal is still being executed
    Busy,
    /// A component is NaN or infinite
    NonFinite,
}

/// Why a goal was accepted as a no-op
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Both components are zero; there is nothing to do
    ZeroDisplacement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalResponse {
    Accepted,
    Rejected(RejectReason),
    Ignored(IgnoreReason),
}

impl GoalResponse {
    pub fn is_accepted(&self) -> bool {
        matches!(self, GoalResponse::Accepted)
    }
}

/// Target heading for the lateral leg: +π/2 for a goal on the left, −π/2 on
/// the right, 0 when there is no lateral leg
pub fn heading_goal_for(dy: f64) -> f64 {
    if dy > 0.0 {
        FRAC_PI_2
    } else if dy < 0.0 {
        -FRAC_PI_2
    } else {
        0.0
    }
}

#[derive(Debug, Clone)]
pub struct GoalIntake {
    tolerance: f64,
}

impl GoalIntake {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Offer a goal to the controller
    ///
    /// On acceptance the state is reset for a fresh goal. The latest odometry
    /// sample becomes the baseline for distance read-back and the latest yaw
    /// becomes the goal frame's X axis. Any other outcome leaves `state`
    /// untouched.
    pub fn submit(&self, state: &mut RobotState, goal: &DisplacementGoal) -> GoalResponse {
        if state.goal_active {
            log::warn!(
                "Goal (x={:.3}, y={:.3}) refused; still executing goal (x={:.3}, y={:.3} remaining)",
                goal.x,
                goal.y,
                state.remaining_x,
                state.remaining_y
            );
            return GoalResponse::Rejected(RejectReason::Busy);
        }

        if !goal.is_finite() {
            log::warn!("Goal (x={}, y={}) refused; not finite", goal.x, goal.y);
            return GoalResponse::Rejected(RejectReason::NonFinite);
        }

        if goal.is_zero() {
            log::debug!("Zero displacement goal ignored");
            return GoalResponse::Ignored(IgnoreReason::ZeroDisplacement);
        }

        state.reset_to_idle();
        state.remaining_x = goal.x;
        state.remaining_y = goal.y;
        state.tolerance = self.tolerance;
        state.heading_goal = heading_goal_for(goal.y);
        state.right_side_goal = goal.y < 0.0;
        state.started_x_negative = goal.x < 0.0;
        state.rebase_odometry();
        state.frame_yaw = state.raw_yaw;
        state.goal_active = true;

        log::info!(
            "Goal accepted: x={:.3} y={:.3} heading_goal={:.1}° frame yaw={:.1}°",
            goal.x,
            goal.y,
            state.heading_goal.to_degrees(),
            state.frame_yaw.to_degrees()
        );
        GoalResponse::Accepted
    }
}
