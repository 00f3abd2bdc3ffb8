//! Pure control algorithms for relative navigation
//!
//! Everything here is computation over a single owned [`RobotState`]; no
//! topic access and no sleeping. Nodes feed events in and publish whatever
//! commands come back out.
//!
//! # Available Algorithms
//!
//! ## State
//! - **robot_state**: The mutable aggregate shared by every component, plus phase names
//!
//! ## Sensing
//! - **pose_tracker**: Heading normalization into the goal-side sign convention, odometry samples
//! - **safety_monitor**: Bump-triggered abort
//!
//! ## Control
//! - **goal_intake**: Single-active-goal acceptance
//! - **rotation**: Quarter-turn primitives and proportional heading correction
//! - **translation**: Increment-and-read-back forward motion per axis
//! - **motion_sequencer**: The state machine that composes the above
//!
//! [`RobotState`]: robot_state::RobotState

pub mod goal_intake;
pub mod motion_sequencer;
pub mod pose_tracker;
pub mod robot_state;
pub mod rotation;
pub mod safety_monitor;
pub mod translation;
