//! # RELNAV Standard Library
//!
//! Messages, control algorithms, and nodes for driving a wheeled robot to a
//! displacement given in its own starting frame, using relative odometry and
//! a bump sensor only.
//!
//! ## Structure
//!
//! ```text
//! relnav_library/
//! ── messages/       # Goal, odometry, bumper, and velocity messages
//! ── algorithms/     # Pure control logic (no I/O)
//! ── nodes/          # Topic-driven wrappers around the algorithms
//! ── config.rs       # Calibration constants
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use relnav_library::{MotionConfig, RelativeNavNode};
//!
//! let node = RelativeNavNode::new(MotionConfig::default())?;
//! ```

pub mod algorithms;
pub mod config;
pub mod messages;
pub mod nodes;

pub use relnav_core::LogSummary;

pub use config::MotionConfig;
pub use messages::*;
pub use nodes::RelativeNavNode;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::LogSummary;

    pub use crate::messages::{
        cmd_vel::CmdVel,
        geometry::{Point2, Quaternion},
        navigation::DisplacementGoal,
        sensor::{BumperEvent, Odometry},
    };

    pub use crate::algorithms::goal_intake::{GoalResponse, IgnoreReason, RejectReason};
    pub use crate::algorithms::motion_sequencer::{GoalOutcome, MotionController};
    pub use crate::algorithms::robot_state::{MotionPhase, RobotState};
    pub use crate::config::MotionConfig;
    pub use crate::nodes::RelativeNavNode;
}
