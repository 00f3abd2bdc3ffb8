//! Message types exchanged with the navigation controller
//!
//! - Geometry: Planar points and orientation quaternions
//! - Sensor: Odometry samples and bumper events
//! - Navigation: Displacement goals
//! - Control: Velocity commands
//!
//! All message types are re-exported at the crate root for convenience.

pub mod cmd_vel;
pub mod geometry;
pub mod navigation;
pub mod sensor;

pub use cmd_vel::CmdVel;
pub use geometry::{Point2, Quaternion};
pub use navigation::DisplacementGoal;
pub use sensor::{BumperEvent, Odometry};
