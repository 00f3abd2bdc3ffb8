//! # RELNAV - Relative Navigation
//!
//! Drives a wheeled robot to a displacement given in its own starting frame,
//! using nothing but relative odometry and a bump sensor.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use relnav::prelude::*;
//!
//! fn main() -> AnyResult<()> {
//!     let config = MotionConfig::find_and_load()?;
//!     let mut nav = RelativeNavNode::new(config)?;
//!     let mut ctx = NodeInfo::new(nav.name().to_string(), true);
//!     nav.init(&mut ctx)?;
//!
//!     nav.goal_topic()
//!         .send(DisplacementGoal::new(1.0, 0.5), None)
//!         .map_err(|_| anyhow!("goal topic full"))?;
//!
//!     loop {
//!         nav.tick(Some(&mut ctx));
//!         if nav.controller().outcome().is_some() {
//!             break;
//!         }
//!         std::thread::sleep(Duration::from_millis(50));
//!     }
//!     nav.shutdown(&mut ctx)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Non-blocking control steps** with deadline-based settle timers
//! - **Single-goal policy**: busy goals are rejected, never queued
//! - **Bump-triggered abort** that preempts any phase
//! - **Calibration as configuration** (TOML, YAML or the runtime parameter store)

// Re-export core components
pub use relnav_core::{self, *};

// Re-export standard library with alias
pub use relnav_library as library;

/// The RELNAV prelude - everything you need to get started
pub mod prelude {
    // Core node types
    pub use relnav_core::core::NodeConfig;
    pub use relnav_core::core::{Node, NodeInfo, NodeInfoExt, NodeState};

    // Communication types
    pub use relnav_core::communication::Hub;
    pub use relnav_core::{Publisher, Subscriber};

    // Scheduling and parameters
    pub use relnav_core::params::RuntimeParams;
    pub use relnav_core::scheduling::SettleTimer;

    // Error types
    pub use relnav_core::error::{NavError, NavResult};
    pub type Result<T> = NavResult<T>;

    // Common std types
    pub use std::time::{Duration, Instant};

    // Common traits
    pub use serde::{Deserialize, Serialize};

    // Re-export anyhow for error handling
    pub use anyhow::{anyhow, bail, ensure, Context, Result as AnyResult};

    // Messages, controller and node
    pub use relnav_library::prelude::*;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get RELNAV version
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_version() {
        assert_eq!(super::version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_prelude_builds_a_node() {
        let nav = RelativeNavNode::new(MotionConfig::default()).unwrap();
        assert_eq!(nav.name(), "RelativeNavNode");
        assert_eq!(nav.controller().phase(), MotionPhase::Idle);
    }

    #[test]
    fn test_nav_error_converts_to_anyhow() {
        fn load() -> AnyResult<MotionConfig> {
            Ok(MotionConfig::from_toml("increment_amount = -1.0")?)
        }
        assert!(load().is_err());
    }
}
