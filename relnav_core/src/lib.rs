//! # RELNAV Core
//!
//! The runtime building blocks shared by every RELNAV component.
//!
//! - **Nodes**: Units of computation driven by repeated `tick()` calls
//! - **Communication**: In-process publisher-subscriber topics between nodes
//! - **Scheduling**: Deadline-based settle timers that replace blocking waits
//! - **Parameters**: Key-value runtime configuration persisted as YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use relnav_core::{Hub, Node, NodeInfo};
//!
//! struct ExampleNode {
//!     output: Hub<String>,
//! }
//!
//! impl Node for ExampleNode {
//!     fn name(&self) -> &'static str { "example" }
//!
//!     fn tick(&mut self, ctx: Option<&mut NodeInfo>) {
//!         let _ = self.output.send("Hello RELNAV!".into(), ctx);
//!     }
//! }
//! ```

pub mod communication;
pub mod core;
pub mod error;
pub mod params;
pub mod scheduling;

// Re-export commonly used types for easy access
pub use communication::Hub;
pub use core::{LogSummary, Node, NodeConfig, NodeInfo, NodeInfoExt, NodeState};
pub use error::{NavError, NavResult};
pub use params::RuntimeParams;
pub use scheduling::SettleTimer;

// Re-export communication traits for transport-agnostic usage
pub use communication::traits::{Publisher, Subscriber};
