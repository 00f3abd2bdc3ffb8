//! # Core types and traits for RELNAV
//!
//! - **Node**: The base trait for all computational units
//! - **NodeInfo**: Runtime context handed to nodes (logging, metrics, parameters)
//!
//! ## Node Lifecycle
//!
//! 1. **Construction** - Node is created with configuration
//! 2. **Initialization** - `init()` is called to set up resources
//! 3. **Execution** - `tick()` is called repeatedly by the host loop
//! 4. **Shutdown** - `shutdown()` is called to clean up resources

pub mod node;
pub mod node_info_ext;

pub use node::{LogSummary, Node, NodeConfig, NodeInfo, NodeMetrics, NodeState};
pub use node_info_ext::NodeInfoExt;
