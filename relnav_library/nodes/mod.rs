//! RELNAV Library Nodes
//!
//! Nodes wrap the pure controllers in `algorithms` with topic wiring. Every
//! node follows the same API pattern: `NodeName::new(config)` for the default
//! topics or `NodeName::new_with_topics(...)` for custom names.
//!
//! ## Navigation
//! - `RelativeNavNode` - Goal-directed displacement controller
//!
//! # Usage
//!
//! ```rust
//! use relnav_library::{MotionConfig, RelativeNavNode};
//!
//! let nav = RelativeNavNode::new(MotionConfig::default()).unwrap();
//! assert_eq!(nav.cmd_topic().get_topic_name(), "cmd_vel");
//! ```

pub mod relative_nav_node;

pub use relative_nav_node::RelativeNavNode;
