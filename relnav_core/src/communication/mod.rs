//! # Communication layer for RELNAV
//!
//! - **Hub**: In-process publisher-subscriber topic backed by a crossbeam channel
//!
//! **Transport-agnostic usage:**
//! ```rust
//! use relnav_core::communication::traits::Publisher;
//! use relnav_core::NavResult;
//!
//! fn send_message<P: Publisher<String>>(publisher: &P, msg: String) -> NavResult<()> {
//!     publisher.publish(msg)
//! }
//! ```

pub mod hub;
pub mod traits;

pub use hub::{Hub, HubMetrics};
pub use traits::{Publisher, Subscriber};
