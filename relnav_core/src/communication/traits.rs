//! Common traits for message transports
//!
//! Nodes and tests depend on these instead of a concrete transport so that a
//! robot-side bus adapter can stand in for the in-process [`Hub`](super::Hub).

use crate::error::NavResult;
use std::fmt::Debug;

/// Common trait for publisher/sender implementations
pub trait Publisher<T>: Send + Sync + Clone + Debug {
    /// Send a message - returns Ok on success, Err on failure
    fn publish(&self, msg: T) -> NavResult<()>;

    /// Try to send, discarding the failure reason
    fn try_publish(&self, msg: T) -> bool {
        self.publish(msg).is_ok()
    }
}

/// Common trait for subscriber/receiver implementations
pub trait Subscriber<T>: Send + Sync + Clone + Debug {
    /// Receive a message without blocking
    fn try_recv(&self) -> Option<T>;

    /// Check if messages are available
    fn has_messages(&self) -> bool {
        false
    }
}
