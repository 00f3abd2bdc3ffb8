//! Logging through an optional node context
//!
//! `Node::tick` receives `Option<&mut NodeInfo>`; headless callers such as
//! unit tests pass `None`. The extension methods below let controller code log
//! unconditionally and have the record dropped when no context is attached:
//!
//! ```
//! use relnav_core::{NodeInfo, NodeInfoExt};
//!
//! fn report(mut ctx: Option<&mut NodeInfo>) {
//!     ctx.log_warning("bumper contact");
//! }
//!
//! report(None);
//! let mut info = NodeInfo::new("nav".to_string(), false);
//! report(Some(&mut info));
//! assert_eq!(info.metrics().warnings_count, 1);
//! ```

use super::NodeInfo;

/// Logging on a context that may be absent
pub trait NodeInfoExt {
    fn log_debug(&mut self, message: &str);

    fn log_info(&mut self, message: &str);

    /// Counted in the node's warning metrics when a context is present
    fn log_warning(&mut self, message: &str);

    /// Counted in the node's error metrics when a context is present
    fn log_error(&mut self, message: &str);

    /// Whether log calls reach a node context at all
    fn is_attached(&self) -> bool;
}

impl NodeInfoExt for Option<&mut NodeInfo> {
    #[inline]
    fn log_debug(&mut self, message: &str) {
        if let Some(info) = self.as_deref_mut() {
            info.log_debug(message);
        }
    }

    #[inline]
    fn log_info(&mut self, message: &str) {
        if let Some(info) = self.as_deref() {
            info.log_info(message);
        }
    }

    #[inline]
    fn log_warning(&mut self, message: &str) {
        match self.as_deref_mut() {
            Some(info) => info.log_warning(message),
            None => log::trace!("dropped warning without node context: {}", message),
        }
    }

    #[inline]
    fn log_error(&mut self, message: &str) {
        match self.as_deref_mut() {
            Some(info) => info.log_error(message),
            None => log::trace!("dropped error without node context: {}", message),
        }
    }

    fn is_attached(&self) -> bool {
        self.is_some()
    }
}
