use crate::communication::traits::{Publisher, Subscriber};
use crate::core::node::{LogSummary, NodeInfo};
use crate::error::{NavError, NavResult};
use crossbeam::channel::{self, Receiver, Sender, TrySendError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Lock-free atomic metrics for Hub monitoring
#[derive(Debug, Default)]
struct AtomicHubMetrics {
    messages_sent: AtomicU64,
    messages_received: AtomicU64,
    send_failures: AtomicU64,
}

impl AtomicHubMetrics {
    fn snapshot(&self) -> HubMetrics {
        HubMetrics {
            messages_sent: self.messages_sent.load(Ordering::Relaxed),
            messages_received: self.messages_received.load(Ordering::Relaxed),
            send_failures: self.send_failures.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of Hub traffic counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HubMetrics {
    pub messages_sent: u64,
    pub messages_received: u64,
    pub send_failures: u64,
}

/// In-process topic for pub/sub messaging
///
/// Clones share the same queue; each message is delivered to exactly one
/// receiving clone, in send order.
pub struct Hub<T> {
    sender: Sender<T>,
    receiver: Receiver<T>,
    topic_name: String,
    metrics: Arc<AtomicHubMetrics>,
}

impl<T> Clone for Hub<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            receiver: self.receiver.clone(),
            topic_name: self.topic_name.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Hub<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hub")
            .field("topic_name", &self.topic_name)
            .field("pending", &self.receiver.len())
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Hub<T> {
    /// Create a new Hub
    pub fn new(topic_name: &str) -> NavResult<Self> {
        Self::new_with_capacity(topic_name, 1024)
    }

    /// Create a new Hub with custom capacity
    pub fn new_with_capacity(topic_name: &str, capacity: usize) -> NavResult<Self> {
        if capacity == 0 {
            return Err(NavError::communication(format!(
                "Hub '{}' needs a non-zero capacity",
                topic_name
            )));
        }
        let (sender, receiver) = channel::bounded(capacity);

        Ok(Hub {
            sender,
            receiver,
            topic_name: topic_name.to_string(),
            metrics: Arc::new(AtomicHubMetrics::default()),
        })
    }

    /// Send a message; the message is handed back when the queue is full
    pub fn send(&self, msg: T, ctx: Option<&mut NodeInfo>) -> Result<(), T>
    where
        T: LogSummary,
    {
        let summary = ctx.as_ref().map(|_| msg.log_summary());
        match self.sender.try_send(msg) {
            Ok(()) => {
                self.metrics.messages_sent.fetch_add(1, Ordering::Relaxed);
                if let (Some(ctx), Some(summary)) = (ctx, summary) {
                    ctx.log_pub_summary(&self.topic_name, &summary);
                }
                Ok(())
            }
            Err(TrySendError::Full(msg)) | Err(TrySendError::Disconnected(msg)) => {
                self.metrics.send_failures.fetch_add(1, Ordering::Relaxed);
                Err(msg)
            }
        }
    }

    /// Receive a message from the topic
    pub fn recv(&self, ctx: Option<&mut NodeInfo>) -> Option<T>
    where
        T: LogSummary,
    {
        let msg = self.receiver.try_recv().ok()?;
        self.metrics
            .messages_received
            .fetch_add(1, Ordering::Relaxed);
        if let Some(ctx) = ctx {
            ctx.log_sub_summary(&self.topic_name, &msg.log_summary());
        }
        Some(msg)
    }

    /// Get current metrics snapshot
    pub fn get_metrics(&self) -> HubMetrics {
        self.metrics.snapshot()
    }

    /// Get the topic name for this Hub
    pub fn get_topic_name(&self) -> &str {
        &self.topic_name
    }
}

impl<T> Publisher<T> for Hub<T>
where
    T: LogSummary + Send + 'static,
{
    fn publish(&self, msg: T) -> NavResult<()> {
        self.send(msg, None).map_err(|_| {
            NavError::communication(format!("Topic '{}' is full", self.topic_name))
        })
    }
}

impl<T> Subscriber<T> for Hub<T>
where
    T: LogSummary + Send + 'static,
{
    fn try_recv(&self) -> Option<T> {
        self.recv(None)
    }

    fn has_messages(&self) -> bool {
        !self.receiver.is_empty()
    }
}
