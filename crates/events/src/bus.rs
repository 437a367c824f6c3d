//! Publish/subscribe abstraction (mechanics only).
//!
//! The bus distributes change notifications to subscribed views. It is
//! intentionally lightweight:
//!
//! - Transport-agnostic: works with in-memory channels or anything else.
//! - Broadcast semantics: each subscriber gets a copy of every message.
//! - Best-effort: publishing never fails at this boundary. The stores are the
//!   source of truth; a view that misses a notification simply re-derives on
//!   its next read.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to a change stream.
///
/// Designed for single-threaded consumption: one subscription per view.
/// Messages arrive in publish order per publisher.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Domain-agnostic change bus.
///
/// `publish` is infallible: there is no user-visible error channel in this
/// system, and a dropped notification only delays a view until its next read.
pub trait ChangeBus<M>: Send + Sync {
    fn publish(&self, message: M);

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> ChangeBus<M> for Arc<B>
where
    B: ChangeBus<M> + ?Sized,
{
    fn publish(&self, message: M) {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
