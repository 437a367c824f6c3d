//! In-memory change bus.

use std::sync::{Mutex, mpsc};

use crate::bus::{ChangeBus, Subscription};

/// In-memory pub/sub bus.
///
/// - No IO / no async
/// - Best-effort fan-out
/// - Dead subscribers are pruned on publish
#[derive(Debug)]
pub struct InMemoryChangeBus<M> {
    subscribers: Mutex<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryChangeBus<M> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M> Default for InMemoryChangeBus<M> {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<M> ChangeBus<M> for InMemoryChangeBus<M>
where
    M: Clone + Send + 'static,
{
    fn publish(&self, message: M) {
        let Ok(mut subs) = self.subscribers.lock() else {
            // A poisoned lock means a subscriber list we cannot touch;
            // notifications stop but store state stays valid.
            return;
        };

        subs.retain(|tx| tx.send(message.clone()).is_ok());
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();

        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subscriber_sees_every_message() {
        let bus = InMemoryChangeBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();

        bus.publish("changed");

        assert_eq!(a.try_recv().unwrap(), "changed");
        assert_eq!(b.try_recv().unwrap(), "changed");
    }

    #[test]
    fn dropped_subscribers_do_not_block_publish() {
        let bus = InMemoryChangeBus::new();
        let kept = bus.subscribe();
        drop(bus.subscribe());

        bus.publish(1u32);
        bus.publish(2u32);

        assert_eq!(kept.try_recv().unwrap(), 1);
        assert_eq!(kept.try_recv().unwrap(), 2);
    }
}
