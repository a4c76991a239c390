//! In-process link event bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use homewatch_domain::link::LinkEvent;

/// Fan-out channel for [`LinkEvent`]s.
///
/// Publishing succeeds even when there are no active subscribers
/// (the event is simply dropped). Subscribers receive events published
/// *after* their subscription, in publication order.
#[derive(Debug, Clone)]
pub struct LinkEventBus {
    sender: broadcast::Sender<LinkEvent>,
}

impl LinkEventBus {
    /// Create a new event bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events on this bus.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LinkEvent> {
        self.sender.subscribe()
    }

    /// Publish an event to all current subscribers.
    ///
    /// A send with zero receivers is not a failure — the event is dropped.
    pub fn publish(&self, event: LinkEvent) {
        let _ = self.sender.send(event);
    }
}

impl Default for LinkEventBus {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_deliver_event_to_subscriber() {
        let bus = LinkEventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(LinkEvent::Connected);

        assert_eq!(rx.recv().await.unwrap(), LinkEvent::Connected);
    }

    #[tokio::test]
    async fn should_deliver_events_in_publication_order() {
        let bus = LinkEventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(LinkEvent::MessageReceived("first".to_string()));
        bus.publish(LinkEvent::MessageReceived("second".to_string()));

        assert_eq!(
            rx.recv().await.unwrap(),
            LinkEvent::MessageReceived("first".to_string())
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            LinkEvent::MessageReceived("second".to_string())
        );
    }

    #[tokio::test]
    async fn should_deliver_event_to_multiple_subscribers() {
        let bus = LinkEventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(LinkEvent::Disconnected);

        assert_eq!(rx1.recv().await.unwrap(), LinkEvent::Disconnected);
        assert_eq!(rx2.recv().await.unwrap(), LinkEvent::Disconnected);
    }

    #[test]
    fn should_not_fail_when_no_subscribers() {
        let bus = LinkEventBus::new(16);
        bus.publish(LinkEvent::ErrorOccurred("nobody listening".to_string()));
    }

    #[tokio::test]
    async fn should_not_deliver_events_published_before_subscription() {
        let bus = LinkEventBus::new(16);

        bus.publish(LinkEvent::Connected);

        let mut rx = bus.subscribe();
        bus.publish(LinkEvent::Disconnected);

        assert_eq!(rx.recv().await.unwrap(), LinkEvent::Disconnected);
    }
}
