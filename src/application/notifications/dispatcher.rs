// src/application/notifications/dispatcher.rs
use std::sync::Arc;

use tokio::sync::mpsc;

use super::NotificationHandler;

/// Create a bounded publisher/dispatcher pair.
pub fn channel<N>(capacity: usize) -> (NotificationPublisher<N>, NotificationDispatcher<N>)
where
    N: Send + Sync + 'static,
{
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (
        NotificationPublisher { tx },
        NotificationDispatcher { rx },
    )
}

#[derive(Debug)]
pub struct NotificationPublisher<N> {
    tx: mpsc::Sender<N>,
}

impl<N> Clone for NotificationPublisher<N> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<N> NotificationPublisher<N>
where
    N: Send + Sync + 'static,
{
    /// Queue a notification. Waits for room when the queue is full; a stopped
    /// dispatcher is logged and otherwise ignored.
    pub async fn publish(&self, notification: N) {
        if self.tx.send(notification).await.is_err() {
            tracing::warn!("notification dispatcher stopped; notification dropped");
        }
    }
}

pub struct NotificationDispatcher<N> {
    rx: mpsc::Receiver<N>,
}

impl<N> NotificationDispatcher<N>
where
    N: Send + Sync + 'static,
{
    /// Deliver notifications one at a time until every publisher is dropped.
    pub async fn run(mut self, handler: Arc<dyn NotificationHandler<N>>) {
        tracing::debug!("notification dispatcher started");
        while let Some(notification) = self.rx.recv().await {
            handler.handle(&notification).await;
        }
        tracing::debug!("notification dispatcher stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Collect(Mutex<Vec<u32>>);

    #[async_trait]
    impl NotificationHandler<u32> for Collect {
        async fn handle(&self, notification: &u32) {
            self.0.lock().unwrap().push(*notification);
        }
    }

    #[tokio::test]
    async fn delivers_in_publish_order_and_stops_with_publishers() {
        let (publisher, dispatcher) = channel::<u32>(4);
        let sink = Arc::new(Collect::default());
        let worker = tokio::spawn(dispatcher.run(sink.clone()));

        for n in 1..=3 {
            publisher.publish(n).await;
        }
        drop(publisher);
        worker.await.unwrap();

        assert_eq!(*sink.0.lock().unwrap(), [1, 2, 3]);
    }

    #[tokio::test]
    async fn publishing_after_dispatcher_drop_is_harmless() {
        let (publisher, dispatcher) = channel::<u32>(1);
        drop(dispatcher);
        publisher.publish(7).await;
    }
}
