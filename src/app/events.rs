use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::{sync::mpsc, time::interval};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    Input(Event),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

#[must_use]
pub fn frame_interval(fps: u8) -> Duration {
    Duration::from_millis(1000_u64 / u64::from(fps.clamp(15, 60)))
}

/// Drives the effect clock. The task ends once the receiving side is gone.
pub fn start_frame_task(tx: mpsc::Sender<AppEvent>, fps: u8) {
    tokio::spawn(async move {
        let mut ticker = interval(frame_interval(fps));
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                tracing::debug!("frame task stopped");
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_interval_follows_fps_within_supported_range() {
        assert_eq!(frame_interval(30), Duration::from_millis(33));
        assert_eq!(frame_interval(60), Duration::from_millis(16));
        assert_eq!(frame_interval(0), Duration::from_millis(66));
        assert_eq!(frame_interval(200), Duration::from_millis(16));
    }

    #[tokio::test]
    async fn frame_task_emits_ticks() {
        let (tx, mut rx) = mpsc::channel(4);
        start_frame_task(tx, 60);
        let event = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("tick before timeout");
        assert!(matches!(event, Some(AppEvent::TickFrame)));
    }
}
