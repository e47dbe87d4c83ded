//! Change-log service.
//!
//! [`ChangeLog`] subscribes to the [`EventBus`](crate::bus::EventBus)
//! broadcast channel and writes every received [`ChangeEvent`] to the
//! structured log. It runs as a long-lived background task and stops when
//! the bus is dropped.

use tokio::sync::broadcast;

use crate::bus::ChangeEvent;

/// Background service that logs store changes.
pub struct ChangeLog;

impl ChangeLog {
    /// Run the logging loop until the channel closes.
    ///
    /// Returns the number of events logged.
    pub async fn run(mut receiver: broadcast::Receiver<ChangeEvent>) -> u64 {
        let mut logged = 0;
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    Self::log(&event);
                    logged += 1;
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Change log lagged, some changes were not logged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!(logged, "Event bus closed, change log shutting down");
                    break;
                }
            }
        }
        logged
    }

    fn log(event: &ChangeEvent) {
        match event.project_id {
            Some(project_id) => tracing::info!(
                event_type = %event.event_type,
                entity_id = %event.entity_id,
                project_id = %project_id,
                "Store change",
            ),
            None => tracing::info!(
                event_type = %event.event_type,
                entity_id = %event.entity_id,
                "Store change",
            ),
        }
    }
}
