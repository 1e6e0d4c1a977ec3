//! Audit trail for currency operations.
//!
//! Every facade call posts one event to an external collector. Posting is
//! fire-and-forget: the event is handed to a background task and a failing
//! collector never changes the result seen by the caller.

pub mod domain;
pub mod infrastructure;

use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinSet;

use domain::{event::AuditEvent, operation::Operation, sink::AuditSink};

pub const SOURCE: &str = "masterCurrency";

#[derive(Clone)]
pub struct Auditor {
    sink: Arc<dyn AuditSink>,
    application: String,
    pending: Arc<Mutex<JoinSet<()>>>,
}

impl Auditor {
    pub fn new(sink: Arc<dyn AuditSink>, application: impl Into<String>) -> Self {
        Self {
            sink,
            application: application.into(),
            pending: Arc::default(),
        }
    }

    /// Event for the start of `operation`, stamped with this auditor's
    /// application and source.
    pub fn initiated(&self, operation: Operation) -> AuditEvent {
        AuditEvent::new(&self.application, SOURCE, operation.initiated_name())
    }

    /// Event for a failed `operation`.
    pub fn exception(&self, operation: Operation) -> AuditEvent {
        AuditEvent::new(&self.application, SOURCE, operation.exception_name()).failed()
    }

    pub fn emit(&self, event: AuditEvent) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            log::warn!("no async runtime, dropping audit event {}", event.name);
            return;
        };

        let sink = Arc::clone(&self.sink);
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        while pending.try_join_next().is_some() {}

        pending.spawn_on(
            async move {
                let name = event.name.clone();
                if let Err(err) = sink.post(event).await {
                    log::warn!("failed to post audit event {name}: {err}");
                }
            },
            &handle,
        );
    }

    /// Waits for every event emitted so far to be posted.
    pub async fn flush(&self) {
        let mut pending = {
            let mut guard = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *guard)
        };

        while pending.join_next().await.is_some() {}
    }
}
