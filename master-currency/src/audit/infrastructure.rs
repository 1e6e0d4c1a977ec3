use crate::shared::infrastructure::errors::InfrastructureError;

use super::domain::{event::AuditEvent, sink::AuditSink};

/// Posts events as JSON to the audit collector.
pub struct HttpAuditSink {
    client: reqwest::Client,
    url: String,
}

impl HttpAuditSink {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait::async_trait]
impl AuditSink for HttpAuditSink {
    async fn post(&self, event: AuditEvent) -> Result<(), InfrastructureError> {
        self.client
            .post(&self.url)
            .json(&event)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

/// Writes events to the `audit` log target, used when no collector is
/// configured.
pub struct LogAuditSink;

#[async_trait::async_trait]
impl AuditSink for LogAuditSink {
    async fn post(&self, event: AuditEvent) -> Result<(), InfrastructureError> {
        let line = serde_json::to_string(&event)?;
        log::info!(target: "audit", "{line}");
        Ok(())
    }
}

pub struct DisabledAuditSink;

#[async_trait::async_trait]
impl AuditSink for DisabledAuditSink {
    async fn post(&self, _event: AuditEvent) -> Result<(), InfrastructureError> {
        Ok(())
    }
}
