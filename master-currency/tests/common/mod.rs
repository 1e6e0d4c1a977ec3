#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use master_currency::{
    audit::{
        domain::{event::AuditEvent, sink::AuditSink},
        Auditor,
    },
    prelude::{AppContext, InfrastructureError},
    shared::infrastructure::database::{connect, Connection},
    Config,
};
use serde_json::{json, Value};
use tokio::sync::mpsc;

pub struct RecordingSink(mpsc::UnboundedSender<AuditEvent>);

#[async_trait::async_trait]
impl AuditSink for RecordingSink {
    async fn post(&self, event: AuditEvent) -> Result<(), InfrastructureError> {
        self.0.send(event).map_err(InfrastructureError::new)
    }
}

pub struct FailingSink;

#[async_trait::async_trait]
impl AuditSink for FailingSink {
    async fn post(&self, _event: AuditEvent) -> Result<(), InfrastructureError> {
        Err(InfrastructureError::new("collector unavailable"))
    }
}

/// Fresh in-memory store per call.
pub async fn database() -> Connection {
    connect(&Config::default()).await.expect("To connect")
}

pub async fn context() -> (AppContext, mpsc::UnboundedReceiver<AuditEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let auditor = Auditor::new(Arc::new(RecordingSink(tx)), "PLATFORM");
    (AppContext::new(database().await, auditor), rx)
}

pub async fn failing_audit_context() -> AppContext {
    let auditor = Auditor::new(Arc::new(FailingSink), "PLATFORM");
    AppContext::new(database().await, auditor)
}

/// Receives the next `count` audit events, failing if they do not show up.
pub async fn next_events(
    rx: &mut mpsc::UnboundedReceiver<AuditEvent>,
    count: usize,
) -> Vec<AuditEvent> {
    let mut events = Vec::with_capacity(count);
    for _ in 0..count {
        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("audit event in time")
            .expect("audit channel open");
        events.push(event);
    }
    events
}

pub async fn event_names(
    rx: &mut mpsc::UnboundedReceiver<AuditEvent>,
    count: usize,
) -> Vec<String> {
    next_events(rx, count)
        .await
        .into_iter()
        .map(|event| event.name)
        .collect()
}

pub fn currency(tenant: &str, code: &str) -> Value {
    json!({
        "tenantId": tenant,
        "currencyCode": code,
        "currencyName": "RUPEESIndia",
        "decimalDigit": "4",
        "delimiter": ",",
        "createdDate": "2018-06-12T10:15:30.000Z",
        "lastUpdatedDate": "2018-06-12T10:15:30.000Z",
        "createdBy": "SYSTEM",
        "updatedBy": "SYSTEM",
        "objVersion": 123,
        "enabledFlag": "1",
        "currencyLocale": "BANGALORE"
    })
}
