pub mod event {
    use serde::{Deserialize, Serialize};

    use crate::date::{Datetime, Timezone};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum AuditStatus {
        Success,
        Failure,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum AuditLevel {
        Info,
        Error,
    }

    /// One notification for the audit collector.
    ///
    /// Built fresh for every call so concurrent requests never share one.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AuditEvent {
        pub application: String,
        pub source: String,
        pub name: String,
        pub created_by: String,
        pub ip_address: Option<String>,
        pub status: AuditStatus,
        pub event_date_time: Datetime,
        #[serde(rename = "keyDataAsJSON")]
        pub key_data_as_json: String,
        pub details: String,
        pub level: AuditLevel,
    }

    impl AuditEvent {
        pub fn new(application: &str, source: &str, name: impl Into<String>) -> Self {
            Self {
                application: application.to_owned(),
                source: source.to_owned(),
                name: name.into(),
                created_by: String::new(),
                ip_address: None,
                status: AuditStatus::Success,
                event_date_time: Timezone::now(),
                key_data_as_json: String::new(),
                details: String::new(),
                level: AuditLevel::Info,
            }
        }

        pub fn failed(mut self) -> Self {
            self.status = AuditStatus::Failure;
            self.level = AuditLevel::Error;
            self
        }

        pub fn created_by(mut self, actor: impl Into<String>) -> Self {
            self.created_by = actor.into();
            self
        }

        pub fn key_data(mut self, key_data: impl Into<String>) -> Self {
            self.key_data_as_json = key_data.into();
            self
        }

        pub fn details(mut self, details: impl Into<String>) -> Self {
            self.details = details.into();
            self
        }
    }
}

pub mod operation {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Operation {
        Save,
        GetAll,
        GetById,
        GetOne,
        GetMany,
    }

    impl Operation {
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Save => "save",
                Self::GetAll => "getAll",
                Self::GetById => "getById",
                Self::GetOne => "getOne",
                Self::GetMany => "getMany",
            }
        }

        pub fn initiated_name(self) -> &'static str {
            match self {
                Self::Save => "masterCurrency_save",
                Self::GetAll => "masterCurrency_getAll",
                Self::GetById => "masterCurrency_getById",
                Self::GetOne => "masterCurrency_getOne",
                Self::GetMany => "masterCurrency_getMany",
            }
        }

        pub fn exception_name(self) -> &'static str {
            match self {
                Self::Save => "masterCurrency_ExceptionOnSave",
                Self::GetAll => "masterCurrency_ExceptionOnGetAll",
                Self::GetById => "masterCurrency_ExceptionOnGetById",
                Self::GetOne => "masterCurrency_ExceptionOnGetOne",
                Self::GetMany => "masterCurrency_ExceptionOnGetMany",
            }
        }
    }
}

pub mod sink {
    use crate::shared::infrastructure::errors::InfrastructureError;

    use super::event::AuditEvent;

    #[async_trait::async_trait]
    pub trait AuditSink: Send + Sync + 'static {
        async fn post(&self, event: AuditEvent) -> Result<(), InfrastructureError>;
    }
}

#[cfg(test)]
mod tests {
    use super::{
        event::{AuditEvent, AuditLevel, AuditStatus},
        operation::Operation,
    };

    #[test]
    fn serializes_with_collector_field_names() {
        let event = AuditEvent::new("PLATFORM", "masterCurrency", "masterCurrency_save")
            .created_by("SYSTEM")
            .key_data("{\"currencyCode\":\"INR\"}")
            .details("masterCurrency creation initiated");

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["application"], "PLATFORM");
        assert_eq!(json["source"], "masterCurrency");
        assert_eq!(json["name"], "masterCurrency_save");
        assert_eq!(json["createdBy"], "SYSTEM");
        assert_eq!(json["ipAddress"], serde_json::Value::Null);
        assert_eq!(json["status"], "SUCCESS");
        assert_eq!(json["keyDataAsJSON"], "{\"currencyCode\":\"INR\"}");
        assert_eq!(json["level"], "info");
        assert!(json["eventDateTime"].is_string());
    }

    #[test]
    fn failed_marks_status_and_level() {
        let event = AuditEvent::new("PLATFORM", "masterCurrency", "x").failed();
        assert_eq!(event.status, AuditStatus::Failure);
        assert_eq!(event.level, AuditLevel::Error);
    }

    #[test]
    fn exception_names_differ_from_initiated_names() {
        for op in [
            Operation::Save,
            Operation::GetAll,
            Operation::GetById,
            Operation::GetOne,
            Operation::GetMany,
        ] {
            assert_ne!(op.initiated_name(), op.exception_name());
            assert!(op.exception_name().starts_with("masterCurrency_ExceptionOn"));
        }
    }
}
