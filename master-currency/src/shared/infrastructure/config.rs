//! Process-level settings read once at bootstrap.
//!
//! Every value comes from an environment variable and has a default that
//! yields a working, self-contained setup (in-memory store, audit events
//! written to the log).

pub const DB_URL_VAR: &str = "MASTER_CURRENCY_DB_URL";
pub const DB_NAMESPACE_VAR: &str = "MASTER_CURRENCY_DB_NAMESPACE";
pub const DB_DATABASE_VAR: &str = "MASTER_CURRENCY_DB_DATABASE";
pub const DB_USER_VAR: &str = "MASTER_CURRENCY_DB_USER";
pub const DB_PASSWORD_VAR: &str = "MASTER_CURRENCY_DB_PASSWORD";
pub const AUDIT_URL_VAR: &str = "MASTER_CURRENCY_AUDIT_URL";
pub const APPLICATION_VAR: &str = "MASTER_CURRENCY_APPLICATION";

const DEFAULT_DB_URL: &str = "mem://";
const DEFAULT_NAMESPACE: &str = "platform";
const DEFAULT_DATABASE: &str = "master_currency";
const DEFAULT_APPLICATION: &str = "PLATFORM";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Connection string handed to the store driver, e.g. `ws://localhost:8000`.
    pub db_url: String,
    pub namespace: String,
    pub database: String,
    /// Root sign-in, only used when both user and password are set.
    pub credentials: Option<Credentials>,
    /// Collector endpoint. `None` routes audit events to the log instead.
    pub audit_url: Option<String>,
    /// Reported as `application` on every audit event.
    pub application: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_url: DEFAULT_DB_URL.to_owned(),
            namespace: DEFAULT_NAMESPACE.to_owned(),
            database: DEFAULT_DATABASE.to_owned(),
            credentials: None,
            audit_url: None,
            application: DEFAULT_APPLICATION.to_owned(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let credentials = match (read(DB_USER_VAR), read(DB_PASSWORD_VAR)) {
            (Some(username), Some(password)) => Some(Credentials { username, password }),
            _ => None,
        };

        Self {
            db_url: read(DB_URL_VAR).unwrap_or(defaults.db_url),
            namespace: read(DB_NAMESPACE_VAR).unwrap_or(defaults.namespace),
            database: read(DB_DATABASE_VAR).unwrap_or(defaults.database),
            credentials,
            audit_url: read(AUDIT_URL_VAR),
            application: read(APPLICATION_VAR).unwrap_or(defaults.application),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn falls_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.db_url, "mem://");
        assert!(config.audit_url.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            (DB_URL_VAR, "ws://db:8000"),
            (DB_NAMESPACE_VAR, "tenant"),
            (DB_DATABASE_VAR, "ref"),
            (DB_USER_VAR, "root"),
            (DB_PASSWORD_VAR, "secret"),
            (AUDIT_URL_VAR, "http://docket/api/audit"),
            (APPLICATION_VAR, "FLUX"),
        ]));

        assert_eq!(config.db_url, "ws://db:8000");
        assert_eq!(config.namespace, "tenant");
        assert_eq!(config.database, "ref");
        assert_eq!(
            config.credentials,
            Some(Credentials {
                username: "root".into(),
                password: "secret".into()
            })
        );
        assert_eq!(config.audit_url.as_deref(), Some("http://docket/api/audit"));
        assert_eq!(config.application, "FLUX");
    }

    #[test]
    fn ignores_half_credentials_and_blank_values() {
        let config = Config::from_lookup(lookup(&[(DB_USER_VAR, "root"), (AUDIT_URL_VAR, "  ")]));
        assert!(config.credentials.is_none());
        assert!(config.audit_url.is_none());
    }
}
