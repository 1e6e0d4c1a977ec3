use std::sync::Arc;

use crate::{
    audit::{
        domain::sink::AuditSink,
        infrastructure::{HttpAuditSink, LogAuditSink},
        Auditor,
    },
    shared::infrastructure::{config::Config, database::Connection, errors::InfrastructureError},
};

/// Builds a service out of the shared application state.
pub trait FromContext<C>: Sized {
    fn from_context(ctx: &C) -> Self;
}

#[derive(Clone)]
pub struct AppContext {
    db: DbContext,
    auditor: Auditor,
}

#[derive(Clone)]
pub struct DbContext(Connection);

impl AppContext {
    pub fn new(connection: Connection, auditor: Auditor) -> Self {
        Self {
            db: DbContext(connection),
            auditor,
        }
    }

    pub fn provide<T: FromContext<Self>>(&self) -> T {
        T::from_context(self)
    }

    pub fn connection(&self) -> &Connection {
        &self.db.0
    }
}

pub async fn setup(config: &Config) -> Result<AppContext, InfrastructureError> {
    let db = crate::shared::infrastructure::database::connect(config).await?;

    let sink: Arc<dyn AuditSink> = match &config.audit_url {
        Some(url) => Arc::new(HttpAuditSink::new(url.clone())),
        None => Arc::new(LogAuditSink),
    };

    Ok(AppContext::new(
        db,
        Auditor::new(sink, config.application.clone()),
    ))
}

impl FromContext<DbContext> for Connection {
    fn from_context(ctx: &DbContext) -> Self {
        ctx.0.clone()
    }
}

impl FromContext<AppContext> for Auditor {
    fn from_context(ctx: &AppContext) -> Self {
        ctx.auditor.clone()
    }
}

mod provides_config {
    use crate::backoffice::currencies::{
        domain::repository::Repository as CurrenciesRepository,
        infrastructure::repository::SurrealRepository as CurrenciesSurrealRepository,
    };

    use super::{AppContext, DbContext, FromContext};

    macro_rules! provide_map (($ctx: ident { $($service: path: $real_service: path),* $(,)* }) => {
        $(
        impl FromContext<AppContext> for Box<dyn $service> {
            fn from_context(app_ctx: &AppContext) -> Self {
                let ctx: &$ctx = &app_ctx.db;
                let real_service = <$real_service as FromContext<$ctx>>::from_context(ctx);
                Box::new(real_service)
            }
        }
        )*
    });

    provide_map! {DbContext {
        CurrenciesRepository: CurrenciesSurrealRepository,
    }}
}
