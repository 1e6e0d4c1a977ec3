pub mod audit;
pub mod backoffice;
pub mod shared;

pub mod prelude {
    pub use crate::shared::{
        domain::context::AppContext,
        infrastructure::errors::{AppError, InfrastructureError},
    };
}

pub(crate) mod iprelude {
    pub use crate::shared::domain::context::FromContext;
}

pub mod date {
    pub type Datetime = chrono::DateTime<chrono::Utc>;
    pub use chrono::Utc as Timezone;
}

pub use shared::domain::context::setup;
pub use shared::infrastructure::config::Config;
