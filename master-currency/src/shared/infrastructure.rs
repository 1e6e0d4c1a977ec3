pub mod config;
pub mod database;

pub mod errors {
    #[derive(Debug, thiserror::Error)]
    #[error("infrastructure error: {0}")]
    pub struct InfrastructureError(Box<dyn std::error::Error + Send + Sync + 'static>);

    impl InfrastructureError {
        pub fn new<E>(error: E) -> Self
        where
            E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
        {
            Self(error.into())
        }
    }

    impl From<surrealdb::Error> for InfrastructureError {
        fn from(err: surrealdb::Error) -> Self {
            Self::new(err)
        }
    }

    impl From<reqwest::Error> for InfrastructureError {
        fn from(err: reqwest::Error) -> Self {
            Self::new(err)
        }
    }

    impl From<serde_json::Error> for InfrastructureError {
        fn from(err: serde_json::Error) -> Self {
            Self::new(err)
        }
    }

    /// Splits failures the caller can act on (`App`) from store or network
    /// faults (`Infrastructure`).
    #[derive(Debug, thiserror::Error)]
    pub enum AppError<E> {
        #[error(transparent)]
        App(E),
        #[error(transparent)]
        Infrastructure(InfrastructureError),
    }

    impl<E> From<InfrastructureError> for AppError<E> {
        fn from(value: InfrastructureError) -> Self {
            Self::Infrastructure(value)
        }
    }

    impl<E> AppError<E> {
        pub fn map_app<F>(self, mapper: impl FnOnce(E) -> F) -> AppError<F> {
            match self {
                AppError::App(e) => AppError::App(mapper(e)),
                AppError::Infrastructure(e) => AppError::Infrastructure(e),
            }
        }
    }
}
