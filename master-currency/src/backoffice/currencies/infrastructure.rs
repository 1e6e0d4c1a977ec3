pub mod repository {
    use serde_json::Value;
    use surrealdb::sql::Thing;

    use crate::{
        backoffice::currencies::domain::{
            currency::{CurrencyRecord, StoredCurrency},
            currency_field::CurrencyField,
            currency_id::CurrencyId,
            errors::{ConstraintViolation, MalformedIdentifier},
            repository::Repository,
            schema::TABLE,
        },
        iprelude::*,
        prelude::{AppError, InfrastructureError},
        shared::{
            domain::context::DbContext,
            infrastructure::database::Connection,
        },
    };

    pub struct SurrealRepository(Connection);

    impl SurrealRepository {
        pub fn new(connection: Connection) -> Self {
            Self(connection)
        }
    }

    impl FromContext<DbContext> for SurrealRepository {
        fn from_context(ctx: &DbContext) -> Self {
            Self(Connection::from_context(ctx))
        }
    }

    #[derive(serde::Deserialize)]
    struct SurrealCurrency {
        id: Thing,
        #[serde(flatten)]
        record: CurrencyRecord,
    }

    impl TryFrom<SurrealCurrency> for StoredCurrency {
        type Error = InfrastructureError;

        fn try_from(value: SurrealCurrency) -> Result<Self, Self::Error> {
            let id: CurrencyId = value.id.id.to_raw().parse().map_err(InfrastructureError::new)?;
            Ok(StoredCurrency {
                id,
                record: value.record,
            })
        }
    }

    fn into_stored(
        entities: Vec<SurrealCurrency>,
    ) -> Result<Vec<StoredCurrency>, InfrastructureError> {
        entities.into_iter().map(StoredCurrency::try_from).collect()
    }

    fn save_error(code: &str, err: surrealdb::Error) -> AppError<ConstraintViolation> {
        use surrealdb::{error, Error};

        match err {
            Error::Db(error::Db::IndexExists { .. }) => {
                AppError::App(ConstraintViolation::Duplicate(code.to_owned()))
            }
            Error::Db(e @ (error::Db::FieldCheck { .. } | error::Db::FieldValue { .. })) => {
                AppError::App(ConstraintViolation::Rejected(e.to_string()))
            }
            Error::Api(error::Api::Query(message)) if message.contains("already contains") => {
                AppError::App(ConstraintViolation::Duplicate(code.to_owned()))
            }
            // Remote engines only hand back the rendered message of a failed assert.
            Error::Api(error::Api::Query(message))
                if message.contains("Found") && message.contains("for field `") =>
            {
                AppError::App(ConstraintViolation::Rejected(message))
            }
            e => AppError::Infrastructure(e.into()),
        }
    }

    #[async_trait::async_trait]
    impl Repository for SurrealRepository {
        async fn save(
            &self,
            record: CurrencyRecord,
        ) -> Result<StoredCurrency, AppError<ConstraintViolation>> {
            let code = record.currency_code.clone();

            let response = self
                .0
                .query(format!("CREATE {TABLE} CONTENT $record"))
                .bind(("record", record))
                .await
                .map_err(|e| save_error(&code, e))?;

            let mut response = response.check().map_err(|e| save_error(&code, e))?;
            let created: Option<SurrealCurrency> = response.take(0).map_err(InfrastructureError::from)?;

            let Some(created) = created else {
                return Err(AppError::Infrastructure(InfrastructureError::new(
                    "store returned no record after create",
                )));
            };

            let stored = StoredCurrency::try_from(created)?;
            log::debug!("saved currency {} with id {}", code, stored.id);
            Ok(stored)
        }

        async fn find_all(&self, limit: i64) -> Result<Vec<StoredCurrency>, InfrastructureError> {
            let query = if limit < 1 {
                format!("SELECT * FROM {TABLE}")
            } else {
                format!("SELECT * FROM {TABLE} LIMIT {limit}")
            };

            let mut response = self.0.query(query).await?;
            let entities: Vec<SurrealCurrency> = response.take(0)?;
            log::debug!("found {} currencies (limit {limit})", entities.len());

            into_stored(entities)
        }

        async fn find_one(
            &self,
            field: CurrencyField,
            value: Value,
        ) -> Result<Option<StoredCurrency>, InfrastructureError> {
            let mut response = self
                .0
                .query(format!(
                    "SELECT * FROM {TABLE} WHERE {field} = $value LIMIT 1"
                ))
                .bind(("value", value))
                .await?;

            let entity: Option<SurrealCurrency> = response.take(0)?;
            log::debug!("find one by {field}: found = {}", entity.is_some());

            entity.map(StoredCurrency::try_from).transpose()
        }

        async fn find_many(
            &self,
            field: CurrencyField,
            value: Value,
        ) -> Result<Vec<StoredCurrency>, InfrastructureError> {
            let mut response = self
                .0
                .query(format!("SELECT * FROM {TABLE} WHERE {field} = $value"))
                .bind(("value", value))
                .await?;

            let entities: Vec<SurrealCurrency> = response.take(0)?;
            log::debug!("find many by {field}: found {}", entities.len());

            into_stored(entities)
        }

        async fn find_by_id(
            &self,
            id: &str,
        ) -> Result<Option<StoredCurrency>, AppError<MalformedIdentifier>> {
            let id: CurrencyId = id.parse().map_err(AppError::App)?;

            let mut response = self
                .0
                .query(format!("SELECT * FROM type::thing('{TABLE}', $id)"))
                .bind(("id", id.to_string()))
                .await
                .map_err(InfrastructureError::from)?;

            let entity: Option<SurrealCurrency> = response.take(0).map_err(InfrastructureError::from)?;
            log::debug!("find by id {id}: found = {}", entity.is_some());

            Ok(entity.map(StoredCurrency::try_from).transpose()?)
        }

        async fn delete_all(&self) -> Result<(), InfrastructureError> {
            self.0
                .query(format!("DELETE {TABLE}"))
                .await?
                .check()?;

            log::debug!("deleted every currency");
            Ok(())
        }
    }

}
