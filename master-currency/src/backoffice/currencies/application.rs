use crate::{
    audit::{domain::operation::Operation, Auditor},
    backoffice::currencies::domain::errors::CurrencyError,
    prelude::AppError,
};

/// Posts the exception event for a failed call. Successful calls only carry
/// the "initiated" event.
fn report_failure<T>(
    auditor: &Auditor,
    operation: Operation,
    key_data: String,
    result: &Result<T, AppError<CurrencyError>>,
) {
    if let Err(err) = result {
        log::debug!("{} failed: {err}", operation.as_str());
        auditor.emit(
            auditor
                .exception(operation)
                .key_data(key_data)
                .details(format!(
                    "caught exception on {}: {err}",
                    operation.initiated_name()
                )),
        );
    }
}

fn illegal_argument<T>(name: &'static str) -> Result<T, AppError<CurrencyError>> {
    Err(AppError::App(CurrencyError::IllegalArgument(name)))
}

pub mod validate {
    use serde_json::Value;

    use crate::{
        backoffice::currencies::domain::{errors::CurrencyError, validation},
        iprelude::*,
        prelude::AppContext,
    };

    /// Schema check of a candidate record, without touching the store.
    pub struct Validate;

    impl FromContext<AppContext> for Validate {
        fn from_context(_ctx: &AppContext) -> Self {
            Self
        }
    }

    impl Validate {
        pub fn run(&self, candidate: Option<&Value>) -> Result<(), CurrencyError> {
            let candidate = candidate.ok_or(CurrencyError::IllegalArgument("record"))?;
            validation::validate(candidate).map_err(CurrencyError::Validation)
        }
    }
}

pub mod save_one {
    use serde_json::Value;

    use crate::{
        audit::{domain::operation::Operation, Auditor},
        backoffice::currencies::domain::{
            currency::{CurrencyRecord, StoredCurrency},
            errors::CurrencyError,
            repository::Repository,
            validation,
        },
        iprelude::*,
        prelude::{AppContext, AppError, InfrastructureError},
    };

    pub struct SaveOne {
        repository: Box<dyn Repository>,
        auditor: Auditor,
    }

    impl FromContext<AppContext> for SaveOne {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
                auditor: ctx.provide(),
            }
        }
    }

    impl SaveOne {
        /// Validates and stores a new record. Nothing is persisted when the
        /// candidate fails validation.
        pub async fn run(
            &self,
            candidate: Option<Value>,
        ) -> Result<StoredCurrency, AppError<CurrencyError>> {
            let key_data = candidate
                .as_ref()
                .map_or_else(|| "null".to_owned(), Value::to_string);

            let result = self.save(candidate).await;
            super::report_failure(&self.auditor, Operation::Save, key_data, &result);
            result
        }

        async fn save(
            &self,
            candidate: Option<Value>,
        ) -> Result<StoredCurrency, AppError<CurrencyError>> {
            let Some(candidate) = candidate.filter(|c| !c.is_null()) else {
                return super::illegal_argument("record");
            };

            let actor = candidate
                .get("createdBy")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned();

            self.auditor.emit(
                self.auditor
                    .initiated(Operation::Save)
                    .created_by(actor)
                    .key_data(candidate.to_string())
                    .details("masterCurrency creation initiated"),
            );

            validation::validate(&candidate)
                .map_err(|violations| AppError::App(CurrencyError::Validation(violations)))?;

            let record: CurrencyRecord =
                serde_json::from_value(candidate).map_err(InfrastructureError::from)?;

            self.repository
                .save(record)
                .await
                .map_err(|e| e.map_app(CurrencyError::from))
        }
    }
}

pub mod get_all {
    use crate::{
        audit::{domain::operation::Operation, Auditor},
        backoffice::currencies::domain::{
            currency::StoredCurrency, errors::CurrencyError, repository::Repository,
        },
        iprelude::*,
        prelude::{AppContext, AppError},
    };

    pub struct GetAll {
        repository: Box<dyn Repository>,
        auditor: Auditor,
    }

    impl FromContext<AppContext> for GetAll {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
                auditor: ctx.provide(),
            }
        }
    }

    impl GetAll {
        /// `limit` of zero or below lists every record.
        pub async fn run(
            &self,
            limit: Option<i64>,
        ) -> Result<Vec<StoredCurrency>, AppError<CurrencyError>> {
            let key_data = match limit {
                Some(limit) => format!("getAll with limit {limit}"),
                None => "getAll with limit null".to_owned(),
            };

            let result = self.get_all(limit, &key_data).await;
            super::report_failure(&self.auditor, Operation::GetAll, key_data, &result);
            result
        }

        async fn get_all(
            &self,
            limit: Option<i64>,
            key_data: &str,
        ) -> Result<Vec<StoredCurrency>, AppError<CurrencyError>> {
            let Some(limit) = limit else {
                return super::illegal_argument("limit");
            };

            self.auditor.emit(
                self.auditor
                    .initiated(Operation::GetAll)
                    .key_data(key_data)
                    .details("masterCurrency getAll method"),
            );

            Ok(self.repository.find_all(limit).await?)
        }
    }
}

pub mod get_by_id {
    use crate::{
        audit::{domain::operation::Operation, Auditor},
        backoffice::currencies::domain::{
            currency::StoredCurrency, errors::CurrencyError, lookup::Lookup,
            repository::Repository,
        },
        iprelude::*,
        prelude::{AppContext, AppError},
    };

    pub struct GetById {
        repository: Box<dyn Repository>,
        auditor: Auditor,
    }

    impl FromContext<AppContext> for GetById {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
                auditor: ctx.provide(),
            }
        }
    }

    impl GetById {
        pub async fn run(
            &self,
            id: Option<&str>,
        ) -> Result<Lookup<StoredCurrency>, AppError<CurrencyError>> {
            let key_data = format!("masterCurrency id is {}", id.unwrap_or("null"));

            let result = self.get_by_id(id, &key_data).await;
            super::report_failure(&self.auditor, Operation::GetById, key_data, &result);
            result
        }

        async fn get_by_id(
            &self,
            id: Option<&str>,
            key_data: &str,
        ) -> Result<Lookup<StoredCurrency>, AppError<CurrencyError>> {
            let Some(id) = id else {
                return super::illegal_argument("id");
            };

            self.auditor.emit(
                self.auditor
                    .initiated(Operation::GetById)
                    .key_data(key_data)
                    .details("masterCurrency getById initiated"),
            );

            let found = self
                .repository
                .find_by_id(id)
                .await
                .map_err(|e| e.map_app(CurrencyError::from))?;

            if found.is_none() {
                log::debug!("no currency found by id {id}");
            }

            Ok(found.into())
        }
    }
}

mod attribute_query {
    use serde_json::Value;

    use crate::{
        backoffice::currencies::domain::{currency_field::CurrencyField, errors::CurrencyError},
        prelude::AppError,
    };

    pub(super) fn key_data(field: Option<CurrencyField>, value: Option<&Value>) -> String {
        let field = field.map_or("null", CurrencyField::as_str);
        let value = value.map_or_else(|| "null".to_owned(), Value::to_string);
        format!("masterCurrency {field} with value {value}")
    }

    pub(super) fn require(
        field: Option<CurrencyField>,
        value: Option<Value>,
    ) -> Result<(CurrencyField, Value), AppError<CurrencyError>> {
        match (field, value.filter(|v| !v.is_null())) {
            (Some(field), Some(value)) => Ok((field, value)),
            _ => super::illegal_argument("attribute/value"),
        }
    }
}

pub mod get_one {
    use serde_json::Value;

    use crate::{
        audit::{domain::operation::Operation, Auditor},
        backoffice::currencies::domain::{
            currency::StoredCurrency, currency_field::CurrencyField, errors::CurrencyError,
            lookup::Lookup, repository::Repository,
        },
        iprelude::*,
        prelude::{AppContext, AppError},
    };

    use super::attribute_query;

    pub struct GetOne {
        repository: Box<dyn Repository>,
        auditor: Auditor,
    }

    impl FromContext<AppContext> for GetOne {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
                auditor: ctx.provide(),
            }
        }
    }

    impl GetOne {
        /// First record whose `field` equals `value`, or [`Lookup::Empty`].
        pub async fn run(
            &self,
            field: Option<CurrencyField>,
            value: Option<Value>,
        ) -> Result<Lookup<StoredCurrency>, AppError<CurrencyError>> {
            let key_data = attribute_query::key_data(field, value.as_ref());

            let result = self.get_one(field, value, &key_data).await;
            super::report_failure(&self.auditor, Operation::GetOne, key_data, &result);
            result
        }

        async fn get_one(
            &self,
            field: Option<CurrencyField>,
            value: Option<Value>,
            key_data: &str,
        ) -> Result<Lookup<StoredCurrency>, AppError<CurrencyError>> {
            let (field, value) = attribute_query::require(field, value)?;

            self.auditor.emit(
                self.auditor
                    .initiated(Operation::GetOne)
                    .key_data(key_data)
                    .details("masterCurrency getOne initiated"),
            );

            Ok(self.repository.find_one(field, value).await?.into())
        }
    }
}

pub mod get_many {
    use serde_json::Value;

    use crate::{
        audit::{domain::operation::Operation, Auditor},
        backoffice::currencies::domain::{
            currency::StoredCurrency, currency_field::CurrencyField, errors::CurrencyError,
            repository::Repository,
        },
        iprelude::*,
        prelude::{AppContext, AppError},
    };

    use super::attribute_query;

    pub struct GetMany {
        repository: Box<dyn Repository>,
        auditor: Auditor,
    }

    impl FromContext<AppContext> for GetMany {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
                auditor: ctx.provide(),
            }
        }
    }

    impl GetMany {
        pub async fn run(
            &self,
            field: Option<CurrencyField>,
            value: Option<Value>,
        ) -> Result<Vec<StoredCurrency>, AppError<CurrencyError>> {
            let key_data = attribute_query::key_data(field, value.as_ref());

            let result = self.get_many(field, value, &key_data).await;
            super::report_failure(&self.auditor, Operation::GetMany, key_data, &result);
            result
        }

        async fn get_many(
            &self,
            field: Option<CurrencyField>,
            value: Option<Value>,
            key_data: &str,
        ) -> Result<Vec<StoredCurrency>, AppError<CurrencyError>> {
            let (field, value) = attribute_query::require(field, value)?;

            self.auditor.emit(
                self.auditor
                    .initiated(Operation::GetMany)
                    .key_data(key_data)
                    .details("masterCurrency getMany initiated"),
            );

            Ok(self.repository.find_many(field, value).await?)
        }
    }
}
