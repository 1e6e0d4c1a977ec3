use master_currency::{
    backoffice::currencies::domain::errors::{ConstraintViolation, CurrencyError},
    prelude::{AppError, InfrastructureError},
};

pub fn infrastructure(err: InfrastructureError) -> miette::Report {
    log::error!("{err}");
    miette::diagnostic!(
        severity = miette::Severity::Error,
        code = "infrastructure::Unhandled",
        "Unhandable error, logging error: {err}",
    )
    .into()
}

pub fn currency(err: CurrencyError) -> miette::Report {
    let code = match &err {
        CurrencyError::IllegalArgument(_) => "currency::IllegalArgument",
        CurrencyError::Validation(_) => "currency::Validation",
        CurrencyError::ConstraintViolation(ConstraintViolation::Duplicate(_)) => {
            "currency::Duplicate"
        }
        CurrencyError::ConstraintViolation(ConstraintViolation::Rejected(_)) => {
            "currency::Rejected"
        }
        CurrencyError::MalformedIdentifier(_) => "currency::MalformedIdentifier",
    };

    let help = match &err {
        CurrencyError::Validation(violations) => Some(
            violations
                .iter()
                .map(|v| format!("- {v}"))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        _ => None,
    };

    let mut diagnostic = miette::diagnostic!(
        severity = miette::Severity::Error,
        code = code,
        "{err}",
    );
    diagnostic.help = help;
    diagnostic.into()
}

pub trait MapCurrencyErr<T> {
    fn map_currency_err(self) -> Result<T, miette::Report>;
}

impl<T> MapCurrencyErr<T> for Result<T, AppError<CurrencyError>> {
    fn map_currency_err(self) -> Result<T, miette::Report> {
        self.map_err(|e| match e {
            AppError::Infrastructure(e) => infrastructure(e),
            AppError::App(e) => currency(e),
        })
    }
}
