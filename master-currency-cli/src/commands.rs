use std::{convert::Infallible, str::FromStr};

use master_currency::{
    backoffice::currencies::application::{
        get_all::GetAll, get_by_id::GetById, get_many::GetMany, get_one::GetOne,
        save_one::SaveOne, validate::Validate,
    },
    prelude::AppContext,
};
use serde_json::Value;

use crate::{args::Command, diagnostics::MapCurrencyErr, output::print_json};

/// A JSON argument. Input that is not valid JSON is taken as a plain string,
/// so `find-one currencyCode INR` works without quoting.
#[derive(Debug, Clone)]
pub struct JsonArg(pub Value);

impl FromStr for JsonArg {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            serde_json::from_str(s).unwrap_or_else(|_| Value::String(s.to_owned())),
        ))
    }
}

pub async fn run(ctx: &AppContext, command: Command) -> miette::Result<()> {
    match command {
        Command::Schema => Ok(()),

        Command::Validate { json } => {
            let service: Validate = ctx.provide();
            service
                .run(Some(&json.0))
                .map_err(crate::diagnostics::currency)?;
            println!("valid");
            Ok(())
        }

        Command::Save { json } => {
            let service: SaveOne = ctx.provide();
            let stored = service.run(Some(json.0)).await.map_currency_err()?;
            print_json(&stored);
            Ok(())
        }

        Command::List { limit } => {
            let service: GetAll = ctx.provide();
            let records = service.run(Some(limit)).await.map_currency_err()?;
            print_json(&records);
            Ok(())
        }

        Command::Get { id } => {
            let service: GetById = ctx.provide();
            let found = service.run(Some(id.as_str())).await.map_currency_err()?;
            print_json(&found);
            Ok(())
        }

        Command::FindOne { attribute, value } => {
            let service: GetOne = ctx.provide();
            let found = service
                .run(Some(attribute), Some(value.0))
                .await
                .map_currency_err()?;
            print_json(&found);
            Ok(())
        }

        Command::FindMany { attribute, value } => {
            let service: GetMany = ctx.provide();
            let found = service
                .run(Some(attribute), Some(value.0))
                .await
                .map_currency_err()?;
            print_json(&found);
            Ok(())
        }
    }
}
