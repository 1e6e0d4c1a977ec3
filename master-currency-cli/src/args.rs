use master_currency::{backoffice::currencies::domain::currency_field::CurrencyField, Config};

use crate::commands::JsonArg;

#[derive(clap::Parser)]
#[command(name = "master-currency", version, about = "Currency reference data")]
pub struct CliParser {
    /// Store connection string, overrides MASTER_CURRENCY_DB_URL
    #[arg(long, global = true)]
    pub db_url: Option<String>,

    /// Overrides MASTER_CURRENCY_DB_NAMESPACE
    #[arg(long, global = true)]
    pub namespace: Option<String>,

    /// Overrides MASTER_CURRENCY_DB_DATABASE
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Audit collector endpoint, overrides MASTER_CURRENCY_AUDIT_URL
    #[arg(long, global = true)]
    pub audit_url: Option<String>,

    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

impl CliParser {
    pub fn config(&self) -> Config {
        let mut config = Config::from_env();

        if let Some(url) = &self.db_url {
            config.db_url = url.clone();
        }
        if let Some(namespace) = &self.namespace {
            config.namespace = namespace.clone();
        }
        if let Some(database) = &self.database {
            config.database = database.clone();
        }
        if let Some(url) = &self.audit_url {
            config.audit_url = Some(url.clone());
        }

        config
    }
}

#[derive(clap::Subcommand)]
pub enum Command {
    /// Print the JSON schema records are validated against
    Schema,

    /// Check a record against the schema without storing it
    Validate {
        #[arg(short, long)]
        json: JsonArg,
    },

    /// Validate and store a new record
    Save {
        #[arg(short, long)]
        json: JsonArg,
    },

    /// List records, zero or a negative limit lists all of them
    List {
        #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
        limit: i64,
    },

    /// Fetch a record by its store identifier
    Get { id: String },

    /// First record whose attribute equals the value
    FindOne {
        attribute: CurrencyField,
        value: JsonArg,
    },

    /// Every record whose attribute equals the value
    FindMany {
        attribute: CurrencyField,
        value: JsonArg,
    },
}
