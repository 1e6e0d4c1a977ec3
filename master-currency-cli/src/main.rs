mod args;
mod commands;
mod diagnostics;
mod logging;
mod output;

use clap::Parser;

use args::{CliParser, Command};

#[tokio::main]
async fn main() -> miette::Result<()> {
    dotenvy::dotenv().ok();
    let cli = CliParser::parse();
    let _logger = logging::init(&cli.log_level)?;

    if let Command::Schema = cli.command {
        output::print_json(&master_currency::backoffice::currencies::domain::schema::json_schema());
        return Ok(());
    }

    let config = cli.config();
    let ctx = master_currency::setup(&config)
        .await
        .map_err(diagnostics::infrastructure)?;

    let result = commands::run(&ctx, cli.command).await;

    ctx.provide::<master_currency::audit::Auditor>().flush().await;
    result
}
