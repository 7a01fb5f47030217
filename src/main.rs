use clap::{Parser, Subcommand};
use coffee_till::application::engine::PurchaseEngine;
use coffee_till::config::Config;
use coffee_till::infrastructure::postgres::PgTransactionStore;
use coffee_till::interfaces::http;
use miette::{IntoDiagnostic, Result};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP service.
    Serve,
    /// Apply pending database migrations and exit.
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();

    let config = Config::from_env().into_diagnostic()?;
    let store = PgTransactionStore::connect(&config.database_url())
        .await
        .into_diagnostic()?;

    match cli.command {
        Command::Migrate => store.run_migrations().await.into_diagnostic()?,
        Command::Serve => {
            let engine = PurchaseEngine::new(Box::new(store));
            http::serve(&config, engine).await.into_diagnostic()?;
        }
    }

    Ok(())
}
