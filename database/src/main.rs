use clap::{Parser, Subcommand};
use std::error::Error;

mod commands;
mod config;

use commands::migrate;

/// Manage the asset capture database: create it, apply or roll back the
/// `assets` / `asset_images` schema, and report migration state.
#[derive(Parser)]
#[command(name = "asset-capture-database", author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the database on the server if it does not exist (needs psql)
    Create {
        /// Database name, defaults to the one in DATABASE_URL
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Apply pending schema migrations
    Migrate {
        /// Apply at most this many migrations
        #[arg(short, long)]
        steps: Option<u32>,
    },
    /// Drop both tables and recreate them empty
    Reset,
    /// List applied and pending migrations
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // `create` talks to the server through psql; the rest share one connection
    match Cli::parse().command {
        Command::Create { name } => commands::create::execute(name).await,
        Command::Migrate { steps } => migrate::execute(&migrate::connect().await?, steps).await,
        Command::Reset => migrate::reset(&migrate::connect().await?).await,
        Command::Status => migrate::status(&migrate::connect().await?).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_migrate_steps_flag() {
        let cli = Cli::parse_from(["asset-capture-database", "migrate", "--steps", "1"]);
        assert!(matches!(cli.command, Command::Migrate { steps: Some(1) }));
    }

    #[test]
    fn test_create_name_is_optional() {
        let named = Cli::parse_from(["asset-capture-database", "create", "--name", "assets"]);
        assert!(matches!(named.command, Command::Create { name: Some(ref n) } if n == "assets"));

        let unnamed = Cli::parse_from(["asset-capture-database", "create"]);
        assert!(matches!(unnamed.command, Command::Create { name: None }));
    }

    #[test]
    fn test_reset_and_status_take_no_arguments() {
        assert!(Cli::try_parse_from(["asset-capture-database", "reset", "--steps", "1"]).is_err());
        assert!(matches!(
            Cli::parse_from(["asset-capture-database", "status"]).command,
            Command::Status
        ));
    }
}
