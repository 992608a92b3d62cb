use std::error::Error;
use std::process::Command;
use tracing::{error, info};

use crate::config::DatabaseConfig;

/// Execute the create command
pub async fn execute(name: Option<String>) -> Result<(), Box<dyn Error>> {
    let config = DatabaseConfig::from_env()?;

    // Use provided name or default from config
    let db_name = name.unwrap_or(config.name.clone());
    if !is_valid_identifier(&db_name) {
        error!("Refusing to create database with name '{}'", db_name);
        return Err(format!("Invalid database name: {}", db_name).into());
    }

    info!("Creating database: {}", db_name);
    let conn_string = config.server_url();

    let exists = psql(
        &conn_string,
        &format!("SELECT 1 FROM pg_database WHERE datname = '{}'", db_name),
    )?;
    if exists.trim() == "1" {
        info!("Database '{}' already exists", db_name);
        return Ok(());
    }

    psql(&conn_string, &format!("CREATE DATABASE {}", db_name))?;
    info!("Database '{}' created successfully", db_name);
    Ok(())
}

/// Run one statement through `psql`, returning its tuples-only stdout
fn psql(conn_string: &str, statement: &str) -> Result<String, Box<dyn Error>> {
    let output = Command::new("psql")
        .arg(conn_string)
        .arg("-t")
        .arg("-c")
        .arg(statement)
        .output()
        .map_err(|e| {
            error!("Failed to execute psql command: {}", e);
            e
        })?;

    if !output.status.success() {
        let error_msg = String::from_utf8_lossy(&output.stderr);
        error!("psql failed: {}", error_msg);
        return Err(format!("psql failed: {}", error_msg).into());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Database names are interpolated into SQL, so only plain identifiers pass
fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
