//! CLI command implementations.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::api::HttpServer;
use crate::client::StudentClient;
use crate::config::ServiceConfig;
use crate::model::{Student, StudentDraft, StudentPatch};
use crate::store::{seed as seed_data, FileStore, StudentStore};

use super::args::{Cli, Command, StudentAction};
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command line.
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
        Command::Seed { config } => seed(&config),
        Command::Student { url, action } => student(&url, action),
    }
}

/// Write a default config file and create the empty data file.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::config(format!(
            "Config file '{}' already exists",
            config_path.display()
        )));
    }

    let config = ServiceConfig::default();
    fs::write(config_path, serde_json::to_string_pretty(&config)?)?;

    if !config.data_path().exists() {
        FileStore::open(config.data_path())?.clear()?;
    }

    println!("Initialized config at {}", config_path.display());
    println!("Data file: {}", config.data_file);
    Ok(())
}

/// Boot the HTTP server over the file store.
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;
    let store: Arc<dyn StudentStore> = Arc::new(FileStore::open(config.data_path())?);

    let server = HttpServer::with_config(config, store);
    runtime()?.block_on(server.start())?;
    Ok(())
}

/// Clear the store and insert the sample records.
pub fn seed(config_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;
    let store = FileStore::open(config.data_path())?;

    store.clear()?;
    let drafts = seed_data::sample_drafts();
    let count = drafts.len();
    for draft in drafts {
        store.insert(draft)?;
    }

    println!("Seeded {} students into {}", count, config.data_file);
    Ok(())
}

/// Run a client action against a running server.
fn student(url: &str, action: StudentAction) -> CliResult<()> {
    let client = StudentClient::new(url)?;

    runtime()?.block_on(async {
        match action {
            StudentAction::List => {
                let rows = client.list().await?;
                print_table(&rows);
            }
            StudentAction::Show { id } => {
                let row = client.get(id).await?;
                print_detail(&row);
            }
            StudentAction::Add {
                name,
                student_id,
                address,
                email,
                phone,
            } => {
                let created = client
                    .create(&StudentDraft {
                        name,
                        student_id,
                        address,
                        email,
                        phone,
                    })
                    .await?;
                println!("Created student {} ({})", created.id, created.student_id);
            }
            StudentAction::Edit {
                id,
                name,
                address,
                email,
                phone,
            } => {
                let updated = client
                    .update(
                        id,
                        &StudentPatch {
                            name,
                            student_id: None,
                            address,
                            email,
                            phone,
                        },
                    )
                    .await?;
                println!("Updated student {}", updated.id);
            }
            StudentAction::Remove { id } => {
                let message = client.delete(id).await?;
                println!("{}", message);
            }
        }
        Ok(())
    })
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::from)
}

fn print_table(rows: &[Student]) {
    if rows.is_empty() {
        println!("No students.");
        return;
    }

    println!("{:<6} {:<12} {:<24} {}", "ID", "STUDENT_ID", "NAME", "EMAIL");
    for row in rows {
        println!(
            "{:<6} {:<12} {:<24} {}",
            row.id,
            row.student_id,
            row.name,
            row.email.as_deref().unwrap_or("-")
        );
    }
}

fn print_detail(row: &Student) {
    println!("id:         {}", row.id);
    println!("student_id: {}", row.student_id);
    println!("name:       {}", row.name);
    println!("address:    {}", row.address);
    println!("email:      {}", row.email.as_deref().unwrap_or("-"));
    println!("phone:      {}", row.phone.as_deref().unwrap_or("-"));
    println!("created_at: {}", row.created_at.to_rfc3339());
    println!("updated_at: {}", row.updated_at.to_rfc3339());
}
