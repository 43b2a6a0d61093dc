// Registry binary entry point

mod menu;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use common::bootstrap;
use common::config::Settings;
use common::db::repositories::{StudentRepository, StudentStore};
use common::models::NewStudent;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "registry")]
#[command(version)]
#[command(about = "Manage the students table from the command line")]
struct Cli {
    /// Directory holding default.toml / local.toml configuration
    #[arg(long, default_value = "config", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all students
    List,

    /// Add a student
    Add {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        /// Calendar date, e.g. 2020-09-05
        #[arg(long)]
        enrollment_date: String,
    },

    /// Update a student's email
    UpdateEmail {
        #[arg(long)]
        id: i32,

        #[arg(long)]
        email: String,
    },

    /// Delete a student by id
    Delete {
        #[arg(long)]
        id: i32,
    },

    /// Apply pending schema migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load_from_path(&cli.config_dir)
        .context("Failed to load configuration")?;
    settings
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    bootstrap::init_tracing(&settings);
    info!("Starting student registry");

    let db_pool = bootstrap::init_database_pool(&settings).await?;
    let repository = StudentRepository::new(db_pool.clone());

    match cli.command {
        None => menu::run(&repository).await?,
        Some(Commands::List) => {
            let students = repository.list_all().await?;
            println!("{}", output::render_students(&students));
        }
        Some(Commands::Add {
            first_name,
            last_name,
            email,
            enrollment_date,
        }) => {
            let student = NewStudent {
                first_name,
                last_name,
                email,
                enrollment_date,
            };
            repository.add(&student).await?;
            println!("Student inserted successfully");
        }
        Some(Commands::UpdateEmail { id, email }) => {
            repository.update_email(id, &email).await?;
            println!("Student email updated successfully");
        }
        Some(Commands::Delete { id }) => {
            repository.delete(id).await?;
            println!("Student deleted successfully");
        }
        Some(Commands::Migrate) => {
            bootstrap::run_migrations(&db_pool).await?;
            println!("Migrations applied");
        }
    }

    db_pool.close().await;
    Ok(())
}
