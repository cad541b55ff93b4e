//! Accounts CLI - Account management commands
//!
//! # Usage
//!
//! ```bash
//! # Create a regular account
//! accounts-cli create-user -e user@example.com --first-name Ada --last-name Lovelace
//!
//! # Create a staff + superuser account
//! accounts-cli create-superuser -e admin@example.com
//!
//! # Print an existing account
//! accounts-cli show -e admin@example.com
//! ```
//!
//! The created or found account is printed to stdout as JSON. Logs go to
//! stderr. Errors exit with a sysexits-style code derived from their kind.
//! Uses `anyhow` for startup errors; command errors are `kernel::error::AppError`.

use std::process::ExitCode;

use accounts::{
    Account, AccountError, AccountRepository, Email, ExtraFields, PgAccountRepository,
    create_account, create_privileged_account,
};
use clap::{Parser, Subcommand};
use kernel::error::app_error::{AppError, AppResult, ResultExt};
use kernel::error::kind::ErrorKind;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "accounts-cli")]
#[command(author, version, about = "Email account management")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a regular account
    CreateUser {
        /// Email address (the account's login identity)
        #[arg(short, long)]
        email: String,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        /// Grant admin panel access
        #[arg(long)]
        staff: bool,

        /// Grant every permission
        #[arg(long)]
        superuser: bool,

        /// Create the account disabled
        #[arg(long)]
        inactive: bool,
    },
    /// Create a staff + superuser account
    CreateSuperuser {
        #[arg(short, long)]
        email: String,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        /// Request is_staff=false (rejected)
        #[arg(long)]
        no_staff: bool,

        /// Request is_superuser=false (rejected)
        #[arg(long)]
        no_superuser: bool,
    },
    /// Print an account by email
    Show {
        #[arg(short, long)]
        email: String,
    },
}

impl Commands {
    /// Translate command-line flags into creation attributes.
    /// Unset flags stay `None` so the use case applies its own defaults.
    fn extra_fields(&self) -> ExtraFields {
        match self {
            Commands::CreateUser {
                first_name,
                last_name,
                staff,
                superuser,
                inactive,
                ..
            } => ExtraFields {
                is_staff: staff.then_some(true),
                is_superuser: superuser.then_some(true),
                is_active: inactive.then_some(false),
                first_name: first_name.clone(),
                last_name: last_name.clone(),
            },
            Commands::CreateSuperuser {
                first_name,
                last_name,
                no_staff,
                no_superuser,
                ..
            } => ExtraFields {
                is_staff: no_staff.then_some(false),
                is_superuser: no_superuser.then_some(false),
                is_active: None,
                first_name: first_name.clone(),
                last_name: last_name.clone(),
            },
            Commands::Show { .. } => ExtraFields::default(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "accounts=info,accounts_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(account) => {
            println!("{}", serde_json::to_string_pretty(&account)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(ExitCode::from(report_failure(&err))),
    }
}

/// Print a failed command's error and pick the exit code.
/// Account errors are already logged when converted into `AppError`.
fn report_failure(err: &AppError) -> u8 {
    eprintln!("error: {}", err);
    err.exit_code()
}

async fn run(command: Commands) -> AppResult<Account> {
    let config = CliConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await
        .map_app_err(ErrorKind::InternalServerError, "Database migration failed")?;

    let repo = PgAccountRepository::new(pool);
    let extra = command.extra_fields();

    let account = match command {
        Commands::CreateUser { email, .. } => create_account(&repo, &email, extra).await?,
        Commands::CreateSuperuser { email, .. } => {
            create_privileged_account(&repo, &email, extra).await?
        }
        Commands::Show { email } => {
            let email = Email::new(email)?;
            repo.find_by_email(&email)
                .await?
                .ok_or(AccountError::AccountNotFound)?
        }
    };

    Ok(account)
}
