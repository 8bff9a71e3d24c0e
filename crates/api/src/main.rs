//! PlantView - command-line client for the PlantView backend
//!
//! Main entry point for the `plantview` binary.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use plantview_app::cli::{Cli, Commands};
use plantview_app::commands;
use plantview_app::utils::logging::{init_tracing, LogFormat};
use plantview_app::AppContext;
use plantview_domain::ApiError;
use plantview_infra::config;
use serde::Serialize;
use tracing::debug;

/// Exit status when the stored session is no longer usable.
const EXIT_REAUTHENTICATE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    init_tracing(LogFormat::from_env());
    match dotenv {
        Ok(path) => debug!(?path, "loaded .env"),
        Err(e) => debug!("no .env loaded: {e}"),
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            match err.downcast_ref::<ApiError>() {
                Some(api) if api.requires_reauthentication() => {
                    ExitCode::from(EXIT_REAUTHENTICATE)
                }
                _ => ExitCode::FAILURE,
            }
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = config::load().context("failed to load configuration")?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    let ctx = AppContext::from_config(config).context("failed to initialize PlantView")?;

    match cli.command {
        Commands::Login { email, password } => {
            print_json(&commands::login(&ctx, &email, &password).await?)
        }
        Commands::Logout => {
            commands::logout(&ctx).await?;
            print_json(&serde_json::json!({ "signed_out": true }))
        }
        Commands::Me => print_json(&commands::current_user(&ctx).await?),
        Commands::Status => print_json(&commands::session_status(&ctx).await?),
        Commands::Catalog(args) => {
            print_json(&commands::list_products(&ctx, &args.into()).await?)
        }
        Commands::History(args) => {
            print_json(&commands::list_executions(&ctx, &args.into()).await?)
        }
        Commands::Execution { id } => print_json(&commands::get_execution(&ctx, id).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
