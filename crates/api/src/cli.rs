//! Command-line argument model

use clap::{Args, Parser, Subcommand};
use plantview_domain::{CatalogFilters, ExecutionStatus, HistoryQuery};

/// PlantView backend client
#[derive(Debug, Parser)]
#[command(name = "plantview", version, about)]
pub struct Cli {
    /// Backend base URL (overrides configuration)
    #[arg(long, global = true, env = "PLANTVIEW_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in and store credentials
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "PLANTVIEW_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget stored credentials
    Logout,
    /// Show the signed-in user
    Me,
    /// Report whether a stored session is still valid
    Status,
    /// List catalog products for a client
    Catalog(CatalogArgs),
    /// List production executions
    History(HistoryArgs),
    /// Show one production execution
    Execution {
        id: i64,
    },
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
    #[arg(long)]
    pub client: i64,
    #[arg(long)]
    pub product_code: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub category: Option<i64>,
}

impl From<CatalogArgs> for CatalogFilters {
    fn from(args: CatalogArgs) -> Self {
        Self {
            client: args.client,
            product_code: args.product_code,
            product_description: args.description,
            category: args.category,
        }
    }
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[arg(long)]
    pub machine: Option<String>,
    /// Manufacturing order
    #[arg(long)]
    pub mo: Option<String>,
    /// Product reference
    #[arg(long = "ref")]
    pub reference: Option<String>,
    /// IN_PROGRESS, OK, NOK or CANCELLED
    #[arg(long)]
    pub status: Option<ExecutionStatus>,
    #[arg(long)]
    pub from: Option<String>,
    #[arg(long)]
    pub to: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long)]
    pub offset: Option<u32>,
}

impl From<HistoryArgs> for HistoryQuery {
    fn from(args: HistoryArgs) -> Self {
        Self {
            machine: args.machine,
            mo: args.mo,
            reference: args.reference,
            status: args.status,
            from: args.from,
            to: args.to,
            limit: args.limit,
            offset: args.offset,
        }
    }
}
