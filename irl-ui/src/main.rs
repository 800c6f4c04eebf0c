//! IRL Co-Creation Wizard UI service - Main entry point
//!
//! Serves the login gate, wizard navigation, taxonomy reference, and
//! feedback endpoints over the irl-common core.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use irl_ui::server::{self, AppContext};

/// Command-line arguments for irl-ui
#[derive(Parser, Debug)]
#[command(name = "irl-ui")]
#[command(about = "IRL co-creation wizard feedback service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5730", env = "IRL_UI_PORT")]
    port: u16,

    /// Path to the feedback database (falls back to env/config/default)
    #[arg(short, long)]
    db_path: Option<String>,

    /// Login passcode (falls back to env/config/default)
    #[arg(long)]
    passcode: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "irl_ui=debug,irl_common=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Composite section keys are only sound if no taxonomy label contains
    // the delimiter; refuse to start otherwise.
    irl_common::taxonomy::verify_labels().context("Invalid taxonomy reference data")?;

    let db_path = irl_common::config::resolve_db_path(args.db_path.as_deref());
    let passcode = irl_common::config::resolve_passcode(args.passcode.as_deref());

    info!("Starting IRL wizard UI on port {}", args.port);
    info!("Feedback database: {}", db_path.display());

    let db_pool = irl_common::db::init_database(&db_path)
        .await
        .context("Failed to initialize feedback database")?;

    let ctx = AppContext::new(db_pool, passcode);
    server::run(args.port, ctx).await
}
