//! # lancache-sync
//!
//! Reconciles AdGuard Home DNS rewrites with the published cache-domains
//! lists, pointing every cached service's domains at a lancache instance.

mod bootstrap;
mod di;
mod run;

use clap::Parser;
use lancache_sync_domain::config::LoggingConfig;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "lancache-sync")]
#[command(version)]
#[command(about = "Sync lancache DNS rewrites into AdGuard Home")]
struct Cli {}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();

    let config = match bootstrap::config::load_config() {
        Ok(config) => config,
        Err(e) => {
            bootstrap::logging::init_logging(&LoggingConfig::default());
            error!(error = %e, "Configuration error");
            std::process::exit(1);
        }
    };
    bootstrap::logging::init_logging(&config.logging);

    info!(
        api = %config.adguard.api_base,
        target = %config.sync.target_answer,
        workers = config.sync.max_workers,
        batch_size = config.sync.batch_size,
        "lancache-sync starting"
    );

    let ctx = match di::build(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!(error = %e, "Failed to initialize clients");
            std::process::exit(1);
        }
    };

    if let Err(e) = run::run(&config, &ctx).await {
        error!(error = %e, "Sync run failed");
        std::process::exit(1);
    }

    info!("lancache-sync finished");
}
