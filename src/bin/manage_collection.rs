use anyhow::Result;
use clap::Parser as _;
use cwp_collections::cli::ManageArgs;
use cwp_collections::config;
use cwp_collections::error::CollectionsError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    // .env must be in the environment before clap resolves env defaults
    config::load_env_file();

    let args = ManageArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_target(false).with_env_filter(filter).init();

    match cwp_collections::run_manage(&args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<CollectionsError>()
                    .map_or(2, CollectionsError::exit_code),
            );
        }
    }
}
