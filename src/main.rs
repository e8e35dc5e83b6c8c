mod config;
mod context;
mod entity;
mod error;
mod indexer;
mod progress;
mod utils;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use context::Context;

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let from_args = Config::parse();
    init_tracing(from_args.verbose());
    let config = Config::new_from_file().extends(from_args);

    let context = Context::new(config);
    let root = context.config.root().to_path_buf();

    let outcome = indexer::generate_index_files(&context, &root).await;
    context.announce(indexer::outcome_line(outcome)?);

    Ok(())
}
