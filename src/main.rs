use clap::Parser;
use dtcalib::cli::{Cli, Commands, check_command, describe_command, dump_command, list_command};
use dtcalib::config::constants;
use std::fs::OpenOptions;
use tracing::error;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(constants::LOG_FILE)
        .expect("Failed to create log file");

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                ),
        )
        .with(
            fmt::layer()
                .with_writer(log_file)
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true)
                .with_filter(EnvFilter::new("debug")),
        )
        .init();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    match args.cmd {
        Commands::Dump { output_path } => {
            dump_command(output_path).await?;
        }
        Commands::List => {
            list_command().await?;
        }
        Commands::Describe { pipeline } => {
            describe_command(pipeline).await?;
        }
        Commands::Check => {
            check_command().await?;
        }
    }
    Ok(())
}
