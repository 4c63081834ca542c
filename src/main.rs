use anyhow::Context;
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use wkndb::{shell, Config, Dispatcher, Store};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr: stdout belongs to the shell, which already prints
    // every error the user needs to see
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    info!("wkn starting with database {:?}", config.db_path);

    let store = match Store::open_or_create(&config.db_path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            debug!("Startup failed: {}", e);
            println!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run_shell(store).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // stdout may be the broken stream, so this one only goes to the log
            error!("Shell failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_shell(store: Arc<Store>) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::new(store);

    shell::run(&dispatcher, tokio::io::stdin(), tokio::io::stdout())
        .await
        .context("shell I/O failed")?;

    Ok(())
}
