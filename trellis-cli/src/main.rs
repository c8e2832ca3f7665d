use clap::Parser;
use command::{Cli, Command};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use trellis::config::ConfigService;

mod command;
mod controller;

fn init_telemetry(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_telemetry(cli.debug);

    let config = ConfigService::from_env();
    let result = match cli.command {
        Command::Controller(args) => std::env::current_dir()
            .map_err(anyhow::Error::from)
            .and_then(|cwd| controller::run(args, &config, &cwd, &mut std::io::stdout().lock())),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("{:?}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
