use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, anyhow};
use highest_core::RunConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("warning: failed to initialize logging: {}", e);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_logging() -> Result<()> {
    // stdout is reserved for the JSON result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("highest=warn".parse()?)
                .add_directive("highest_core=warn".parse()?),
        )
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!("{}", e))
}

fn run() -> highest_core::Result<()> {
    let args = Args::try_parse_args(std::env::args_os())?;
    debug!("Arguments: {:?}", args);

    let config = RunConfig::new(PathBuf::from(args.path()), &args.display_length)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    highest_core::run(&config, &mut out)
}
