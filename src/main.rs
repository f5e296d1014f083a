mod cli;
mod commands;
mod engine;
mod error;
mod naming;
mod options;
mod partition;
mod pdf;

use clap::Parser;
use cli::Cli;
use commands::split::SplitRequest;
use error::SplitError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Exit status 2 is reserved for a missing input file
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
        Err(err) => err.exit(),
    };
    let request = SplitRequest {
        input: cli.path.clone(),
        options: cli.split_options(),
        output_dir: cli.output_dir.clone(),
    };

    let stdout = std::io::stdout();
    match commands::split::run(&pdf::PdfEngine, &request, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err @ SplitError::NotFound { .. }) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
        Err(err) => {
            let code = err.exit_code();
            eprintln!("Error: {:#}", anyhow::Error::from(err));
            ExitCode::from(code)
        }
    }
}
