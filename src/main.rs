use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Parse a JSON file and print the resulting value tree.
#[derive(Parser)]
#[command(name = "json-cursor", version)]
struct Cli {
    /// File to read
    #[arg(default_value = "input.json", value_hint = clap::ValueHint::FilePath)]
    path: PathBuf,

    /// Print the value on a single line instead of pretty-printing it
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let input = match fs::read_to_string(&cli.path) {
        Ok(input) => input,
        Err(err) => {
            tracing::error!(path = %cli.path.display(), %err, "failed to read input");
            return ExitCode::FAILURE;
        }
    };

    match json_cursor::parse(&input) {
        Ok(value) if cli.compact => println!("{value:?}"),
        Ok(value) => println!("{value:#?}"),
        Err(err) => {
            tracing::error!(path = %cli.path.display(), %err, "failed to parse input");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
