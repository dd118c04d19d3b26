//! darkcli entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use cmdfolder_cli::cli::Cli;
use cmdfolder_cli::demo::{self, SharedJournal};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing on stderr so it stays out of command output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let journal = SharedJournal::default();
    let mut root = demo::build_tree(&journal);

    if let Err(e) = root.run_with_config(&cli.shell_config()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
