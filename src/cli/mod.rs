mod handlers;
pub mod parse;

use clap::Parser;
use env_logger::Env;
pub use parse::Cli;

use crate::core::error::GraphError;

pub use handlers::resolve;

/// `warn` by default, `info` with `--verbose`; `RUST_LOG` wins over both.
fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

pub fn run() -> Result<(), GraphError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    handlers::histogram(&cli)
}
