mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::GraphError;

/// Default log filter: `debug` with `--debug`, otherwise `warn`.
/// `RUST_LOG` still wins when set.
fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

pub fn run() -> Result<(), GraphError> {
    let cli = parse::Cli::parse();
    init_logging(cli.debug);
    match cli.cmd {
        parse::Command::Plot(a) => handlers::plot(&a),
        parse::Command::Spec(a) => handlers::spec(&a),
        parse::Command::Migrate(a) => handlers::migrate(&a),
        parse::Command::Demo(a) => handlers::demo(&a),
    }
}
