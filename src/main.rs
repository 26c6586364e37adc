use clap::Parser;
use namegrind::core::cli::{self, Cli};
use namegrind::core::error::exit_code_for;

fn main() {
    let args = Cli::parse();
    init_logger(args.verbose);

    if let Err(e) = cli::run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code_for(&e));
    }
}

/// Log to stderr at `warn` by default, one level up per `-v`.
/// `RUST_LOG` takes precedence when set.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
