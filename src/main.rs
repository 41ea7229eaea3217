mod args;
mod scenario;

use clap::Parser;
use log::{debug, LevelFilter};

use crate::args::Args;

fn main() {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter_level(LevelFilter::Debug);
    } else if std::env::var("RUST_LOG").is_err() {
        builder.filter_level(LevelFilter::Info);
    }
    builder.init();

    debug!("args: {:?}", args);

    if let Err(e) = scenario::run_scenario(&args) {
        scenario::report_error(&e);
        std::process::exit(1);
    }
}
