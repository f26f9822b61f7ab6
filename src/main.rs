//! ppmkit - Command-line tool for transforming and morphing plain PPM images

use std::process::ExitCode;

use ppmkit::cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    cli::run()
}
