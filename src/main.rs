//! CLI entry point for the word-search generator

use clap::Parser;
use std::process::ExitCode;
use wordsearch::io::cli::{Cli, PuzzleRunner};
use wordsearch::io::logging::init_logger;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level());

    let mut runner = PuzzleRunner::new(cli);
    match runner.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
