//! CLI entry point for the word cloud generator

use clap::Parser;
use wordcloud::io::cli::{Cli, FileProcessor};
use wordcloud::io::error::computation_error;
use wordcloud::io::progress::install_logger;

fn main() -> wordcloud::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    let logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .build();

    let mut processor = FileProcessor::new(cli);
    install_logger(logger, processor.multi_progress())
        .map_err(|e| computation_error("install logger", &e))?;

    processor.process().map(|_written| ())
}
