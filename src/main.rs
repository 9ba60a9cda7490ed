//! CLI entry point for rendering identicons from text keys

use clap::Parser;
use std::io::Write;
use tilehash::io::cli::{Cli, KeyProcessor};

fn main() -> tilehash::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} [{}] {}",
                buf.timestamp_seconds(),
                record.target(),
                record.level(),
                record.args(),
            )
        })
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut processor = KeyProcessor::new(cli);
    processor.process()
}
