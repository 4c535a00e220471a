use clap::Parser;
use scopelog::level::parse_level;
use scopelog::logger::{Log, Logger};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Cli {
    /// Level string: "debug", "info", "event"; anything else disables output.
    #[arg(long, default_value = "debug")]
    level: String,

    /// Also append records to this file.
    #[arg(long)]
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut builder = Logger::builder(parse_level(&cli.level));
    if let Some(path) = cli.file {
        builder = builder.with_file(path);
    }
    let logger = builder.build()?;

    logger.info("demo started");
    logger.event("cache warmed");
    logger.debug("answer", "42");
    logger.error(&std::io::Error::other("broken pipe"), "demo error");

    let scoped = logger.scope("db");
    scoped.info("query executed");

    Ok(())
}
