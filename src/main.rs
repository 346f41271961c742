use anyhow::Result;
use genauthors::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the generated file, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.execute()
}
