use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tracing::debug;

use richview_cli::{
    cli::{Cli, Commands},
    commands,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter = format!(
        "richview={0},richview_markup={0},richview_truncate={0},richview_config={0},richview_cli={0}",
        log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .init();

    let output = match &cli.command {
        Commands::Render(args) => commands::render(args)?,
        Commands::Runs(args) => commands::runs(args)?,
    };
    debug!("Writing {} bytes", output.len());

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", output)?;
    if !output.ends_with('\n') {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}
