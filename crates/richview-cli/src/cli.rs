use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "richview")]
#[command(about = "richview - render <rich> markup in the terminal with see-more truncation")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a markup file the way a view of the given size shows it
    Render(RenderArgs),

    /// List the plain text and style runs a markup file parses to
    Runs(RunsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Markup file; every line ends in a hard break
    pub file: PathBuf,

    /// View width in terminal cells
    #[arg(short, long, default_value = "80")]
    pub width: u16,

    /// Maximum lines before truncating (overrides config)
    #[arg(short = 'n', long)]
    pub max_lines: Option<usize>,

    /// See-more fragment text (overrides config)
    #[arg(short, long)]
    pub see_more: Option<String>,

    /// View configuration file (.toml, .yaml or .yml)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Show the full text, as after clicking see-more
    #[arg(long)]
    pub expand: bool,

    /// Print without ANSI styling
    #[arg(long)]
    pub plain: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RunsArgs {
    /// Markup file; every line ends in a hard break
    pub file: PathBuf,

    /// Print JSON instead of a listing
    #[arg(long)]
    pub json: bool,
}
