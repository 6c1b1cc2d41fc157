//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for trivia-server
#[derive(Parser, Debug)]
#[command(name = "trivia-server")]
#[command(author, version, about = "Trivia catalog - JSON API and terminal quiz play")]
#[command(long_about = r#"
Trivia Server keeps a catalog of trivia questions filed under categories and
serves it two ways: a JSON HTTP API for frontends, and a terminal quiz played
directly with --play.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./trivia.toml       Project-level config
3. ~/.config/trivia-server/config.toml   Global config

Example:
  trivia-server --seed seed/questions.toml
  trivia-server --bind 0.0.0.0:5000 --seed seed/questions.toml
  trivia-server --play --category 1 --seed seed/questions.toml
"#)]
pub struct Cli {
    /// Play a quiz in the terminal instead of serving HTTP
    #[arg(long)]
    pub play: bool,

    /// Category id to restrict quiz play to (0 means all categories)
    #[arg(long, value_name = "ID")]
    pub category: Option<u64>,

    /// Address to serve the HTTP API on
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// TOML seed file that populates the store at startup
    #[arg(long, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
