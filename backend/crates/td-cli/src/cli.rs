use crate::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tonedown")]
#[command(about = "ToneDown tinnitus questionnaire")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Analysis backend URL (overrides [api].base_url)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Keep the session in memory only; nothing is written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
