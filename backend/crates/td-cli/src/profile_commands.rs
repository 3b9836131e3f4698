use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Create or update the profile
    Set {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: String,
        /// One of m, f, d
        #[arg(long)]
        sex: String,
    },
    /// Show the stored profile
    Show,
}
