use crate::ProfileCommands;

use clap::{Subcommand, ValueEnum};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through the questionnaire interactively
    Survey,

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Turn privacy mode on or off
    Privacy {
        #[arg(value_enum)]
        mode: PrivacyMode,
    },

    /// Show the stored answers
    Answers,

    /// Build a record from the stored answers and upload it
    Record {
        /// Fill the feedback column and flag the upload as feedback
        #[arg(long)]
        with_feedback: bool,
    },

    /// Show intervention recommendations
    Results,

    /// Save the chosen intervention
    Select {
        /// Intervention label, e.g. "Take a walk"
        label: String,
    },

    /// Rate the chosen intervention (1-5) and submit the full record
    Feedback { value: String },

    /// Remove profile, answers and selected intervention
    Reset,

    /// Remove everything in the session store
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrivacyMode {
    On,
    Off,
}
