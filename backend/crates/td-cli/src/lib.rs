//! ToneDown questionnaire flow and command-line front end.

pub(crate) mod backend;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub mod logger;
pub(crate) mod profile_commands;
pub(crate) mod questionnaire;
pub(crate) mod runner;
pub(crate) mod survey;

#[cfg(test)]
mod tests;

pub use backend::Backend;
pub use cli::Cli;
pub use commands::{Commands, PrivacyMode};
pub use error::{CliError, Result as CliResult};
pub use profile_commands::ProfileCommands;
pub use questionnaire::Questionnaire;
pub use runner::execute;
pub use survey::run_survey;
