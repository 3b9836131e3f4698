use crate::{
    Backend, CliResult, Commands, PrivacyMode, ProfileCommands, Questionnaire, run_survey,
};

use td_core::{Answer, CoreError, QuestionId, Step};
use td_store::KeyValueStore;

use std::io::{BufRead, Write};

use serde::Serialize;

/// Execute one command against the session.
pub async fn execute<S, B, R, W>(
    command: Commands,
    questionnaire: &mut Questionnaire<S, B>,
    input: &mut R,
    out: &mut W,
    pretty: bool,
) -> CliResult<()>
where
    S: KeyValueStore,
    B: Backend,
    R: BufRead,
    W: Write,
{
    match command {
        Commands::Survey => run_survey(questionnaire, input, out).await,

        // Profile commands
        Commands::Profile { action } => match action {
            ProfileCommands::Set { name, age, sex } => {
                let profile = questionnaire.submit_profile(&name, &age, &sex)?;
                write_json(out, &profile, pretty)
            }
            ProfileCommands::Show => match questionnaire.session().get_profile() {
                Some(profile) => write_json(out, &profile, pretty),
                None => Ok(writeln!(out, "No profile stored")?),
            },
        },
        Commands::Privacy { mode } => {
            let profile = questionnaire
                .session()
                .set_privacy(mode == PrivacyMode::On)
                .ok_or_else(|| CoreError::validation("No profile stored"))?;
            write_json(out, &profile, pretty)
        }

        // Questionnaire commands
        Commands::Answers => write_json(out, &questionnaire.session().get_all_answers(), pretty),
        Commands::Record { with_feedback } => {
            let record = questionnaire.submit(with_feedback).await?;
            Ok(writeln!(out, "{}", record.to_csv())?)
        }
        Commands::Results => {
            questionnaire.resume_at(Step::Results);
            let analysis = questionnaire.results().await?;
            write_json(out, &analysis, pretty)
        }
        Commands::Select { label } => {
            questionnaire.resume_at(Step::Results);
            questionnaire.select_intervention(&label)?;
            Ok(writeln!(out, "Selected: {}", label.trim())?)
        }
        Commands::Feedback { value } => {
            let answer = Answer::parse(QuestionId::Feedback, &value)?;
            questionnaire.resume_at(Step::Feedback);
            questionnaire.submit_feedback(answer).await?;
            Ok(writeln!(out, "Feedback submitted")?)
        }

        // Session commands
        Commands::Reset => {
            questionnaire.session().reset_all()?;
            Ok(writeln!(out, "Session reset")?)
        }
        Commands::Clear => {
            questionnaire.session().clear_all()?;
            Ok(writeln!(out, "All data cleared")?)
        }
    }
}

fn write_json<T: Serialize, W: Write>(out: &mut W, value: &T, pretty: bool) -> CliResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(std::io::Error::from)?;

    Ok(writeln!(out, "{json}")?)
}
