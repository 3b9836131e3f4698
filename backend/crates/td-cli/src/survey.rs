//! Interactive questionnaire on a line-based terminal.

use crate::{Backend, CliError, CliResult, Questionnaire};

use td_core::{
    Analysis, Answer, QuestionId, QuestionKind, SCALE_MAX, SCALE_MIN, SEX_OPTIONS, Step,
};
use td_store::KeyValueStore;

use std::io::{BufRead, Write};

/// Run passes until input ends or the user declines another pass.
pub async fn run_survey<S, B, R, W>(
    questionnaire: &mut Questionnaire<S, B>,
    input: &mut R,
    out: &mut W,
) -> CliResult<()>
where
    S: KeyValueStore,
    B: Backend,
    R: BufRead,
    W: Write,
{
    loop {
        let step = questionnaire.current_step();
        let proceed = match step {
            Step::Profile => ask_profile(questionnaire, input, out)?,
            Step::Results => choose_intervention(questionnaire, input, out).await?,
            _ => ask_question(questionnaire, input, out).await?,
        };

        if !proceed {
            writeln!(out, "Survey ended.")?;
            return Ok(());
        }

        if step == Step::Feedback {
            writeln!(out, "Thank you for your feedback!")?;
            match prompt(input, out, "Start another pass? [y/N]")? {
                Some(reply) if reply.eq_ignore_ascii_case("y") => {}
                _ => return Ok(()),
            }
        }
    }
}

fn ask_profile<S, B, R, W>(
    questionnaire: &mut Questionnaire<S, B>,
    input: &mut R,
    out: &mut W,
) -> CliResult<bool>
where
    S: KeyValueStore,
    B: Backend,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Welcome to ToneDown. Tell us a little about yourself.")?;
    let sex_hint = format!("Sex ({})", SEX_OPTIONS.join("/"));

    loop {
        let Some(name) = prompt(input, out, "Name")? else {
            return Ok(false);
        };
        let Some(age) = prompt(input, out, "Age")? else {
            return Ok(false);
        };
        let Some(sex) = prompt(input, out, &sex_hint)? else {
            return Ok(false);
        };

        match questionnaire.submit_profile(&name, &age, &sex) {
            Ok(_) => return Ok(true),
            Err(CliError::Core(_)) => writeln!(out, "Please fill in all fields.")?,
            Err(e) => return Err(e),
        }
    }
}

async fn ask_question<S, B, R, W>(
    questionnaire: &mut Questionnaire<S, B>,
    input: &mut R,
    out: &mut W,
) -> CliResult<bool>
where
    S: KeyValueStore,
    B: Backend,
    R: BufRead,
    W: Write,
{
    let step = questionnaire.current_step();
    let Some(question) = step.question() else {
        return Err(td_core::CoreError::invalid_step(step, "a question").into());
    };
    let initial = questionnaire.initial_value();

    let mut label = format!("{} {}", question.prompt(), hint(question));
    if let Some(ref value) = initial {
        label.push_str(&format!(" [{value}]"));
    }

    loop {
        let Some(raw) = prompt(input, out, &label)? else {
            return Ok(false);
        };

        let answer = match (raw.is_empty(), &initial) {
            (true, Some(value)) => Ok(value.clone()),
            _ => Answer::parse(question, &raw),
        };

        match answer {
            Ok(answer) if step == Step::Feedback => {
                questionnaire.submit_feedback(answer).await?;
                return Ok(true);
            }
            Ok(answer) => {
                questionnaire.answer(answer).await?;
                return Ok(true);
            }
            Err(_) => writeln!(out, "{}", retry_message(question))?,
        }
    }
}

async fn choose_intervention<S, B, R, W>(
    questionnaire: &mut Questionnaire<S, B>,
    input: &mut R,
    out: &mut W,
) -> CliResult<bool>
where
    S: KeyValueStore,
    B: Backend,
    R: BufRead,
    W: Write,
{
    let analysis = questionnaire.results().await?;
    writeln!(out, "Recommended interventions:")?;
    for (index, score) in analysis.scores.iter().enumerate() {
        writeln!(
            out,
            "  {}. {:<32} {:>5.1}%",
            index + 1,
            score.label,
            score.weight * 100.0
        )?;
    }

    loop {
        let Some(raw) = prompt(input, out, "Choose an intervention (number or name)")? else {
            return Ok(false);
        };

        if let Some(label) = pick(&analysis, &raw) {
            questionnaire.select_intervention(&label)?;
            writeln!(out, "Try this now: {label}")?;
            return Ok(true);
        }
        writeln!(out, "Please pick one of the listed interventions.")?;
    }
}

/// Resolve a 1-based index or a case-insensitive label.
fn pick(analysis: &Analysis, raw: &str) -> Option<String> {
    let raw = raw.trim();
    if let Ok(index) = raw.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| analysis.scores.get(i))
            .map(|score| score.label.clone());
    }
    analysis
        .scores
        .iter()
        .find(|score| score.label.eq_ignore_ascii_case(raw))
        .map(|score| score.label.clone())
}

fn hint(question: QuestionId) -> String {
    match question.kind() {
        QuestionKind::Scale => format!("({SCALE_MIN}-{SCALE_MAX})"),
        QuestionKind::Choice(options) => format!("({})", options.join("/")),
    }
}

fn retry_message(question: QuestionId) -> String {
    match question.kind() {
        QuestionKind::Scale => {
            format!("Please enter a number from {SCALE_MIN} to {SCALE_MAX}.")
        }
        QuestionKind::Choice(options) => {
            format!("Please choose one of: {}.", options.join(", "))
        }
    }
}

/// Print `label` and read one trimmed line. None at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> CliResult<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
