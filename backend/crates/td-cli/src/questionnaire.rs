//! One questionnaire pass at a time: profile, six questions, results,
//! intervention choice and feedback, then back to the first question.

use crate::{Backend, CliResult};

use td_client::{ClientResult, UploadRequest};
use td_core::{
    Analysis, Answer, CoreError, HYDRATE_PREVIOUS_ANSWERS, Step, SubmissionRecord, UserProfile,
};
use td_store::{KeyValueStore, SessionStore};

use log::{debug, error, info, warn};

pub struct Questionnaire<S: KeyValueStore, B: Backend> {
    step: Step,
    session: SessionStore<S>,
    backend: B,
    mock_analysis: bool,
}

impl<S: KeyValueStore, B: Backend> Questionnaire<S, B> {
    /// Start at Profile, or at the first question once onboarding is done.
    pub fn new(session: SessionStore<S>, backend: B, mock_analysis: bool) -> Self {
        let step = if session.is_setup_complete() && session.get_profile().is_some() {
            Step::Profile.next()
        } else {
            Step::Profile
        };

        Self {
            step,
            session,
            backend,
            mock_analysis,
        }
    }

    pub fn current_step(&self) -> Step {
        self.step
    }

    /// Jump to `step`, as a one-shot command does when it acts on a later screen.
    pub fn resume_at(&mut self, step: Step) {
        self.step = step;
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Value the current step opens with.
    pub fn initial_value(&self) -> Option<Answer> {
        if HYDRATE_PREVIOUS_ANSWERS
            && let Some(question) = self.step.question()
            && let Some(previous) = self.session.get_all_answers().get(question)
        {
            return Some(previous.clone());
        }
        self.step.initial_value()
    }

    /// Validate and store the profile, then move to the first question.
    ///
    /// Nothing is saved and the step does not change if a field is empty.
    pub fn submit_profile(&mut self, name: &str, age: &str, sex: &str) -> CliResult<UserProfile> {
        let profile = UserProfile::new(name, age, sex);
        profile.validate()?;

        let profile = self.session.save_profile(profile);
        self.session.mark_setup_complete();
        self.step = Step::Tinnitus;

        info!("Profile saved for {}", profile.name);
        Ok(profile)
    }

    /// Store the answer for the current step and advance.
    ///
    /// Location and Feedback submit a record before advancing. A failed
    /// submission is logged and does not hold the flow back.
    pub async fn answer(&mut self, answer: Answer) -> CliResult<Step> {
        let question = self.step.accept(&answer)?;
        self.session.save_answer(question, answer);

        if self.step.submits() {
            let include_feedback = self.step == Step::Feedback;
            if let Err(e) = self.submit(include_feedback).await {
                error!("Error sending data to backend: {e}");
            }
        }

        let previous = self.step;
        self.step = self.step.next();
        debug!("Step {previous} -> {}", self.step);
        Ok(self.step)
    }

    /// Analysis for the results screen.
    pub async fn results(&self) -> CliResult<Analysis> {
        if self.step != Step::Results {
            return Err(CoreError::invalid_step(self.step, "results").into());
        }
        Ok(self.fetch_analysis().await)
    }

    /// Record the chosen intervention and move to Feedback.
    pub fn select_intervention(&mut self, label: &str) -> CliResult<()> {
        if self.step != Step::Results {
            return Err(CoreError::invalid_step(self.step, "an intervention").into());
        }
        let label = label.trim();
        if label.is_empty() {
            return Err(CoreError::validation("Please select an intervention").into());
        }

        self.session.save_selected_intervention(label);
        self.step = Step::Feedback;
        Ok(())
    }

    /// Store feedback, submit the full record and start a new pass.
    pub async fn submit_feedback(&mut self, answer: Answer) -> CliResult<()> {
        if self.step != Step::Feedback {
            return Err(CoreError::invalid_step(self.step, "feedback").into());
        }
        self.answer(answer).await?;
        Ok(())
    }

    /// Build a record from the stored profile and answers and upload it.
    pub async fn submit(&self, include_feedback: bool) -> ClientResult<SubmissionRecord> {
        let profile = self.session.get_profile();
        let answers = self.session.get_all_answers();
        let record = SubmissionRecord::build(profile.as_ref(), &answers, include_feedback);

        let unsafe_fields = record.unsafe_fields();
        if !unsafe_fields.is_empty() {
            warn!(
                "Record fields contain CSV delimiters and will shift columns: {}",
                unsafe_fields.join(", ")
            );
        }

        self.backend.upload(&UploadRequest::from(&record)).await?;
        info!(
            "Submitted record for {} (with_feedback={include_feedback})",
            record.uid
        );
        Ok(record)
    }

    /// Analysis for the stored profile, or the mock set when none is available.
    pub async fn fetch_analysis(&self) -> Analysis {
        let Some(user_id) = self.session.get_profile().and_then(|p| p.id) else {
            warn!("No user ID found, showing mock analysis");
            return Analysis::mock();
        };

        match self.backend.analysis(&user_id).await {
            Ok(analysis) if self.mock_analysis => {
                debug!(
                    "Received {} interventions, replaced by mock analysis",
                    analysis.scores.len()
                );
                Analysis::mock()
            }
            Ok(analysis) if analysis.is_empty() => {
                warn!("Backend returned no interventions, showing mock analysis");
                Analysis::mock()
            }
            Ok(analysis) => analysis,
            Err(e) if e.is_unreachable() => {
                warn!("Backend unreachable, showing mock analysis: {e}");
                Analysis::mock()
            }
            Err(e) => {
                error!("Error fetching analysis: {e}");
                Analysis::mock()
            }
        }
    }
}
