use crate::{Answer, QuestionId};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Answers accumulated over one questionnaire pass.
///
/// Later writes to the same question overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<QuestionId, Answer>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question: QuestionId, answer: Answer) -> Option<Answer> {
        self.0.insert(question, answer)
    }

    pub fn get(&self, question: QuestionId) -> Option<&Answer> {
        self.0.get(&question)
    }

    /// Rendered value for a record column, empty when unanswered
    pub fn field(&self, question: QuestionId) -> String {
        self.get(question).map(ToString::to_string).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.0.iter()
    }
}

impl FromIterator<(QuestionId, Answer)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, Answer)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
