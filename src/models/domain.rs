use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use crate::core::encoder::EncodeError;
use crate::core::survey::Question;

/// One respondent's answers, keyed by question
///
/// Questions may be left unanswered; their columns are zero-filled when the
/// response is aligned to the model's features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyResponse {
    answers: BTreeMap<Question, String>,
}

impl SurveyResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, question: Question, option: impl Into<String>) -> Self {
        self.insert(question, option);
        self
    }

    pub fn insert(&mut self, question: Question, option: impl Into<String>) {
        self.answers.insert(question, option.into());
    }

    pub fn answer(&self, question: Question) -> Option<&str> {
        self.answers.get(&question).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Question, &str)> {
        self.answers.iter().map(|(q, o)| (*q, o.as_str()))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// Build a response from display-name keys, rejecting questions the survey
/// does not ask. Option values are checked later by the encoder.
impl TryFrom<BTreeMap<String, String>> for SurveyResponse {
    type Error = EncodeError;

    fn try_from(raw: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let mut response = SurveyResponse::new();
        for (name, option) in raw {
            let question = Question::from_name(&name)
                .ok_or(EncodeError::UnknownQuestion(name))?;
            response.insert(question, option);
        }
        Ok(response)
    }
}

/// Ordered feature names the model was trained on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureNames(Vec<String>);

impl FeatureNames {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// First name that appears more than once, if any
    pub fn first_duplicate(&self) -> Option<&str> {
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0
            .iter()
            .find(|name| !seen.insert(name.as_str()))
            .map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Encoded survey, one value per entry of the `FeatureNames` it was aligned to
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }
}
