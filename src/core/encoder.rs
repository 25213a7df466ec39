use std::collections::HashMap;
use thiserror::Error;
use crate::core::survey::{indicator_column, likert_score, Question, QuestionKind};
use crate::models::{FeatureNames, FeatureVector, SurveyResponse};

/// Value given to any model feature the response did not produce
pub const MISSING_FEATURE_FILL: f64 = 0.0;

/// Errors raised while turning a survey response into model features
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Invalid option for {question}: {option:?} (expected one of: {expected})")]
    UnknownOption {
        question: Question,
        option: String,
        expected: String,
    },
}

impl EncodeError {
    fn unknown_option(question: Question, option: &str) -> Self {
        EncodeError::UnknownOption {
            question,
            option: option.to_string(),
            expected: question.options().join(", "),
        }
    }
}

/// Encode a response into the feature layout described by `feature_names`
///
/// # Stages
/// 1. Ordinal answers map onto 1-5
/// 2. Categorical answers expand to one indicator column per non-baseline option
/// 3. The produced columns are merged onto `feature_names`: unknown columns are
///    dropped and missing ones take `MISSING_FEATURE_FILL`
pub fn encode(
    response: &SurveyResponse,
    feature_names: &FeatureNames,
) -> Result<FeatureVector, EncodeError> {
    let columns = encode_columns(response)?;
    Ok(align(&columns, feature_names))
}

/// Produce the named columns for a response, before alignment
pub fn encode_columns(response: &SurveyResponse) -> Result<HashMap<String, f64>, EncodeError> {
    let mut columns = HashMap::new();

    for (question, option) in response.iter() {
        match question.kind() {
            QuestionKind::Ordinal => {
                let score = likert_score(option)
                    .ok_or_else(|| EncodeError::unknown_option(question, option))?;
                columns.insert(question.name().to_string(), f64::from(score));
            }
            QuestionKind::Categorical => {
                let options = question.options();
                if !options.contains(&option) {
                    return Err(EncodeError::unknown_option(question, option));
                }
                // The first declared option is the baseline and has no column
                for candidate in &options[1..] {
                    let value = if *candidate == option { 1.0 } else { 0.0 };
                    columns.insert(indicator_column(question, candidate), value);
                }
            }
        }
    }

    Ok(columns)
}

/// Merge named columns onto the target layout
#[inline]
pub fn align(columns: &HashMap<String, f64>, feature_names: &FeatureNames) -> FeatureVector {
    let values = feature_names
        .iter()
        .map(|name| columns.get(name).copied().unwrap_or(MISSING_FEATURE_FILL))
        .collect();
    FeatureVector::new(values)
}
