use serde::{Deserialize, Serialize};
use crate::core::survey::{Question, QuestionKind, PREDICT_TRIGGER_LABEL};

/// Response for the predict endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(rename = "predictionId")]
    pub prediction_id: String,
    pub prediction: f64,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "modelKind")]
    pub model_kind: String,
    #[serde(rename = "featureCount")]
    pub feature_count: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// One selection control of the survey form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSchema {
    pub name: String,
    pub kind: QuestionKind,
    pub options: Vec<String>,
}

impl From<Question> for QuestionSchema {
    fn from(question: Question) -> Self {
        Self {
            name: question.name().to_string(),
            kind: question.kind(),
            options: question.options().iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// Everything a client needs to render the survey form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveySchemaResponse {
    pub questions: Vec<QuestionSchema>,
    #[serde(rename = "submitLabel")]
    pub submit_label: String,
}

impl SurveySchemaResponse {
    pub fn current() -> Self {
        Self {
            questions: Question::ALL.into_iter().map(QuestionSchema::from).collect(),
            submit_label: PREDICT_TRIGGER_LABEL.to_string(),
        }
    }
}

/// Ordered feature list the loaded model expects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesResponse {
    pub features: Vec<String>,
    pub count: usize,
}
