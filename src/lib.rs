//! Job Satisfaction - survey-driven job satisfaction prediction service
//!
//! This library encodes employee survey answers into the feature layout of a
//! previously trained regression model and scores them. The HTTP binary in
//! `main.rs` loads the model once at startup and serves predictions.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{encode, Prediction, Predictor, Question, RegressionModel};
pub use models::{FeatureNames, FeatureVector, SurveyResponse, PredictRequest, PredictResponse};
pub use services::{ArtifactError, ArtifactLoader};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let names: FeatureNames = ["Department_IT"].into_iter().collect();
        let response = SurveyResponse::new().with_answer(Question::Department, "IT");

        let vector = encode(&response, &names).unwrap();
        assert_eq!(vector.values(), &[1.0]);
    }
}
