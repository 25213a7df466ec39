use thiserror::Error;
use crate::core::encoder::{self, EncodeError};
use crate::core::model::{ModelError, RegressionModel};
use crate::models::{FeatureNames, FeatureVector, SurveyResponse};

#[derive(Debug, Error, PartialEq)]
pub enum PredictError {
    #[error("Invalid survey response: {0}")]
    Validation(#[from] EncodeError),

    #[error("Prediction failed: {0}")]
    Model(#[from] ModelError),
}

/// Result of scoring one survey response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub value: f64,
}

impl Prediction {
    /// User-facing message with the value rounded to two decimals
    pub fn message(&self) -> String {
        format!("Predicted Job Satisfaction for the new employee: {:.2}", self.value)
    }
}

/// The loaded model together with the feature layout it was trained on
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug, Clone)]
pub struct Predictor {
    model: RegressionModel,
    feature_names: FeatureNames,
}

impl Predictor {
    pub fn new(model: RegressionModel, feature_names: FeatureNames) -> Self {
        Self { model, feature_names }
    }

    pub fn model(&self) -> &RegressionModel {
        &self.model
    }

    pub fn feature_names(&self) -> &FeatureNames {
        &self.feature_names
    }

    /// Encode a response into this model's feature layout
    pub fn encode(&self, response: &SurveyResponse) -> Result<FeatureVector, EncodeError> {
        encoder::encode(response, &self.feature_names)
    }

    /// Score an already encoded vector
    pub fn score(&self, features: &FeatureVector) -> Result<Prediction, ModelError> {
        let value = self.model.predict(features.values())?;
        Ok(Prediction { value })
    }

    /// Encode then score. Responses that fail validation never reach the model.
    pub fn predict(&self, response: &SurveyResponse) -> Result<Prediction, PredictError> {
        let features = self.encode(response)?;
        tracing::debug!("Encoded {} features: {:?}", features.len(), features.values());
        Ok(self.score(&features)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ForestModel, LinearModel, RegressionTree, TreeNode};
    use crate::core::survey::Question;

    fn predictor(intercept: f64, names: &[&str], coefficients: Vec<f64>) -> Predictor {
        Predictor::new(
            RegressionModel::Linear(LinearModel { intercept, coefficients }),
            names.iter().copied().collect(),
        )
    }

    #[test]
    fn test_message_two_decimals() {
        let prediction = Prediction { value: 3.7123 };
        assert_eq!(
            prediction.message(),
            "Predicted Job Satisfaction for the new employee: 3.71"
        );
    }

    #[test]
    fn test_predict_end_to_end() {
        let p = predictor(1.0, &["Job Security", "Gender_Female"], vec![0.5, 0.25]);
        let response = SurveyResponse::new()
            .with_answer(Question::JobSecurity, "Strongly Agree")
            .with_answer(Question::Gender, "Female");

        let prediction = p.predict(&response).unwrap();
        assert!((prediction.value - 3.75).abs() < 1e-12);
    }

    #[test]
    fn test_validation_error_short_circuits() {
        // The model would fail on dimensions; validation must be reported first
        let p = predictor(1.0, &["Job Security"], vec![]);
        let response = SurveyResponse::new().with_answer(Question::JobSecurity, "Meh");

        assert!(matches!(p.predict(&response), Err(PredictError::Validation(_))));
    }

    #[test]
    fn test_model_error() {
        let p = predictor(1.0, &["Job Security", "Gender_Female"], vec![0.5]);
        let response = SurveyResponse::new().with_answer(Question::JobSecurity, "Agree");

        assert_eq!(
            p.predict(&response),
            Err(PredictError::Model(ModelError::DimensionMismatch { expected: 1, actual: 2 }))
        );
    }

    #[test]
    fn test_malformed_forest_is_prediction_error() {
        let forest = RegressionModel::Forest(ForestModel {
            n_features: 1,
            trees: vec![RegressionTree {
                nodes: vec![
                    TreeNode::Split { feature: 5, threshold: 0.5, left: 1, right: 2 },
                    TreeNode::Leaf { value: 1.0 },
                    TreeNode::Leaf { value: 2.0 },
                ],
            }],
        });
        let p = Predictor::new(forest, ["Job Security"].into_iter().collect());
        let response = SurveyResponse::new().with_answer(Question::JobSecurity, "Agree");

        assert!(matches!(
            p.predict(&response),
            Err(PredictError::Model(ModelError::InvalidStructure(_)))
        ));
    }
}
