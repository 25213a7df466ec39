// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FeatureNames, FeatureVector, SurveyResponse};
pub use requests::PredictRequest;
pub use responses::{ErrorResponse, FeaturesResponse, HealthResponse, PredictResponse, QuestionSchema, SurveySchemaResponse};
