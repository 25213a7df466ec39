// Core prediction exports
pub mod encoder;
pub mod model;
pub mod predictor;
pub mod survey;

pub use encoder::{encode, EncodeError, MISSING_FEATURE_FILL};
pub use model::{ForestModel, LinearModel, ModelError, RegressionModel, RegressionTree, TreeNode};
pub use predictor::{PredictError, Prediction, Predictor};
pub use survey::{likert_score, Question, QuestionKind, LIKERT_SCALE, PREDICT_TRIGGER_LABEL};
