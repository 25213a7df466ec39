use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{PredictError, Predictor};
use crate::models::{
    ErrorResponse, FeaturesResponse, HealthResponse, PredictRequest, PredictResponse,
    SurveyResponse, SurveySchemaResponse,
};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Predictor>,
}

impl AppState {
    pub fn new(predictor: Predictor) -> Self {
        Self {
            predictor: Arc::new(predictor),
        }
    }
}

/// Configure all prediction-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/survey", web::get().to(survey_schema))
        .route("/model/features", web::get().to(model_features))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let model = state.predictor.model();
    let feature_count = state.predictor.feature_names().len();

    // A model that cannot score its own feature list will fail every request
    let status = if model.n_features() == feature_count { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        model_kind: model.kind().to_string(),
        feature_count,
    })
}

/// Survey form definition
///
/// GET /api/v1/survey
async fn survey_schema() -> impl Responder {
    HttpResponse::Ok().json(SurveySchemaResponse::current())
}

/// Feature layout of the loaded model
///
/// GET /api/v1/model/features
async fn model_features(state: web::Data<AppState>) -> impl Responder {
    let features = state.predictor.feature_names().as_slice().to_vec();
    HttpResponse::Ok().json(FeaturesResponse {
        count: features.len(),
        features,
    })
}

/// Predict job satisfaction for one survey
///
/// POST /api/v1/predict
///
/// Request body:
/// ```json
/// {
///   "responses": {
///     "Work-Life Balance": "Agree",
///     "Age Bracket": "25-34",
///     "Department": "IT"
///   }
/// }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for predict request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let response = match SurveyResponse::try_from(req.into_inner().responses) {
        Ok(response) => response,
        Err(e) => return validation_failed(e.to_string()),
    };

    match state.predictor.predict(&response) {
        Ok(prediction) => {
            let prediction_id = uuid::Uuid::new_v4().to_string();
            tracing::info!(
                "Prediction {}: {:.4} from {} answers",
                prediction_id,
                prediction.value,
                response.len()
            );

            HttpResponse::Ok().json(PredictResponse {
                prediction_id,
                prediction: prediction.value,
                message: prediction.message(),
                timestamp: chrono::Utc::now(),
            })
        }
        Err(PredictError::Validation(e)) => validation_failed(e.to_string()),
        Err(PredictError::Model(e)) => {
            tracing::error!("Prediction failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Prediction failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

fn validation_failed(message: String) -> HttpResponse {
    tracing::info!("Rejected survey response: {}", message);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Invalid survey response".to_string(),
        message,
        status_code: 400,
    })
}
