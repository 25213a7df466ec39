use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use job_satisfaction::config::{LoggingSettings, Settings};
use job_satisfaction::routes::{self, predict::AppState};
use job_satisfaction::services::ArtifactLoader;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn startup_error(message: String) -> std::io::Error {
    error!("{}", message);
    std::io::Error::new(std::io::ErrorKind::Other, message)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Logging comes from the same settings, so fall back to defaults until
    // the configuration error can be reported
    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    info!("Starting job satisfaction prediction service...");

    let settings = settings.map_err(|e| startup_error(format!("Failed to load configuration: {}", e)))?;

    info!("Configuration loaded successfully");

    // Both artifacts must load before any request is accepted
    let loader = ArtifactLoader::new(
        &settings.artifacts.model_path,
        &settings.artifacts.features_path,
    );
    let predictor = loader
        .load()
        .map_err(|e| startup_error(format!("Failed to load model artifacts: {}", e)))?;

    info!(
        "Predictor ready: {} model, {} features",
        predictor.model().kind(),
        predictor.feature_names().len()
    );

    let app_state = AppState::new(predictor);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.workers();

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
