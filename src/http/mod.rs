//! HTTP surface: routes, shared state, and error mapping.
//!
//! Four routes bind the application services to JSON over HTTP with
//! permissive cross-origin access:
//! - `GET /`: liveness
//! - `GET /data`: grouped counts per categorical column
//! - `GET /boxplot-data`: five-number summaries per numeric column
//! - `POST /predict`: classifier inference

mod error;
mod handlers;

pub use error::ApiError;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::adapters::{artifacts, CsvDataset, LinearClassifier};
use crate::application::{PredictionService, StatisticsService};
use crate::config::ServiceConfig;

/// Immutable service context shared by every request handler.
///
/// Constructed once at process start, never mutated afterwards.
pub struct AppState {
    pub predictions: PredictionService<LinearClassifier>,
    pub statistics: StatisticsService<CsvDataset>,
}

impl AppState {
    /// Build the service context from configuration.
    ///
    /// Loads and validates both artifacts; the dataset file is only
    /// referenced here and read per request.
    ///
    /// # Errors
    /// Returns error if either artifact is missing, corrupt, or fails
    /// schema validation; the caller must treat this as fatal.
    pub fn from_config(config: &ServiceConfig) -> crate::Result<Self> {
        let classifier = Arc::new(LinearClassifier::load(&config.model_path)?);
        let encoders = Arc::new(artifacts::load_encoders(&config.encoders_path)?);
        let dataset = Arc::new(CsvDataset::new(&config.dataset_path));

        Ok(Self {
            predictions: PredictionService::new(classifier, encoders),
            statistics: StatisticsService::new(dataset),
        })
    }
}

/// Build the application router over the shared state.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/data", get(handlers::group_counts))
        .route("/boxplot-data", get(handlers::boxplot_data))
        .route("/predict", post(handlers::predict))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
