// Axum server: application state, router and error mapping.
//
// Every page view re-renders from the content store; the only shared state
// is the content loader (and its cache).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::config::{ServerConfig, SiteConfig, CONTENT_CACHE_CAPACITY, SITE};
use crate::content::ContentLoader;
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub loader: ContentLoader,
    pub site: SiteConfig,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        if !config.content_dir.is_dir() {
            tracing::warn!(
                "Content directory {} does not exist, every page will fail to render",
                config.content_dir.display()
            );
        }

        let mut loader = ContentLoader::new(&config.content_dir, &config.image_dir);
        if config.cache_enabled {
            tracing::info!("Content cache enabled ({} entries)", CONTENT_CACHE_CAPACITY);
            loader = loader.with_cache(CONTENT_CACHE_CAPACITY);
        } else {
            tracing::info!("Content cache disabled, reading from disk on every view");
        }

        Self { loader, site: SITE }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Pages: full document, or the main fragment for htmx requests
        .route("/", get(pages::home_page))
        .route("/page/:slug", get(pages::show_page))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

/// Failures outside page content: content errors are rendered inside the
/// shell instead.
#[derive(Debug)]
pub enum AppError {
    Template(String),
    Internal(String),
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Template(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let message = match self {
            AppError::Template(msg) => format!("Template error: {}", msg),
            AppError::Internal(msg) => msg,
        };
        tracing::error!("{}", message);

        let body = Json(serde_json::json!({
            "error": message
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
