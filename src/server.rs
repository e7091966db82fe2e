//! HTTP boundary
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/icons?i=&t=&perline=&size=` - Render an icon grid as SVG
//! - `GET /api/search?q=&limit=` - Search the icon catalog

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::catalog::{Icon, IconCatalog, DEFAULT_SEARCH_LIMIT};
use crate::config::ServerConfig;
use crate::error::GridError;
use crate::renderer::SvgConfig;
use crate::request::{IconsQuery, LayoutRequest};

/// MIME type of rendered grids
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the HTTP API
#[derive(Clone)]
pub struct AppState {
    /// Icon catalog (immutable after load)
    catalog: Arc<IconCatalog>,
    /// `Cache-Control` value sent with rendered grids
    cache_control: Arc<str>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(catalog: IconCatalog, config: &ServerConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            cache_control: config.cache_control().into(),
        }
    }

    /// Load the catalog named in the configuration, or the bundled one
    pub fn from_config(config: &ServerConfig) -> anyhow::Result<Self> {
        let catalog = match &config.catalog.path {
            Some(path) => IconCatalog::from_file(path)
                .with_context(|| format!("Failed to load icon catalog {}", path.display()))?,
            None => IconCatalog::builtin().clone(),
        };
        info!(icons = catalog.len(), "icon catalog loaded");
        Ok(Self::new(catalog, config))
    }

    pub fn catalog(&self) -> &IconCatalog {
        &self.catalog
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Query parameters for icon search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search term matched against titles and identifiers.
    pub q: Option<String>,
    /// Maximum number of results (capped at the default limit).
    pub limit: Option<usize>,
}

/// Icon search response.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub icons: Vec<IconSummary>,
}

/// Icon information for API responses (glyph path omitted).
#[derive(Debug, Serialize)]
pub struct IconSummary {
    pub slug: String,
    pub title: String,
    pub hex: String,
}

impl From<&Icon> for IconSummary {
    fn from(icon: &Icon) -> Self {
        Self {
            slug: icon.slug.clone(),
            title: icon.title.clone(),
            hex: icon.hex.clone(),
        }
    }
}

impl IntoResponse for GridError {
    fn into_response(self) -> Response {
        let status = match self {
            GridError::MissingInput => StatusCode::BAD_REQUEST,
            GridError::NoValidIcons => StatusCode::NOT_FOUND,
        };
        (status, self.to_string()).into_response()
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/icons - Render the requested icons as one SVG grid.
async fn get_icons(
    State(state): State<AppState>,
    Query(query): Query<IconsQuery>,
) -> Result<Response, GridError> {
    let request = LayoutRequest::from_query(&query);
    let svg = crate::render_icons(&state.catalog, &request, &SvgConfig::compact())
        .inspect_err(|e| debug!(error = %e, "grid request rejected"))?;

    Ok((
        [
            (header::CONTENT_TYPE, SVG_CONTENT_TYPE),
            (header::CACHE_CONTROL, &*state.cache_control),
        ],
        svg,
    )
        .into_response())
}

/// GET /api/search - Find icons by title or identifier.
async fn search_icons(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(DEFAULT_SEARCH_LIMIT);
    let icons = state
        .catalog
        .search(query.q.as_deref().unwrap_or_default(), limit)
        .into_iter()
        .map(IconSummary::from)
        .collect();
    Json(SearchResponse { icons })
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // Rendered grids are embedded from arbitrary origins (README previews)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/icons", get(get_icons))
        .route("/api/search", get(search_icons))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured listen address
///
/// The host may be a name such as `localhost`; it is resolved and every
/// resulting address is tried in turn.
pub async fn bind(config: &ServerConfig) -> anyhow::Result<tokio::net::TcpListener> {
    let host = config.server.host.as_str();
    let port = config.server.port;
    tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the server fails to
/// start.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let listener = bind(&config).await?;
    info!("Starting readme-icons server on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
