// SPDX-License-Identifier: GPL-3.0-only
use axum::{
    extract::{
        rejection::{FormRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Html,
    routing::{delete, get, patch, post},
    Form, Json, Router,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::api::error::ApiError;
use crate::api::handlers::{
    ApiHandlers, CafeListResponse, CafeResponse, HealthResponse, ReportClosedQuery, SearchQuery,
    SuccessResponse, UpdatePriceQuery,
};
use crate::store::CafeStore;
use crate::validation::AddCafeForm;

pub struct HttpServer {
    handlers: ApiHandlers,
    addr: SocketAddr,
}

impl HttpServer {
    pub fn new(store: Arc<dyn CafeStore>, api_key: Option<String>, addr: SocketAddr) -> Self {
        Self {
            handlers: ApiHandlers::new(store, api_key),
            addr,
        }
    }

    pub fn router(self) -> Router {
        let handlers = Arc::new(self.handlers);

        Router::new()
            .route("/", get(home_handler))
            .route("/health", get(health_handler))
            .route("/all", get(list_cafes_handler))
            .route("/random", get(random_cafe_handler))
            .route("/search", get(search_cafe_handler))
            .route("/add", post(add_cafe_handler))
            .route("/update-price/:id", patch(update_price_handler))
            .route("/report-closed/:cafe_id", delete(report_closed_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(handlers)
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.addr;
        let app = self.router();

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!(addr = %listener.local_addr()?, "Starting HTTP server");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}

async fn home_handler() -> Html<&'static str> {
    ApiHandlers::home().await
}

async fn health_handler() -> Json<HealthResponse> {
    ApiHandlers::health().await
}

async fn list_cafes_handler(
    State(handlers): State<Arc<ApiHandlers>>,
) -> Result<Json<CafeListResponse>, ApiError> {
    handlers.list_cafes().await
}

async fn random_cafe_handler(
    State(handlers): State<Arc<ApiHandlers>>,
) -> Result<Json<CafeResponse>, ApiError> {
    handlers.random_cafe().await
}

// Extractor rejections are taken as `Result` so they render as JSON errors too

async fn search_cafe_handler(
    State(handlers): State<Arc<ApiHandlers>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<CafeResponse>, ApiError> {
    let Query(query) = query?;
    handlers.search_cafe(query).await
}

async fn add_cafe_handler(
    State(handlers): State<Arc<ApiHandlers>>,
    form: Result<Form<AddCafeForm>, FormRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Form(form) = form?;
    handlers.add_cafe(form).await
}

async fn update_price_handler(
    State(handlers): State<Arc<ApiHandlers>>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<UpdatePriceQuery>, QueryRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Path(id) = id?;
    let Query(query) = query?;
    handlers.update_price(id, query).await
}

async fn report_closed_handler(
    State(handlers): State<Arc<ApiHandlers>>,
    cafe_id: Result<Path<i64>, PathRejection>,
    query: Result<Query<ReportClosedQuery>, QueryRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Path(cafe_id) = cafe_id?;
    let Query(query) = query?;
    handlers.report_closed(cafe_id, query).await
}
