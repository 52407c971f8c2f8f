//! HTTP API exposing the planning pipeline, one request at a time.

use std::sync::Arc;
use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{BoxError, Json, Router};
use geojson::GeoJson;
use polefiber_core::cost::CostTable;
use polefiber_core::loading::points_from_geojson;
use polefiber_core::render::render_dot;
use polefiber_core::{FiberBracket, InstallationMethod, InstallationPlan, PlanReport, plan};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower::ServiceBuilder;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower::timeout::TimeoutLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::CliError;

/// Immutable state shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub costs: CostTable,
    pub default_method: InstallationMethod,
    pub strict: bool,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self, CliError> {
        Ok(Self {
            costs: config.cost_table()?,
            default_method: config.default_method,
            strict: config.input.strict,
        })
    }
}

/// Body of the planning endpoints
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    /// `FeatureCollection` of pole markers
    pub points: GeoJson,
    /// One method for every connection
    #[serde(default)]
    pub method: Option<InstallationMethod>,
    /// One method per connection, in chain order
    #[serde(default)]
    pub methods: Option<Vec<InstallationMethod>>,
}

impl PlanRequest {
    fn installation_plan(
        &self,
        default_method: InstallationMethod,
    ) -> Result<InstallationPlan, polefiber_core::Error> {
        match (&self.methods, self.method) {
            (Some(_), Some(_)) => Err(polefiber_core::Error::InvalidInput(
                "give either `method` or `methods`, not both".to_string(),
            )),
            (Some(methods), None) => Ok(InstallationPlan::PerConnection(methods.clone())),
            (None, Some(method)) => Ok(InstallationPlan::Uniform(method)),
            (None, None) => Ok(InstallationPlan::Uniform(default_method)),
        }
    }
}

#[derive(Debug, Serialize)]
struct BracketInfo {
    label: &'static str,
    meters: f64,
    color: &'static str,
    price_per_meter: f64,
}

/// Planning failure reported to the client as JSON
#[derive(Debug)]
pub struct ApiError(polefiber_core::Error);

impl From<polefiber_core::Error> for ApiError {
    fn from(err: polefiber_core::Error) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(polefiber_core::Error::InputMalformed(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use polefiber_core::Error;

        let status = match &self.0 {
            Error::InputMissing(_) => StatusCode::NOT_FOUND,
            Error::InputMalformed(_) | Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::ConfigurationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::IoError(_) | Error::GeoJsonError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(kind = self.0.kind(), "Request failed: {}", self.0);

        let body = Json(json!({
            "error": self.0.kind(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}

pub fn router(state: AppState, timeout: Duration, concurrency_limit: usize) -> Router {
    let routes = Router::new()
        .route("/health", get(health))
        .route("/brackets", get(brackets))
        .route("/plan", post(plan_json))
        .route("/plan/dot", post(plan_dot))
        .route("/plan/geojson", post(plan_geojson))
        .with_state(Arc::new(state));

    apply_limits(routes, timeout, concurrency_limit)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Wraps every route in a request timeout and one in-flight limit shared by all routes.
pub fn apply_limits(routes: Router, timeout: Duration, concurrency_limit: usize) -> Router {
    routes.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .layer(TimeoutLayer::new(timeout))
            .layer(GlobalConcurrencyLimitLayer::new(concurrency_limit)),
    )
}

async fn handle_middleware_error(err: BoxError) -> (StatusCode, Json<serde_json::Value>) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            Json(json!({ "error": "timeout", "message": "request timed out" })),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "internal", "message": err.to_string() })),
        )
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn brackets(State(state): State<Arc<AppState>>) -> Json<Vec<BracketInfo>> {
    let info = FiberBracket::ALL
        .into_iter()
        .map(|bracket| BracketInfo {
            label: bracket.label(),
            meters: bracket.meters(),
            color: bracket.color(),
            price_per_meter: state.costs.fiber_rate(bracket),
        })
        .collect();
    Json(info)
}

fn run_plan(
    state: &AppState,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<PlanReport, ApiError> {
    let Json(request) = payload?;
    let points = points_from_geojson(&request.points, state.strict)?;
    let installation = request.installation_plan(state.default_method)?;
    Ok(plan(&points, &installation, &state.costs)?)
}

async fn plan_json(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<PlanReport>, ApiError> {
    run_plan(&state, payload).map(Json)
}

async fn plan_dot(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let report = run_plan(&state, payload)?;
    Ok((
        [(header::CONTENT_TYPE, "text/vnd.graphviz; charset=utf-8")],
        render_dot(&report),
    ))
}

async fn plan_geojson(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let report = run_plan(&state, payload)?;
    Ok((
        [(header::CONTENT_TYPE, "application/geo+json")],
        report.to_geojson_string()?,
    ))
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(config: &AppConfig) -> Result<(), CliError> {
    let state = AppState::from_config(config)?;
    let app = router(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
        config.server.concurrency_limit,
    );

    let listener = tokio::net::TcpListener::bind(config.server.bind.as_str())
        .await
        .map_err(CliError::Serve)?;
    tracing::info!("Listening on {}", config.server.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {err}");
            }
            tracing::info!("Shutting down");
        })
        .await
        .map_err(CliError::Serve)
}
