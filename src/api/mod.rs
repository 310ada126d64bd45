use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{
        Json, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::catalog::SimulatorData;
use crate::config::ServerConfig;
use crate::core::{
    ADDITIONAL_COVERAGES, AdditionalCoverage, DEFAULT_CLIENT_AGE, DEFAULT_VEHICLE_VALUE, Plan,
    SimulationInput, SimulationSession,
};
use crate::error::InputError;
use crate::validation::validate_input;

#[derive(Debug)]
struct AppState {
    data: SimulatorData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SimulatePayload {
    vehicle_value: Option<f64>,
    client_age: Option<u32>,
    selected_coverages: Option<Vec<String>>,
    selected_plan_name: Option<String>,
}

// Coverages arrive comma separated.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SimulateQuery {
    vehicle_value: Option<f64>,
    client_age: Option<u32>,
    coverages: Option<String>,
    selected_plan_name: Option<String>,
}

impl From<SimulateQuery> for SimulatePayload {
    fn from(query: SimulateQuery) -> Self {
        Self {
            vehicle_value: query.vehicle_value,
            client_age: query.client_age,
            selected_coverages: query.coverages.map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                    .collect()
            }),
            selected_plan_name: query.selected_plan_name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulatorDataResponse<'a> {
    included_benefits: &'a [String],
    plans_indicators: &'a [Plan],
    additional_coverages: &'a [AdditionalCoverage],
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(data: SimulatorData) -> Router {
    let state = Arc::new(AppState { data });
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/simulator", get(simulator_data_handler))
        .route(
            "/api/simulate",
            get(simulate_get_handler).post(simulate_post_handler),
        )
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_http_server(config: &ServerConfig, data: SimulatorData) -> std::io::Result<()> {
    let addr = SocketAddr::new(config.host, config.port);
    let app = router(data);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "plan simulator API listening");

    axum::serve(listener, app).await
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn simulator_data_handler(State(state): State<Arc<AppState>>) -> Response {
    json_response(
        StatusCode::OK,
        SimulatorDataResponse {
            included_benefits: &state.data.included_benefits,
            plans_indicators: &state.data.plans_indicators,
            additional_coverages: &ADDITIONAL_COVERAGES,
        },
    )
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn simulate_get_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SimulateQuery>, QueryRejection>,
) -> Response {
    match query {
        Ok(Query(query)) => simulate_handler_impl(&state, query.into()),
        Err(rejection) => rejected_request(&rejection.body_text()),
    }
}

async fn simulate_post_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SimulatePayload>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(payload)) => simulate_handler_impl(&state, payload),
        Err(rejection) => rejected_request(&rejection.body_text()),
    }
}

fn rejected_request(msg: &str) -> Response {
    warn!(error = msg, "rejected simulation request");
    error_response(StatusCode::BAD_REQUEST, msg)
}

fn simulate_handler_impl(state: &AppState, payload: SimulatePayload) -> Response {
    let session = match session_from_payload(&state.data.plans_indicators, payload) {
        Ok(session) => session,
        Err(err) => return rejected_request(&err.to_string()),
    };

    let outcome = session.outcome();
    debug!(
        vehicle_value = session.input().vehicle_value,
        client_age = session.input().client_age,
        coverages = session.input().selected_count(),
        recommended = outcome.recommended_plan.as_deref().unwrap_or("-"),
        "simulation computed"
    );
    json_response(StatusCode::OK, outcome)
}

fn session_from_payload(
    catalog: &[Plan],
    payload: SimulatePayload,
) -> Result<SimulationSession, InputError> {
    let input = SimulationInput::new(
        payload.vehicle_value.unwrap_or(DEFAULT_VEHICLE_VALUE),
        payload.client_age.unwrap_or(DEFAULT_CLIENT_AGE),
    )
    .with_coverages(payload.selected_coverages.unwrap_or_default());
    validate_input(&input)?;

    let mut session = SimulationSession::new(catalog.to_vec());
    session.set_vehicle_value(input.vehicle_value);
    session.set_client_age(input.client_age);
    for id in &input.selected_coverage_ids {
        session.toggle_coverage(id)?;
    }
    if let Some(name) = payload.selected_plan_name {
        session.select_plan(&name)?;
    }
    Ok(session)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
