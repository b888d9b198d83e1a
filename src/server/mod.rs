pub mod routes;
pub mod ws;

use crate::state::{AppState, PerfCounters};
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum::routing::get;
use std::sync::Arc;

async fn count_requests(State(state): State<Arc<AppState>>, req: Request, next: Next) -> Response {
    PerfCounters::bump(&state.counters.requests_served);
    next.run(req).await
}

/// Full HTTP + WS surface. Unmatched paths fall through to the static
/// dashboard build, with `index.html` as the SPA fallback.
pub fn build_router(state: Arc<AppState>) -> axum::Router {
    let dist = state.config.dashboard_dir.clone();

    axum::Router::new()
        .route("/api/health", get(routes::get_health))
        .route("/api/dashboard", get(routes::get_dashboard))
        .route("/api/commodities", get(routes::get_commodities))
        .route("/api/forecast/{commodity}", get(routes::get_forecast))
        .route("/api/simulate", axum::routing::post(routes::post_simulate))
        .route("/api/contracts", get(routes::get_contracts).post(routes::post_contract))
        .route("/api/history", get(routes::get_history))
        .route("/api/education", get(routes::get_education))
        .route("/api/counters", get(routes::get_counters))
        .route("/ws", get(ws::ws_handler))
        .fallback_service(
            tower_http::services::ServeDir::new(&dist)
                .fallback(tower_http::services::ServeFile::new(dist.join("index.html"))),
        )
        .layer(axum::middleware::from_fn_with_state(state.clone(), count_requests))
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .with_state(state)
}
