use crate::contracts::{ContractDraft, ContractRecord};
use crate::education::{self, EducationContent};
use crate::errors::{DashboardError, DashboardResult};
use crate::form::FormBody;
use crate::hedging::simulator::{self, SimulationInput, SimulationRequest, SimulationResult};
use crate::hedging::tracker;
use crate::market::forecast::{self, CommodityQuote, Forecast};
use crate::market::quotes::{self, DashboardView};
use crate::market::Commodity;
use crate::state::{AppState, PerfCounters, WsMessage};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use portable_atomic::Ordering::Relaxed;
use std::sync::Arc;

/// Count validation failures before handing the error back to axum.
fn track<T>(state: &AppState, result: DashboardResult<T>) -> DashboardResult<T> {
    if let Err(DashboardError::Validation(msg)) = &result {
        PerfCounters::bump(&state.counters.validation_errors);
        tracing::debug!(reason = %msg, "rejected form input");
    }
    result
}

/// GET /api/health
pub async fn get_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/dashboard -- quote cards and chart series
pub async fn get_dashboard() -> Json<DashboardView> {
    Json(quotes::dashboard_view())
}

/// GET /api/commodities -- reference quotes the simulator prices against
pub async fn get_commodities() -> Json<Vec<CommodityQuote>> {
    Json(forecast::all_quotes())
}

/// GET /api/forecast/{commodity}
pub async fn get_forecast(Path(commodity): Path<String>) -> DashboardResult<Json<Forecast>> {
    let commodity = commodity.parse::<Commodity>()?;
    Ok(Json(forecast::forecast(commodity)))
}

/// POST /api/simulate -- hedged vs. unhedged comparison
pub async fn post_simulate(
    State(state): State<Arc<AppState>>,
    body: DashboardResult<FormBody<SimulationRequest>>,
) -> DashboardResult<Json<SimulationResult>> {
    let FormBody(req) = track(&state, body)?;
    let input = track(&state, SimulationInput::from_request(&req))?;
    let quote = forecast::quote(input.commodity);
    let result = simulator::simulate(&quote, &input);

    PerfCounters::bump(&state.counters.simulations_run);
    tracing::info!(
        commodity = %input.commodity,
        quantity = input.quantity,
        lock_price = input.lock_price,
        difference = result.outcome.difference,
        "simulation complete"
    );

    state.broadcast(WsMessage::SimulationRun {
        commodity: input.commodity,
        quantity: input.quantity,
        locked_price: input.lock_price,
        difference: result.outcome.difference,
        timestamp: chrono::Utc::now().to_rfc3339(),
    });

    Ok(Json(result))
}

/// GET /api/contracts -- created since startup, newest first
pub async fn get_contracts(State(state): State<Arc<AppState>>) -> DashboardResult<Json<serde_json::Value>> {
    let contracts = state.with_contracts(|book| book.list())?;
    Ok(Json(serde_json::json!({ "contracts": contracts })))
}

/// POST /api/contracts
pub async fn post_contract(
    State(state): State<Arc<AppState>>,
    body: DashboardResult<FormBody<ContractDraft>>,
) -> DashboardResult<(StatusCode, Json<ContractRecord>)> {
    let FormBody(draft) = track(&state, body)?;
    let now = chrono::Utc::now();
    let created = state.with_contracts_mut(|book| book.create(&draft, now))?;
    let record = track(&state, created)?;

    PerfCounters::bump(&state.counters.contracts_created);
    tracing::info!(
        contract_id = %record.id,
        commodity = %record.commodity,
        quantity = record.quantity,
        hash = %record.hash,
        "contract recorded (simulated reference)"
    );

    state.broadcast(WsMessage::contract_created(&record));
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/history -- analytics over the decision history plus contracts
pub async fn get_history(State(state): State<Arc<AppState>>) -> DashboardResult<Json<serde_json::Value>> {
    let summary = tracker::summarize(&state.history);
    let transactions = tracker::transaction_views(&state.history);
    let contracts = state.with_contracts(|book| book.history())?;
    Ok(Json(serde_json::json!({
        "summary": summary,
        "transactions": transactions,
        "contracts": contracts,
    })))
}

/// GET /api/education
pub async fn get_education() -> Json<EducationContent> {
    Json(education::content())
}

/// GET /api/counters -- request counters (lock-free reads)
pub async fn get_counters(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "requests_served": state.counters.requests_served.load(Relaxed),
        "simulations_run": state.counters.simulations_run.load(Relaxed),
        "contracts_created": state.counters.contracts_created.load(Relaxed),
        "validation_errors": state.counters.validation_errors.load(Relaxed),
        "ws_messages_sent": state.counters.ws_messages_sent.load(Relaxed),
    }))
}

#[cfg(test)]
mod tests {
    use crate::config::AppConfig;
    use crate::server::build_router;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use portable_atomic::Ordering::Relaxed;
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(AppState::new(AppConfig::default()));
        let response = app.oneshot(get("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_simulate_worked_example() {
        let state = AppState::new(AppConfig::default());
        let app = build_router(state.clone());
        let response = app
            .oneshot(post(
                "/api/simulate",
                serde_json::json!({ "commodity": "mustard", "quantity": "100", "lockPrice": 5600 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["hedgedRevenue"], 560000.0);
        assert_eq!(json["hedgedProfit"], -5000.0);
        assert_eq!(json["unhedgedProfit"], 17000.0);
        assert_eq!(json["difference"], 22000.0);
        assert_eq!(json["recommendation"], "stay_unhedged");
        assert_eq!(state.counters.simulations_run.load(Relaxed), 1);
    }

    #[tokio::test]
    async fn test_simulate_missing_lock_price_is_422() {
        let state = AppState::new(AppConfig::default());
        let app = build_router(state.clone());
        let response = app
            .oneshot(post("/api/simulate", serde_json::json!({ "quantity": "100", "lockPrice": "" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(response).await;
        assert_eq!(json["error"], "validation");
        assert_eq!(json["message"], "missing inputs: lockPrice");
        assert_eq!(state.counters.validation_errors.load(Relaxed), 1);
    }

    fn post_raw(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_simulate_empty_body_lists_missing_inputs() {
        let state = AppState::new(AppConfig::default());
        let app = build_router(state.clone());
        let response = app.oneshot(post_raw("/api/simulate", "")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(response).await;
        assert_eq!(json["error"], "validation");
        assert_eq!(json["message"], "missing inputs: quantity, lockPrice");
        assert_eq!(state.counters.validation_errors.load(Relaxed), 1);
    }

    #[tokio::test]
    async fn test_malformed_bodies_return_json_errors() {
        let state = AppState::new(AppConfig::default());
        let app = build_router(state.clone());
        let bodies = [
            ("/api/simulate", r#"{"quantity": true, "lockPrice": 5600}"#),
            ("/api/simulate", r#"{"quantity": 100, "lockPr"#),
            ("/api/contracts", r#"{"buyer": 7}"#),
        ];
        for (uri, body) in bodies {
            let response = app.clone().oneshot(post_raw(uri, body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{uri} {body}");
            let json = body_json(response).await;
            assert_eq!(json["error"], "validation", "{uri} {body}");
            assert!(json["message"].as_str().unwrap().starts_with("invalid request body"));
        }
        assert_eq!(state.counters.validation_errors.load(Relaxed), 3);
        assert_eq!(state.counters.simulations_run.load(Relaxed), 0);
    }

    #[tokio::test]
    async fn test_forecast_known_and_unknown() {
        let app = build_router(AppState::new(AppConfig::default()));
        let response = app.clone().oneshot(get("/api/forecast/groundnut")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["risk"], "low");
        assert_eq!(json["weeks"].as_array().map(|w| w.len()), Some(4));

        let response = app.oneshot(get("/api/forecast/palm")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_then_list_contract() {
        let state = AppState::new(AppConfig::default());
        let app = build_router(state.clone());
        let response = app
            .clone()
            .oneshot(post(
                "/api/contracts",
                serde_json::json!({
                    "buyer": "Kisan Oils",
                    "seller": "Sunrise FPO",
                    "commodity": "sunflower",
                    "quantity": "50",
                    "price": "6900",
                    "expiryDate": "2025-05-15",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["simulated"], true);
        assert_eq!(created["status"], "active");

        let response = app.clone().oneshot(get("/api/contracts")).await.unwrap();
        let json = body_json(response).await;
        let contracts = json["contracts"].as_array().unwrap();
        assert_eq!(contracts.len(), 1);
        assert_eq!(contracts[0]["id"], created["id"]);
        assert_eq!(state.counters.contracts_created.load(Relaxed), 1);

        let response = app.oneshot(get("/api/history")).await.unwrap();
        let json = body_json(response).await;
        let history = json["contracts"].as_array().unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0]["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_contract_missing_fields_is_422() {
        let app = build_router(AppState::new(AppConfig::default()));
        let response = app
            .oneshot(post("/api/contracts", serde_json::json!({ "buyer": "Kisan Oils" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["message"], "missing fields: seller, quantity, price, expiryDate");
    }

    #[tokio::test]
    async fn test_history_summary() {
        let app = build_router(AppState::new(AppConfig::default()));
        let response = app.oneshot(get("/api/history")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["summary"]["totalProfit"], 8100.0);
        assert_eq!(json["summary"]["winRate"], 100.0);
        assert_eq!(json["summary"]["monthly"].as_array().map(|m| m.len()), Some(2));
        assert_eq!(json["transactions"].as_array().map(|t| t.len()), Some(3));
        assert_eq!(json["transactions"][0]["decision"], "Hedged at ₹5,600");
        assert_eq!(json["contracts"].as_array().map(|c| c.len()), Some(2));
    }

    #[tokio::test]
    async fn test_dashboard_and_education() {
        let app = build_router(AppState::new(AppConfig::default()));
        let response = app.clone().oneshot(get("/api/dashboard")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["quotes"].as_array().map(|q| q.len()), Some(4));
        assert_eq!(json["spot"].as_array().map(|s| s.len()), Some(25));

        let response = app.oneshot(get("/api/education")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_counters_count_requests() {
        let state = AppState::new(AppConfig::default());
        let app = build_router(state.clone());
        app.clone().oneshot(get("/api/health")).await.unwrap();
        let response = app.oneshot(get("/api/counters")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["requests_served"], 2);
    }
}
