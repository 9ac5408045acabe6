use std::sync::Arc;

use aide::axum::{
    ApiRouter,
    routing::{get, post},
};
use aide::openapi::{Info, OpenApi};
use aide::scalar::Scalar;
use axum::{Extension, Json, Router, middleware, routing::get as axum_get};

use super::ServerConfig;
use super::auth::require_admin;
use super::handlers::{
    close_round, get_status, get_ticket, health, new_round, quick_pick, store_results, submit_slip,
};
use super::types::RouterState;

pub(super) fn build_router(config: Arc<ServerConfig>) -> Router {
    let state = RouterState { config };

    let mut api = OpenApi {
        info: Info {
            title: "Loto HTTP API".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            ..Default::default()
        },
        ..Default::default()
    };

    // round-control surface, gated before any handler runs
    let admin = ApiRouter::new()
        .api_route("/api/new-round", post(new_round))
        .api_route("/api/close", post(close_round))
        .api_route("/api/store-results", post(store_results))
        .layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let app = ApiRouter::new()
        .route(
            "/api/docs",
            Scalar::new("/api/docs/openapi.json")
                .with_title("Loto API Docs")
                .axum_route(),
        )
        .api_route("/health", get(health))
        .api_route("/api/status", get(get_status))
        .api_route("/api/pay-slip", post(submit_slip))
        .api_route("/api/ticket/:id", get(get_ticket))
        .api_route("/api/quick-pick", get(quick_pick))
        .merge(admin)
        .with_state(state)
        .finish_api(&mut api);

    let api = Arc::new(api);
    app.route("/api/docs/openapi.json", axum_get(serve_openapi))
        .layer(Extension(api))
}

async fn serve_openapi(Extension(api): Extension<Arc<OpenApi>>) -> Json<OpenApi> {
    Json((*api).clone())
}
