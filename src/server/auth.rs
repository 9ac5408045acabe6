//! Access-control gate for the round-control endpoints. Runs as
//! middleware ahead of the handlers, so an unauthorized request is
//! rejected before any state is read or mutated.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse as _, Response};

use crate::error::ServiceError;
use super::types::{RouterState, failure};

pub(super) async fn require_admin(
    State(state): State<RouterState>,
    request: Request,
    next: Next,
) -> Response {
    let bearer = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    if state.config.authorizes(bearer) {
        next.run(request).await
    } else {
        failure(&ServiceError::Unauthorized).into_response()
    }
}
