use std::sync::Arc;

use axum::{Json, http::StatusCode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ServiceError;
use crate::models::{Round, Ticket};
use crate::server::ServerConfig;

#[derive(Clone)]
pub(super) struct RouterState {
    pub(super) config: Arc<ServerConfig>,
}

#[derive(Serialize, JsonSchema)]
pub(super) struct ApiResponse {
    success: bool,
    data: Option<Value>,
    error: Option<ApiError>,
}

#[derive(Serialize, JsonSchema)]
pub(super) struct ApiError {
    code: &'static str,
    message: String,
}

pub(super) type ApiResult = (StatusCode, Json<ApiResponse>);

pub(super) fn ok_value(value: Value) -> ApiResult {
    (
        StatusCode::OK,
        Json(ApiResponse {
            success: true,
            data: Some(value),
            error: None,
        }),
    )
}

pub(super) fn ok_payload<T: Serialize>(payload: &T) -> ApiResult {
    match serde_json::to_value(payload) {
        Ok(value) => ok_value(value),
        Err(e) => err_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal",
            e.to_string(),
        ),
    }
}

pub(super) fn err_response(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> ApiResult {
    (
        status,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(ApiError {
                code,
                message: message.into(),
            }),
        }),
    )
}

/// Map a service failure onto the envelope. The error's own message is
/// the wire message (store errors already read "Database error: <detail>");
/// server-side failures are additionally logged.
pub(super) fn failure(err: &ServiceError) -> ApiResult {
    let kind = err.kind();
    let status = match kind {
        "validation" => StatusCode::BAD_REQUEST,
        "conflict" => StatusCode::CONFLICT,
        "not_found" => StatusCode::NOT_FOUND,
        "unauthorized" => StatusCode::UNAUTHORIZED,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        log::error!("request failed: {err}");
    }
    err_response(status, kind, err.to_string())
}

#[derive(Deserialize, JsonSchema)]
pub(super) struct SubmitSlipRequest {
    pub(super) person_id: String,
    pub(super) numbers: Vec<i32>,
}

#[derive(Serialize, JsonSchema)]
pub(super) struct SubmitSlipResponse {
    pub(super) id: i32,
    pub(super) round_id: i32,
    pub(super) ticket_url: String,
    pub(super) qr_code: String,
}

#[derive(Deserialize, JsonSchema)]
pub(super) struct StoreResultsRequest {
    pub(super) numbers: Vec<i32>,
}

#[derive(Serialize, JsonSchema)]
pub(super) struct RoundPayload {
    pub(super) id: i32,
    pub(super) is_active: bool,
    pub(super) created_time: String,
    pub(super) closed_at: Option<String>,
}

impl From<&Round> for RoundPayload {
    fn from(round: &Round) -> Self {
        Self {
            id: round.id,
            is_active: round.is_active,
            created_time: round.formatted_created_time(),
            closed_at: round.formatted_closed_at(),
        }
    }
}

#[derive(Serialize, JsonSchema)]
pub(super) struct StatusResponse {
    pub(super) active_round: Option<RoundPayload>,
    pub(super) ticket_count: i64,
    pub(super) drawn_numbers: Option<Vec<i32>>,
}

#[derive(Serialize, JsonSchema)]
pub(super) struct TicketPayload {
    pub(super) id: i32,
    pub(super) round_id: i32,
    pub(super) person_id: String,
    pub(super) numbers: Vec<i32>,
    pub(super) created_time: String,
}

impl TicketPayload {
    pub(super) fn from_ticket(ticket: &Ticket, numbers: Vec<i32>) -> Self {
        Self {
            id: ticket.id,
            round_id: ticket.round_id,
            person_id: ticket.person_id.clone(),
            numbers,
            created_time: ticket.formatted_created_time(),
        }
    }
}

#[derive(Serialize, JsonSchema)]
pub(super) struct TicketResponse {
    pub(super) ticket: TicketPayload,
    pub(super) round: RoundPayload,
    pub(super) drawn_numbers: Option<Vec<i32>>,
    pub(super) matches: Option<usize>,
}

#[derive(Serialize, JsonSchema)]
pub(super) struct QuickPickResponse {
    pub(super) numbers: Vec<i32>,
}

#[derive(Serialize, JsonSchema)]
pub(super) struct StoreResultsResponse {
    pub(super) round_id: i32,
}
