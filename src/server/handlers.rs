use axum::extract::{Path, State};
use axum::Json;
use loto_slip::Slip;
use serde_json::json;

use crate::{qr, service};

use super::types::{
    ApiResult, QuickPickResponse, RoundPayload, RouterState, StatusResponse, StoreResultsRequest,
    StoreResultsResponse, SubmitSlipRequest, SubmitSlipResponse, TicketPayload, TicketResponse,
    failure, ok_payload, ok_value,
};

pub(super) async fn health() -> ApiResult {
    ok_value(json!({"status": "ok"}))
}

pub(super) async fn get_status() -> ApiResult {
    match service::current_status() {
        Ok(status) => ok_payload(&StatusResponse {
            active_round: status.round.as_ref().map(RoundPayload::from),
            ticket_count: status.ticket_count,
            drawn_numbers: status.drawn_numbers,
        }),
        Err(e) => failure(&e),
    }
}

pub(super) async fn submit_slip(
    State(state): State<RouterState>,
    Json(payload): Json<SubmitSlipRequest>,
) -> ApiResult {
    let slip = Slip {
        person_id: payload.person_id,
        numbers: payload.numbers,
    };
    let issued = match service::submit_slip(&slip) {
        Ok(issued) => issued,
        Err(e) => return failure(&e),
    };

    let ticket_url = state.config.ticket_url(issued.id);
    match qr::ticket_qr_data_url(&ticket_url) {
        Ok(qr_code) => ok_payload(&SubmitSlipResponse {
            id: issued.id,
            round_id: issued.round_id,
            ticket_url,
            qr_code,
        }),
        Err(e) => failure(&e),
    }
}

pub(super) async fn get_ticket(Path(id): Path<i32>) -> ApiResult {
    let view = match service::get_ticket(id) {
        Ok(view) => view,
        Err(e) => return failure(&e),
    };

    let numbers = match view.ticket.numbers() {
        Ok(numbers) => numbers,
        Err(e) => return failure(&e.into()),
    };

    ok_payload(&TicketResponse {
        ticket: TicketPayload::from_ticket(&view.ticket, numbers),
        round: RoundPayload::from(&view.round),
        drawn_numbers: view.drawn_numbers,
        matches: view.matches,
    })
}

pub(super) async fn quick_pick() -> ApiResult {
    ok_payload(&QuickPickResponse {
        numbers: loto_slip::quick_pick(),
    })
}

pub(super) async fn new_round() -> ApiResult {
    match service::open_new_round() {
        Ok(round) => ok_payload(&RoundPayload::from(&round)),
        Err(e) => failure(&e),
    }
}

pub(super) async fn close_round() -> ApiResult {
    match service::close_active_round() {
        Ok(()) => ok_value(serde_json::Value::Null),
        Err(e) => failure(&e),
    }
}

pub(super) async fn store_results(Json(payload): Json<StoreResultsRequest>) -> ApiResult {
    match service::record_drawn_numbers(&payload.numbers) {
        Ok(round_id) => ok_payload(&StoreResultsResponse { round_id }),
        Err(e) => failure(&e),
    }
}
