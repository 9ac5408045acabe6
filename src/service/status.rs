//! Read-only snapshot of the current round: the active round (if any),
//! how many tickets it holds, and its drawn numbers.

use crate::db;
use crate::error::ServiceError;
use crate::models::Round;

#[derive(Debug, Clone)]
pub struct RoundStatus {
    pub round: Option<Round>,
    pub ticket_count: i64,
    pub drawn_numbers: Option<Vec<i32>>,
}

pub fn current_status() -> Result<RoundStatus, ServiceError> {
    let mut conn = db::get_db_connection()?;

    let Some(round) = db::rounds::get_active_round(&mut conn)? else {
        return Ok(RoundStatus {
            round: None,
            ticket_count: 0,
            drawn_numbers: None,
        });
    };

    let ticket_count = db::tickets::count_for_round(&mut conn, round.id)?;
    let drawn_numbers = db::rounds::get_drawn(&mut conn, round.id)?
        .map(|d| d.numbers())
        .transpose()?;

    Ok(RoundStatus {
        round: Some(round),
        ticket_count,
        drawn_numbers,
    })
}
