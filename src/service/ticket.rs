//! Ticket registry: issues tickets against the active round and resolves
//! a ticket id back into the ticket, its round, and the draw outcome.

use crate::db;
use crate::error::ServiceError;
use crate::models::{NewTicket, Round, Ticket};
use loto_slip::Slip;

/// A freshly persisted ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssuedTicket {
    pub id: i32,
    pub round_id: i32,
}

/// A ticket resolved for display: the ticket, its round as currently
/// stored, and the round's drawn numbers if the draw happened.
#[derive(Debug, Clone)]
pub struct TicketView {
    pub ticket: Ticket,
    pub round: Round,
    pub drawn_numbers: Option<Vec<i32>>,
    /// How many chosen numbers appear in the draw, once drawn.
    pub matches: Option<usize>,
}

/// Validate a slip and persist it as a ticket against the active round.
/// The active-round lookup and the insert share one transaction, so a
/// round closing concurrently cannot orphan the ticket.
pub fn submit_slip(slip: &Slip) -> Result<IssuedTicket, ServiceError> {
    slip.check()?;

    let mut conn = db::get_db_connection()?;
    let now = chrono::Utc::now().naive_utc();

    let issued = conn.immediate_transaction(|conn| -> Result<IssuedTicket, ServiceError> {
        let round = db::rounds::get_active_round(conn)?.ok_or(ServiceError::NoActiveRound)?;
        let new_ticket = NewTicket::new(round.id, &slip.person_id, &slip.numbers, now)?;
        let id = db::tickets::insert_ticket(conn, &new_ticket)?;
        Ok(IssuedTicket {
            id,
            round_id: round.id,
        })
    })?;

    log::info!("ticket {} issued for round {}", issued.id, issued.round_id);
    Ok(issued)
}

pub fn get_ticket(id: i32) -> Result<TicketView, ServiceError> {
    let mut conn = db::get_db_connection()?;

    let ticket = db::tickets::get_ticket(&mut conn, id)?.ok_or(ServiceError::TicketNotFound(id))?;
    let round = db::rounds::get_round(&mut conn, ticket.round_id)?;
    let drawn_numbers = db::rounds::get_drawn(&mut conn, ticket.round_id)?
        .map(|d| d.numbers())
        .transpose()?;

    let chosen = ticket.numbers()?;
    let matches = drawn_numbers
        .as_ref()
        .map(|drawn| chosen.iter().filter(|n| drawn.contains(n)).count());

    Ok(TicketView {
        ticket,
        round,
        drawn_numbers,
        matches,
    })
}
