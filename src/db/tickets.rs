use crate::models::schema::ticket;
use crate::models::{NewTicket, Ticket};
use diesel::prelude::*;

pub fn insert_ticket(conn: &mut SqliteConnection, new_ticket: &NewTicket) -> QueryResult<i32> {
    diesel::insert_into(ticket::table)
        .values(new_ticket)
        .returning(ticket::id)
        .get_result(conn)
}

pub fn get_ticket(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<Ticket>> {
    ticket::table
        .find(id)
        .select(Ticket::as_select())
        .first(conn)
        .optional()
}

pub fn count_for_round(conn: &mut SqliteConnection, round_id: i32) -> QueryResult<i64> {
    ticket::table
        .filter(ticket::round_id.eq(round_id))
        .count()
        .get_result(conn)
}
