use crate::models::schema::{drawn_numbers, round};
use crate::models::{DrawnNumbers, NewRound, Round};
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// The single active round, if any. Derived from the store on every call
/// rather than cached, so concurrent handlers never see stale state.
pub fn get_active_round(conn: &mut SqliteConnection) -> QueryResult<Option<Round>> {
    round::table
        .filter(round::is_active.eq(true))
        .order(round::id.desc())
        .select(Round::as_select())
        .first(conn)
        .optional()
}

pub fn get_round(conn: &mut SqliteConnection, id: i32) -> QueryResult<Round> {
    round::table
        .find(id)
        .select(Round::as_select())
        .first(conn)
}

/// Close whatever round is active, stamping `closed_at`. Returns the
/// number of rounds closed (0 when none was active, 1 otherwise).
pub fn force_close_active(conn: &mut SqliteConnection, now: NaiveDateTime) -> QueryResult<usize> {
    diesel::update(round::table.filter(round::is_active.eq(true)))
        .set((round::is_active.eq(false), round::closed_at.eq(now)))
        .execute(conn)
}

pub fn insert_round(conn: &mut SqliteConnection, now: NaiveDateTime) -> QueryResult<Round> {
    diesel::insert_into(round::table)
        .values(NewRound::active(now))
        .returning(Round::as_returning())
        .get_result(conn)
}

/// The most recently closed round that has no drawn numbers yet: the
/// round a drawing applies to.
pub fn latest_closed_undrawn(conn: &mut SqliteConnection) -> QueryResult<Option<Round>> {
    let drawn_rounds = drawn_numbers::table.select(drawn_numbers::round_id);
    round::table
        .filter(round::is_active.eq(false))
        .filter(round::id.ne_all(drawn_rounds))
        .order(round::id.desc())
        .select(Round::as_select())
        .first(conn)
        .optional()
}

pub fn get_drawn(conn: &mut SqliteConnection, round_id: i32) -> QueryResult<Option<DrawnNumbers>> {
    drawn_numbers::table
        .find(round_id)
        .select(DrawnNumbers::as_select())
        .first(conn)
        .optional()
}

pub fn insert_drawn(conn: &mut SqliteConnection, record: &DrawnNumbers) -> QueryResult<usize> {
    diesel::insert_into(drawn_numbers::table)
        .values(record)
        .execute(conn)
}
