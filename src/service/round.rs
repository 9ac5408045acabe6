//! Round lifecycle manager. Each round moves one way, `active -> closed`,
//! and at most one round is active at any time. Multi-step transitions
//! run inside immediate transactions so the write lock is taken before
//! the first read; two concurrent privileged calls serialize at the store
//! instead of both acting on the same observation.

use crate::db;
use crate::error::ServiceError;
use crate::models::{DrawnNumbers, Round};

/// Force-close whatever round is active, then open a fresh one. Always
/// leaves exactly one active round.
pub fn open_new_round() -> Result<Round, ServiceError> {
    let mut conn = db::get_db_connection()?;
    let now = chrono::Utc::now().naive_utc();

    let round = conn.immediate_transaction(|conn| {
        let closed = db::rounds::force_close_active(conn, now)?;
        if closed > 0 {
            log::info!("force-closed {closed} round(s) before opening a new one");
        }
        db::rounds::insert_round(conn, now)
    })?;

    log::info!("round {} opened", round.id);
    Ok(round)
}

/// Close the active round if there is one. Closing with no active round
/// is a successful no-op.
pub fn close_active_round() -> Result<(), ServiceError> {
    let mut conn = db::get_db_connection()?;
    let now = chrono::Utc::now().naive_utc();

    let closed = db::rounds::force_close_active(&mut conn, now)?;
    if closed > 0 {
        log::info!("active round closed");
    } else {
        log::debug!("close requested with no active round");
    }
    Ok(())
}

/// Attach the externally supplied draw outcome to the most recently
/// closed round that has none yet. Write-once per round; returns the id
/// of the round the numbers were recorded for.
pub fn record_drawn_numbers(numbers: &[i32]) -> Result<i32, ServiceError> {
    if numbers.is_empty() {
        return Err(ServiceError::EmptyDraw);
    }

    let mut conn = db::get_db_connection()?;
    let now = chrono::Utc::now().naive_utc();

    let round_id = conn.immediate_transaction(|conn| -> Result<i32, ServiceError> {
        let round = db::rounds::latest_closed_undrawn(conn)?.ok_or(ServiceError::NoEligibleRound)?;
        if db::rounds::get_drawn(conn, round.id)?.is_some() {
            return Err(ServiceError::AlreadyDrawn(round.id));
        }
        // unreachable given the selection query, but verified before committing
        if round.is_active {
            return Err(ServiceError::RoundStillActive(round.id));
        }
        let record = DrawnNumbers::new(round.id, numbers, now)?;
        db::rounds::insert_drawn(conn, &record)?;
        Ok(round.id)
    })?;

    log::info!("drawn numbers recorded for round {round_id}");
    Ok(round_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::get_db_connection;
    use crate::models::schema::round;
    use crate::testenv;
    use diesel::prelude::*;

    fn active_round_count() -> i64 {
        let mut conn = get_db_connection().unwrap();
        round::table
            .filter(round::is_active.eq(true))
            .count()
            .get_result(&mut conn)
            .unwrap()
    }

    #[test]
    fn opening_with_no_prior_round_yields_one_active_round() {
        let _guard = testenv::lock();
        testenv::reset();

        open_new_round().unwrap();
        assert_eq!(active_round_count(), 1);
    }

    #[test]
    fn opening_over_an_active_round_closes_it_first() {
        let _guard = testenv::lock();
        testenv::reset();

        let first = open_new_round().unwrap();
        let second = open_new_round().unwrap();

        assert_eq!(active_round_count(), 1);
        let mut conn = get_db_connection().unwrap();
        let first = db::rounds::get_round(&mut conn, first.id).unwrap();
        assert!(!first.is_active);
        assert!(first.closed_at.is_some());
        let second = db::rounds::get_round(&mut conn, second.id).unwrap();
        assert!(second.is_active);
    }

    #[test]
    fn concurrent_opens_leave_exactly_one_active_round() {
        let _guard = testenv::lock();
        testenv::reset();

        let prior = open_new_round().unwrap();

        let handles: Vec<_> = (0..2)
            .map(|_| std::thread::spawn(|| open_new_round().map(|r| r.id)))
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert_eq!(active_round_count(), 1);
        let mut conn = get_db_connection().unwrap();
        let prior = db::rounds::get_round(&mut conn, prior.id).unwrap();
        assert!(!prior.is_active);
        assert!(prior.closed_at.is_some());
    }

    #[test]
    fn closing_with_no_active_round_is_a_no_op() {
        let _guard = testenv::lock();
        testenv::reset();

        close_active_round().unwrap();
        assert_eq!(active_round_count(), 0);
    }

    #[test]
    fn closing_stamps_the_active_round() {
        let _guard = testenv::lock();
        testenv::reset();

        let round = open_new_round().unwrap();
        close_active_round().unwrap();

        let mut conn = get_db_connection().unwrap();
        let closed = db::rounds::get_round(&mut conn, round.id).unwrap();
        assert!(!closed.is_active);
        assert!(closed.closed_at.is_some());
        assert_eq!(active_round_count(), 0);
    }

    #[test]
    fn recording_requires_a_closed_round() {
        let _guard = testenv::lock();
        testenv::reset();

        assert!(matches!(
            record_drawn_numbers(&[1, 2, 3]),
            Err(ServiceError::NoEligibleRound)
        ));

        // an active round alone is not eligible either
        open_new_round().unwrap();
        assert!(matches!(
            record_drawn_numbers(&[1, 2, 3]),
            Err(ServiceError::NoEligibleRound)
        ));
    }

    #[test]
    fn recording_rejects_an_empty_draw() {
        let _guard = testenv::lock();
        testenv::reset();

        assert!(matches!(
            record_drawn_numbers(&[]),
            Err(ServiceError::EmptyDraw)
        ));
    }

    #[test]
    fn recording_twice_fails_and_keeps_the_first_draw() {
        let _guard = testenv::lock();
        testenv::reset();

        let round = open_new_round().unwrap();
        close_active_round().unwrap();

        let recorded_for = record_drawn_numbers(&[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(recorded_for, round.id);

        // the round now has a draw, so it is no longer eligible
        assert!(matches!(
            record_drawn_numbers(&[7, 8, 9]),
            Err(ServiceError::NoEligibleRound)
        ));

        let mut conn = get_db_connection().unwrap();
        let drawn = db::rounds::get_drawn(&mut conn, round.id).unwrap().unwrap();
        assert_eq!(drawn.numbers().unwrap(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn recording_targets_the_most_recently_closed_round() {
        let _guard = testenv::lock();
        testenv::reset();

        let first = open_new_round().unwrap();
        let second = open_new_round().unwrap(); // closes first
        close_active_round().unwrap(); // closes second

        assert_eq!(record_drawn_numbers(&[1, 2, 3]).unwrap(), second.id);
        assert_eq!(record_drawn_numbers(&[4, 5, 6]).unwrap(), first.id);
    }
}
