use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;
use std::fmt::Display;

/// A persisted ticket: the slip a participant submitted, bound to the
/// round that was active at submission time. Immutable after insert.
///
/// Chosen numbers are stored as a JSON array in a text column; the
/// sequence is variable length and SQLite has no array type.
#[derive(Queryable, Selectable, Serialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::models::schema::ticket)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Ticket {
    pub id: i32,
    pub round_id: i32,
    pub person_id: String,
    pub numbers: String,
    pub created_time: NaiveDateTime,
}

impl Ticket {
    /// Decode the stored numbers column.
    pub fn numbers(&self) -> Result<Vec<i32>, serde_json::Error> {
        serde_json::from_str(&self.numbers)
    }

    pub fn formatted_created_time(&self) -> String {
        self.created_time.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

impl Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ticket {} (round {}, {})",
            self.id, self.round_id, self.person_id
        )
    }
}

/// Insertable shape for issuing a ticket; the store assigns the id.
#[derive(Insertable, Debug)]
#[diesel(table_name = crate::models::schema::ticket)]
pub struct NewTicket {
    pub round_id: i32,
    pub person_id: String,
    pub numbers: String,
    pub created_time: NaiveDateTime,
}

impl NewTicket {
    pub fn new(
        round_id: i32,
        person_id: &str,
        numbers: &[i32],
        created_time: NaiveDateTime,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            round_id,
            person_id: person_id.to_owned(),
            numbers: serde_json::to_string(numbers)?,
            created_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip_through_the_column_encoding() {
        let now = chrono::Utc::now().naive_utc();
        let new_ticket = NewTicket::new(1, "alice", &[1, 2, 3, 4, 5, 6], now).unwrap();
        assert_eq!(new_ticket.numbers, "[1,2,3,4,5,6]");

        let ticket = Ticket {
            id: 1,
            round_id: 1,
            person_id: "alice".to_owned(),
            numbers: new_ticket.numbers,
            created_time: now,
        };
        assert_eq!(ticket.numbers().unwrap(), vec![1, 2, 3, 4, 5, 6]);
    }
}
