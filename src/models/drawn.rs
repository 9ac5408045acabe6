use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;

/// The externally supplied draw outcome for a closed round. At most one
/// record per round (round_id is the primary key); write-once.
///
/// One struct serves both querying and inserting, since every column is
/// caller-supplied.
#[derive(Queryable, Selectable, Insertable, Serialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::models::schema::drawn_numbers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DrawnNumbers {
    pub round_id: i32,
    pub numbers: String,
    pub created_time: NaiveDateTime,
}

impl DrawnNumbers {
    pub fn new(
        round_id: i32,
        numbers: &[i32],
        created_time: NaiveDateTime,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            round_id,
            numbers: serde_json::to_string(numbers)?,
            created_time,
        })
    }

    /// Decode the stored numbers column.
    pub fn numbers(&self) -> Result<Vec<i32>, serde_json::Error> {
        serde_json::from_str(&self.numbers)
    }
}
