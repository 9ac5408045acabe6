use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;
use std::fmt::Display;

/// One lottery round. Rounds are created active, close exactly once, and
/// are never reactivated or deleted.
#[derive(Queryable, Selectable, Serialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::models::schema::round)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Round {
    pub id: i32,
    pub is_active: bool,
    pub created_time: NaiveDateTime,
    pub closed_at: Option<NaiveDateTime>,
}

impl Round {
    pub fn formatted_created_time(&self) -> String {
        self.created_time.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn formatted_closed_at(&self) -> Option<String> {
        self.closed_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

impl Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_active {
            write!(f, "round {} (active)", self.id)
        } else {
            write!(f, "round {} (closed)", self.id)
        }
    }
}

/// Insertable shape for opening a round; the store assigns the id.
#[derive(Insertable, Debug)]
#[diesel(table_name = crate::models::schema::round)]
pub struct NewRound {
    pub is_active: bool,
    pub created_time: NaiveDateTime,
}

impl NewRound {
    pub fn active(created_time: NaiveDateTime) -> Self {
        Self {
            is_active: true,
            created_time,
        }
    }
}
