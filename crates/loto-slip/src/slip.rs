use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const MIN_NUMBERS: usize = 6;
pub const MAX_NUMBERS: usize = 10;
pub const MIN_NUMBER: i32 = 1;
pub const MAX_NUMBER: i32 = 45;
pub const MAX_PERSON_ID_LEN: usize = 20;

/// A submitted pay-slip: who is playing and which numbers they chose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slip {
    pub person_id: String,
    pub numbers: Vec<i32>,
}

impl Slip {
    /// Build a slip, rejecting it unless every rule in [`Slip::check`] holds.
    pub fn new(person_id: impl Into<String>, numbers: Vec<i32>) -> Result<Self, SlipError> {
        let slip = Self {
            person_id: person_id.into(),
            numbers,
        };
        slip.check()?;
        Ok(slip)
    }

    /// Validate the slip. Checks run in a fixed order and the first
    /// failure wins, so callers get one stable message per defect:
    /// person id length, number count, duplicates, then range.
    pub fn check(&self) -> Result<(), SlipError> {
        let id_len = self.person_id.chars().count();
        if id_len == 0 {
            return Err(SlipError::EmptyPersonId);
        }
        if id_len > MAX_PERSON_ID_LEN {
            return Err(SlipError::PersonIdTooLong(id_len));
        }

        let count = self.numbers.len();
        if count < MIN_NUMBERS || count > MAX_NUMBERS {
            return Err(SlipError::InvalidNumberCount(count));
        }

        let mut sorted = self.numbers.clone();
        sorted.sort_unstable();
        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return Err(SlipError::DuplicateNumber);
        }

        if let Some(&n) = self
            .numbers
            .iter()
            .find(|&&n| n < MIN_NUMBER || n > MAX_NUMBER)
        {
            return Err(SlipError::NumberOutOfRange(n));
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Chosen numbers in ascending order, the way they print on a ticket.
    pub fn sorted_numbers(&self) -> Vec<i32> {
        let mut sorted = self.numbers.clone();
        sorted.sort_unstable();
        sorted
    }

    pub fn format_numbers(&self) -> String {
        self.sorted_numbers()
            .iter()
            .map(|n| format!("{n:02}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Display for Slip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.person_id, self.format_numbers())
    }
}

/// Slip validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlipError {
    EmptyPersonId,
    PersonIdTooLong(usize),
    InvalidNumberCount(usize),
    DuplicateNumber,
    NumberOutOfRange(i32),
}

impl Display for SlipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPersonId => write!(f, "Person id cannot be empty"),
            Self::PersonIdTooLong(len) => {
                write!(
                    f,
                    "Person id is too long: at most {MAX_PERSON_ID_LEN} characters, got {len}"
                )
            }
            Self::InvalidNumberCount(count) => {
                write!(
                    f,
                    "Invalid number of chosen numbers: expected {MIN_NUMBERS} to {MAX_NUMBERS}, got {count}"
                )
            }
            Self::DuplicateNumber => write!(f, "All chosen numbers must be unique"),
            Self::NumberOutOfRange(n) => {
                write!(f, "Number {n} is out of range ({MIN_NUMBER}-{MAX_NUMBER})")
            }
        }
    }
}

impl std::error::Error for SlipError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn slip(person_id: &str, numbers: &[i32]) -> Slip {
        Slip {
            person_id: person_id.to_owned(),
            numbers: numbers.to_vec(),
        }
    }

    #[test]
    fn accepts_minimal_valid_slip() {
        assert!(slip("alice", &[1, 2, 3, 4, 5, 6]).check().is_ok());
    }

    #[test]
    fn accepts_maximal_valid_slip() {
        assert!(
            slip("bob", &[1, 5, 9, 13, 17, 21, 25, 29, 33, 45])
                .check()
                .is_ok()
        );
    }

    #[test]
    fn rejects_empty_person_id() {
        assert_eq!(
            slip("", &[1, 2, 3, 4, 5, 6]).check(),
            Err(SlipError::EmptyPersonId)
        );
    }

    #[test]
    fn rejects_overlong_person_id() {
        let id = "x".repeat(MAX_PERSON_ID_LEN + 1);
        assert_eq!(
            slip(&id, &[1, 2, 3, 4, 5, 6]).check(),
            Err(SlipError::PersonIdTooLong(MAX_PERSON_ID_LEN + 1))
        );
    }

    #[test]
    fn person_id_length_counts_characters_not_bytes() {
        // 20 multi-byte characters are within the limit
        let id = "š".repeat(MAX_PERSON_ID_LEN);
        assert!(slip(&id, &[1, 2, 3, 4, 5, 6]).check().is_ok());
    }

    #[test]
    fn rejects_too_few_numbers() {
        assert_eq!(
            slip("alice", &[1, 2, 3, 4, 5]).check(),
            Err(SlipError::InvalidNumberCount(5))
        );
    }

    #[test]
    fn rejects_too_many_numbers() {
        assert_eq!(
            slip("alice", &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]).check(),
            Err(SlipError::InvalidNumberCount(11))
        );
    }

    #[test]
    fn rejects_duplicates_before_range() {
        // 99 is out of range, but the duplicate wins because it is checked first
        assert_eq!(
            slip("alice", &[1, 1, 3, 4, 5, 99]).check(),
            Err(SlipError::DuplicateNumber)
        );
    }

    #[test]
    fn rejects_number_below_range() {
        assert_eq!(
            slip("alice", &[0, 2, 3, 4, 5, 6]).check(),
            Err(SlipError::NumberOutOfRange(0))
        );
    }

    #[test]
    fn rejects_number_above_range() {
        assert_eq!(
            slip("alice", &[1, 2, 3, 4, 5, 46]).check(),
            Err(SlipError::NumberOutOfRange(46))
        );
    }

    #[test]
    fn count_check_wins_over_later_checks() {
        // both too short and out of range: count is reported
        assert_eq!(
            slip("alice", &[99]).check(),
            Err(SlipError::InvalidNumberCount(1))
        );
    }

    #[test]
    fn format_numbers_sorts_and_pads() {
        let s = slip("alice", &[45, 2, 13, 7, 21, 9]);
        assert_eq!(s.format_numbers(), "02 07 09 13 21 45");
    }
}
