//! Pay-slip number rules for the loto service.
//!
//! Pure validation and generation: no I/O, no store access. The service
//! crate applies these rules before anything is persisted.

pub mod generate;
pub mod slip;

pub use generate::quick_pick;
pub use slip::{
    MAX_NUMBER, MAX_NUMBERS, MAX_PERSON_ID_LEN, MIN_NUMBER, MIN_NUMBERS, Slip, SlipError,
};
