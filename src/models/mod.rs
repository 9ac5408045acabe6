pub mod drawn;
pub mod round;
pub mod schema;
pub mod ticket;

pub use drawn::DrawnNumbers;
pub use round::{NewRound, Round};
pub use ticket::{NewTicket, Ticket};
