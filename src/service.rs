pub mod round;
pub mod status;
pub mod ticket;

pub use round::{close_active_round, open_new_round, record_drawn_numbers};
pub use status::{RoundStatus, current_status};
pub use ticket::{IssuedTicket, TicketView, get_ticket, submit_slip};
