//! Wire types exchanged with the ticket API.

mod auth;
mod comment;
mod filter;
mod ticket;
mod timestamp;
mod wire;

pub use auth::{AuthResponse, Credentials};
pub use comment::{Comment, NewComment};
pub use filter::{closed_tickets, open_tickets, sorted_comments};
pub use ticket::{ticket_path, NewTicket, Ticket, TicketId, TicketStatus, TicketUpdate};
pub use timestamp::{Timestamp, TimestampParseError};
pub use wire::MissingId;
