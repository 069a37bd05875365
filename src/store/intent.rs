use crate::model::Ticket;
use crate::ui::mvi::Intent;

/// Completed outcomes the store applies to its state.
///
/// Each variant is the full result of one action, so applying it is the
/// whole transition for that action.
#[derive(Debug, Clone)]
pub enum StoreIntent {
    /// Login or register succeeded and the token was persisted.
    Authenticated,
    /// Logout, or a token that failed verification.
    SignedOut,
    /// The stored token was accepted by the API.
    TokenVerified,
    /// `GET /tickets` succeeded.
    TicketsLoaded { tickets: Vec<Ticket> },
    /// `GET /tickets/{id}` succeeded.
    TicketLoaded { ticket: Ticket },
    /// A mutation succeeded and the collection was refetched.
    TicketsChanged { tickets: Vec<Ticket>, message: String },
    /// A comment was posted and its ticket refetched.
    CommentAdded { ticket: Ticket, message: String },
    /// Any action failure, already mapped to the user-facing message.
    Failed { message: String },
    /// The view showed the pending notification.
    NotificationAcknowledged,
    /// The active route changed.
    CurrentTicketCleared,
}

impl Intent for StoreIntent {}
