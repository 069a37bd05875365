use crate::model::{closed_tickets, open_tickets, Ticket, TicketId};
use crate::ui::mvi::UiState;

/// Everything the views render: session status, ticket data and the
/// pending notification.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreState {
    pub is_authenticated: bool,
    /// Last fetched ticket collection, replaced wholesale on every refresh.
    pub tickets: Vec<Ticket>,
    /// Ticket shown by the detail/edit views. Cleared on every route change.
    pub current_ticket: Option<Ticket>,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl UiState for StoreState {}

/// Outcome message waiting to be shown once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Error(String),
    Success(String),
}

impl StoreState {
    /// Initial state: authenticated iff a token was persisted.
    pub fn initial(has_token: bool) -> Self {
        Self {
            is_authenticated: has_token,
            ..Self::default()
        }
    }

    /// The pending notification, if any. Error wins over success.
    pub fn notification(&self) -> Option<Notification> {
        if let Some(error) = self.error.as_ref().filter(|e| !e.is_empty()) {
            return Some(Notification::Error(error.clone()));
        }
        self.success
            .as_ref()
            .filter(|s| !s.is_empty())
            .map(|s| Notification::Success(s.clone()))
    }

    pub fn open_tickets(&self) -> Vec<&Ticket> {
        open_tickets(&self.tickets)
    }

    pub fn closed_tickets(&self) -> Vec<&Ticket> {
        closed_tickets(&self.tickets)
    }

    pub fn ticket(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }
}
