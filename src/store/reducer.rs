use crate::store::intent::StoreIntent;
use crate::store::state::StoreState;
use crate::ui::mvi::Reducer;

pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = StoreState;
    type Intent = StoreIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoreIntent::Authenticated | StoreIntent::TokenVerified => StoreState {
                is_authenticated: true,
                error: None,
                success: None,
                ..state
            },
            StoreIntent::SignedOut => StoreState {
                is_authenticated: false,
                error: None,
                success: None,
                ..state
            },
            StoreIntent::TicketsLoaded { tickets } => StoreState {
                tickets,
                error: None,
                success: None,
                ..state
            },
            StoreIntent::TicketLoaded { ticket } => StoreState {
                current_ticket: Some(ticket),
                error: None,
                success: None,
                ..state
            },
            StoreIntent::TicketsChanged { tickets, message } => StoreState {
                tickets,
                error: None,
                success: Some(message),
                ..state
            },
            StoreIntent::CommentAdded { ticket, message } => StoreState {
                current_ticket: Some(ticket),
                error: None,
                success: Some(message),
                ..state
            },
            // Prior data stays untouched; only the notification changes.
            StoreIntent::Failed { message } => StoreState {
                error: Some(message),
                success: None,
                ..state
            },
            StoreIntent::NotificationAcknowledged => StoreState {
                error: None,
                success: None,
                ..state
            },
            StoreIntent::CurrentTicketCleared => StoreState {
                current_ticket: None,
                ..state
            },
        }
    }
}
