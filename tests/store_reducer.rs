mod common;

use common::sample_tickets;
use ticketdesk::store::{StoreIntent, StoreReducer, StoreState};
use ticketdesk::ui::mvi::Reducer;

fn loaded() -> StoreState {
    StoreReducer::reduce(
        StoreState::initial(true),
        StoreIntent::TicketsLoaded {
            tickets: sample_tickets(),
        },
    )
}

fn with_error(state: StoreState) -> StoreState {
    StoreReducer::reduce(
        state,
        StoreIntent::Failed {
            message: "boom".to_string(),
        },
    )
}

#[test]
fn tickets_loaded_replaces_collection() {
    let state = loaded();
    assert_eq!(state.tickets.len(), 3);

    let state = StoreReducer::reduce(state, StoreIntent::TicketsLoaded { tickets: vec![] });
    assert!(state.tickets.is_empty());
}

#[test]
fn failed_keeps_data_and_clears_success() {
    let state = StoreReducer::reduce(
        loaded(),
        StoreIntent::TicketsChanged {
            tickets: sample_tickets(),
            message: "done".to_string(),
        },
    );
    assert_eq!(state.success.as_deref(), Some("done"));

    let state = with_error(state);
    assert_eq!(state.error.as_deref(), Some("boom"));
    assert!(state.success.is_none());
    assert_eq!(state.tickets.len(), 3);
    assert!(state.is_authenticated);
}

#[test]
fn success_clears_previous_error() {
    let state = with_error(loaded());
    let state = StoreReducer::reduce(
        state,
        StoreIntent::TicketsChanged {
            tickets: vec![],
            message: "Ticket deleted successfully".to_string(),
        },
    );
    assert!(state.error.is_none());
    assert_eq!(state.success.as_deref(), Some("Ticket deleted successfully"));
}

#[test]
fn signed_out_keeps_tickets_but_drops_auth() {
    let state = StoreReducer::reduce(with_error(loaded()), StoreIntent::SignedOut);
    assert!(!state.is_authenticated);
    assert!(state.error.is_none());
    assert_eq!(state.tickets.len(), 3);
}

#[test]
fn token_verified_authenticates() {
    let state = StoreReducer::reduce(StoreState::initial(false), StoreIntent::TokenVerified);
    assert!(state.is_authenticated);
}

#[test]
fn comment_added_sets_current_and_success() {
    let ticket = sample_tickets().remove(0);
    let state = StoreReducer::reduce(
        with_error(loaded()),
        StoreIntent::CommentAdded {
            ticket: ticket.clone(),
            message: "Comment added successfully".to_string(),
        },
    );
    assert_eq!(state.current_ticket, Some(ticket));
    assert!(state.error.is_none());
    assert!(state.success.is_some());
}

#[test]
fn current_ticket_cleared_leaves_notification() {
    let ticket = sample_tickets().remove(1);
    let state = StoreReducer::reduce(loaded(), StoreIntent::TicketLoaded { ticket });
    let state = with_error(state);

    let state = StoreReducer::reduce(state, StoreIntent::CurrentTicketCleared);
    assert!(state.current_ticket.is_none());
    assert_eq!(state.error.as_deref(), Some("boom"));
}

#[test]
fn acknowledged_clears_both_notifications() {
    let state = StoreReducer::reduce(with_error(loaded()), StoreIntent::NotificationAcknowledged);
    assert!(state.notification().is_none());
    assert_eq!(state.tickets.len(), 3);
}
