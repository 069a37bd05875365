//! The session/data store.
//!
//! Owns authentication status and ticket data, mediates every network call
//! and reports each action's outcome through `error` / `success`.
//!
//! Mutations are followed by an authoritative refetch of the affected data
//! rather than a local patch, so the visible state is always what the server
//! returned after the change. Failures never escape an action: they become
//! the `error` notification and leave prior data untouched.

use std::sync::Arc;

use tokio::sync::watch;

use super::confirm::Confirm;
use super::intent::StoreIntent;
use super::messages;
use super::reducer::StoreReducer;
use super::state::StoreState;
use crate::gateway::{Gateway, GatewayError};
use crate::model::{ticket_path, Credentials, NewComment, NewTicket, TicketId, TicketUpdate};
use crate::session::TokenStore;
use crate::ui::mvi::Reducer;

/// Explicitly constructed store shared by the views.
///
/// Cloning is cheap; clones share state, gateway and token storage.
pub struct Store<G> {
    gateway: Arc<G>,
    tokens: Arc<dyn TokenStore>,
    state: Arc<watch::Sender<StoreState>>,
}

impl<G> Clone for Store<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            tokens: Arc::clone(&self.tokens),
            state: Arc::clone(&self.state),
        }
    }
}

impl<G: Gateway> Store<G> {
    /// Build a store. `is_authenticated` starts as "a token is persisted".
    pub fn new(gateway: G, tokens: Arc<dyn TokenStore>) -> Self {
        let initial = StoreState::initial(tokens.load().is_some());
        let (sender, _) = watch::channel(initial);
        Self {
            gateway: Arc::new(gateway),
            tokens,
            state: Arc::new(sender),
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Receive a snapshot after every transition.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn dispatch(&self, intent: StoreIntent) {
        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = StoreReducer::reduce(current, intent);
        });
    }

    fn fail(&self, action: &'static str, err: &GatewayError, fallback: &str) {
        let message = err.user_message(fallback);
        tracing::warn!(action, error = %err, "Action failed");
        self.dispatch(StoreIntent::Failed { message });
    }

    /// `POST /login`, then persist the returned token.
    pub async fn login(&self, credentials: &Credentials) {
        let result = self.gateway.login(credentials).await;
        self.complete_auth("login", result, messages::LOGIN_FAILED);
    }

    /// `POST /register`, same contract as `login`.
    pub async fn register(&self, credentials: &Credentials) {
        let result = self.gateway.register(credentials).await;
        self.complete_auth("register", result, messages::REGISTRATION_FAILED);
    }

    fn complete_auth(
        &self,
        action: &'static str,
        result: Result<crate::model::AuthResponse, GatewayError>,
        fallback: &str,
    ) {
        let response = match result {
            Ok(response) => response,
            Err(err) => return self.fail(action, &err, fallback),
        };

        if let Err(err) = self.tokens.save(&response.token) {
            tracing::warn!(action, error = %err, "Failed to persist session token");
            self.dispatch(StoreIntent::Failed {
                message: fallback.to_string(),
            });
            return;
        }

        tracing::info!(
            action,
            username = response.username.as_deref().unwrap_or(""),
            "Authenticated"
        );
        self.dispatch(StoreIntent::Authenticated);
    }

    /// Erase the token and sign out. No network call.
    ///
    /// The session ends even when the token file cannot be removed; that
    /// case is reported as an error so the caller knows a token is left
    /// on disk.
    pub fn logout(&self) {
        let cleared = self.tokens.clear();
        tracing::info!("Logged out");
        self.dispatch(StoreIntent::SignedOut);
        if let Err(err) = cleared {
            tracing::warn!(error = %err, "Failed to erase session token");
            self.dispatch(StoreIntent::Failed {
                message: messages::LOGOUT_FAILED.to_string(),
            });
        }
    }

    /// `GET /tickets`, replacing the collection wholesale.
    pub async fn fetch_tickets(&self) {
        match self.gateway.list_tickets().await {
            Ok(tickets) => self.dispatch(StoreIntent::TicketsLoaded { tickets }),
            Err(err) => self.fail("fetch_tickets", &err, messages::FETCH_TICKETS_FAILED),
        }
    }

    /// `GET /tickets/{id}` into `current_ticket`.
    pub async fn fetch_ticket_by_id(&self, id: TicketId) {
        match self.gateway.get_ticket(id).await {
            Ok(ticket) => self.dispatch(StoreIntent::TicketLoaded { ticket }),
            Err(err) => self.fail("fetch_ticket", &err, messages::FETCH_TICKET_FAILED),
        }
    }

    /// Refetch the collection after a successful mutation and report
    /// `message`. Returns whether the refresh landed.
    async fn refresh_after(&self, action: &'static str, message: &str) -> bool {
        match self.gateway.list_tickets().await {
            Ok(tickets) => {
                tracing::info!(action, count = tickets.len(), "Tickets refreshed");
                self.dispatch(StoreIntent::TicketsChanged {
                    tickets,
                    message: message.to_string(),
                });
                true
            }
            Err(err) => {
                self.fail(action, &err, messages::FETCH_TICKETS_FAILED);
                false
            }
        }
    }

    /// `POST /tickets/{id}/close`, then refresh.
    pub async fn close_ticket(&self, id: TicketId) {
        match self.gateway.close_ticket(id).await {
            Ok(()) => {
                self.refresh_after("close_ticket", messages::CLOSED).await;
            }
            Err(err) => self.fail("close_ticket", &err, messages::CLOSE_FAILED),
        }
    }

    /// `POST /tickets/{id}/open`, then refresh.
    pub async fn open_ticket(&self, id: TicketId) {
        match self.gateway.open_ticket(id).await {
            Ok(()) => {
                self.refresh_after("open_ticket", messages::OPENED).await;
            }
            Err(err) => self.fail("open_ticket", &err, messages::OPEN_FAILED),
        }
    }

    /// Ask `confirm`, then `DELETE /tickets/{id}` and refresh.
    ///
    /// A declined confirmation makes no call and changes nothing.
    pub async fn delete_ticket<C>(&self, id: TicketId, confirm: &C)
    where
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(messages::DELETE_PROMPT) {
            tracing::debug!(id, "Delete declined");
            return;
        }

        match self.gateway.delete_ticket(id).await {
            Ok(()) => {
                self.refresh_after("delete_ticket", messages::DELETED).await;
            }
            Err(err) => self.fail("delete_ticket", &err, messages::DELETE_FAILED),
        }
    }

    /// `POST /tickets`, refresh, then hand the new ticket's path to `on_done`.
    pub async fn create_ticket<F>(&self, ticket: &NewTicket, on_done: F)
    where
        F: FnOnce(String),
    {
        match self.gateway.create_ticket(ticket).await {
            Ok(id) => {
                if self.refresh_after("create_ticket", messages::CREATED).await {
                    on_done(ticket_path(id));
                }
            }
            Err(err) => self.fail("create_ticket", &err, messages::CREATE_FAILED),
        }
    }

    /// `PUT /tickets/{id}`, refresh, then hand the ticket's path to `on_done`.
    pub async fn update_ticket<F>(&self, id: TicketId, update: &TicketUpdate, on_done: F)
    where
        F: FnOnce(String),
    {
        match self.gateway.update_ticket(id, update).await {
            Ok(()) => {
                if self.refresh_after("update_ticket", messages::UPDATED).await {
                    on_done(ticket_path(id));
                }
            }
            Err(err) => self.fail("update_ticket", &err, messages::UPDATE_FAILED),
        }
    }

    /// `POST /tickets/{id}/comments`, then refetch that ticket.
    pub async fn comment_on_ticket(&self, id: TicketId, comment: &NewComment) {
        if let Err(err) = self.gateway.add_comment(id, comment).await {
            return self.fail("comment_on_ticket", &err, messages::COMMENT_FAILED);
        }

        match self.gateway.get_ticket(id).await {
            Ok(ticket) => self.dispatch(StoreIntent::CommentAdded {
                ticket,
                message: messages::COMMENTED.to_string(),
            }),
            Err(err) => self.fail("comment_on_ticket", &err, messages::FETCH_TICKET_FAILED),
        }
    }

    /// Check the stored token with an authenticated `GET /tickets`.
    ///
    /// Without a token no request is made. Any failure erases the token.
    /// The ticket data of that check is discarded.
    pub async fn verify_token(&self) {
        if self.tokens.load().is_none() {
            tracing::debug!("No session token to verify");
            self.dispatch(StoreIntent::SignedOut);
            return;
        }

        match self.gateway.list_tickets().await {
            Ok(_) => {
                tracing::debug!("Session token verified");
                self.dispatch(StoreIntent::TokenVerified);
            }
            Err(err) => {
                tracing::info!(error = %err, "Session token rejected");
                if let Err(err) = self.tokens.clear() {
                    tracing::warn!(error = %err, "Failed to erase session token");
                }
                self.dispatch(StoreIntent::SignedOut);
            }
        }
    }

    /// Drop the pending notification once the view has shown it.
    pub fn reset_notification(&self) {
        self.dispatch(StoreIntent::NotificationAcknowledged);
    }

    /// Forget the ticket shown by the detail view.
    pub fn clear_current_ticket(&self) {
        self.dispatch(StoreIntent::CurrentTicketCleared);
    }
}
