//! The seam between the store and the network.

use async_trait::async_trait;

use super::error::GatewayError;
use crate::model::{
    AuthResponse, Credentials, NewComment, NewTicket, Ticket, TicketId, TicketUpdate,
};

/// One method per endpoint of the ticket API.
///
/// Implementations attach the stored bearer token to every call except
/// `login` and `register`. They do not retry and do not cache.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// `POST /login`
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, GatewayError>;

    /// `POST /register`
    async fn register(&self, credentials: &Credentials) -> Result<AuthResponse, GatewayError>;

    /// `GET /tickets`
    async fn list_tickets(&self) -> Result<Vec<Ticket>, GatewayError>;

    /// `GET /tickets/{id}`
    async fn get_ticket(&self, id: TicketId) -> Result<Ticket, GatewayError>;

    /// `POST /tickets/{id}/close`
    async fn close_ticket(&self, id: TicketId) -> Result<(), GatewayError>;

    /// `POST /tickets/{id}/open`
    async fn open_ticket(&self, id: TicketId) -> Result<(), GatewayError>;

    /// `DELETE /tickets/{id}`
    async fn delete_ticket(&self, id: TicketId) -> Result<(), GatewayError>;

    /// `POST /tickets`, returning the id the server assigned.
    async fn create_ticket(&self, ticket: &NewTicket) -> Result<TicketId, GatewayError>;

    /// `PUT /tickets/{id}`
    async fn update_ticket(&self, id: TicketId, update: &TicketUpdate)
        -> Result<(), GatewayError>;

    /// `POST /tickets/{id}/comments`
    async fn add_comment(&self, id: TicketId, comment: &NewComment) -> Result<(), GatewayError>;
}
