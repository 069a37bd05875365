//! In-process gateway that behaves like a small ticket API.

#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use ticketdesk::gateway::{Gateway, GatewayError};
use ticketdesk::model::{
    AuthResponse, Comment, Credentials, NewComment, NewTicket, Ticket, TicketId, TicketStatus,
    TicketUpdate, Timestamp,
};

/// A recorded gateway call, for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Login(String),
    Register(String),
    ListTickets,
    GetTicket(TicketId),
    Close(TicketId),
    Open(TicketId),
    Delete(TicketId),
    Create(String),
    Update(TicketId),
    Comment(TicketId, String),
}

/// Endpoint keys for scripted failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    Register,
    ListTickets,
    GetTicket,
    Close,
    Open,
    Delete,
    Create,
    Update,
    Comment,
}

pub struct MockGateway {
    calls: Mutex<Vec<Call>>,
    tickets: Mutex<Vec<Ticket>>,
    failures: Mutex<HashMap<Endpoint, GatewayError>>,
    token: String,
    next_id: Mutex<TicketId>,
    clock: Mutex<i64>,
}

impl MockGateway {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        let next_id = tickets.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            calls: Mutex::new(Vec::new()),
            tickets: Mutex::new(tickets),
            failures: Mutex::new(HashMap::new()),
            token: "abc".to_string(),
            next_id: Mutex::new(next_id),
            clock: Mutex::new(0),
        }
    }

    /// Token returned by login/register.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = token.to_string();
        self
    }

    /// Make `endpoint` fail with `err` until cleared.
    pub fn fail(&self, endpoint: Endpoint, err: GatewayError) {
        self.failures.lock().insert(endpoint, err);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.failures.lock().remove(&endpoint);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    pub fn server_tickets(&self) -> Vec<Ticket> {
        self.tickets.lock().clone()
    }

    /// Monotonic timestamps one minute apart, starting 2024-01-10.
    fn now(&self) -> Timestamp {
        let mut clock = self.clock.lock();
        *clock += 60;
        let base = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        Timestamp::new(base + chrono::Duration::seconds(*clock))
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }

    fn check(&self, endpoint: Endpoint) -> Result<(), GatewayError> {
        match self.failures.lock().get(&endpoint) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn not_found(id: TicketId) -> GatewayError {
        GatewayError::Api {
            path: format!("/tickets/{}", id),
            status: 404,
            message: Some("Ticket not found".to_string()),
        }
    }

    fn with_ticket<T>(
        &self,
        id: TicketId,
        f: impl FnOnce(&mut Ticket) -> T,
    ) -> Result<T, GatewayError> {
        let mut tickets = self.tickets.lock();
        let ticket = tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        Ok(f(ticket))
    }
}

pub fn api_error(status: u16, message: Option<&str>) -> GatewayError {
    GatewayError::Api {
        path: "/mock".to_string(),
        status,
        message: message.map(str::to_string),
    }
}

pub fn transport_error() -> GatewayError {
    GatewayError::Transport {
        path: "/mock".to_string(),
        message: "connection refused".to_string(),
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, GatewayError> {
        self.record(Call::Login(credentials.username.clone()));
        self.check(Endpoint::Login)?;
        Ok(AuthResponse {
            token: self.token.clone(),
            username: Some(credentials.username.clone()),
        })
    }

    async fn register(&self, credentials: &Credentials) -> Result<AuthResponse, GatewayError> {
        self.record(Call::Register(credentials.username.clone()));
        self.check(Endpoint::Register)?;
        Ok(AuthResponse {
            token: self.token.clone(),
            username: Some(credentials.username.clone()),
        })
    }

    async fn list_tickets(&self) -> Result<Vec<Ticket>, GatewayError> {
        self.record(Call::ListTickets);
        self.check(Endpoint::ListTickets)?;
        Ok(self.tickets.lock().clone())
    }

    async fn get_ticket(&self, id: TicketId) -> Result<Ticket, GatewayError> {
        self.record(Call::GetTicket(id));
        self.check(Endpoint::GetTicket)?;
        self.with_ticket(id, |t| t.clone())
    }

    async fn close_ticket(&self, id: TicketId) -> Result<(), GatewayError> {
        self.record(Call::Close(id));
        self.check(Endpoint::Close)?;
        let now = self.now();
        self.with_ticket(id, |t| {
            t.status = TicketStatus::Closed;
            t.closed_date = Some(now);
        })
    }

    async fn open_ticket(&self, id: TicketId) -> Result<(), GatewayError> {
        self.record(Call::Open(id));
        self.check(Endpoint::Open)?;
        self.with_ticket(id, |t| {
            t.status = TicketStatus::Open;
            t.closed_date = None;
        })
    }

    async fn delete_ticket(&self, id: TicketId) -> Result<(), GatewayError> {
        self.record(Call::Delete(id));
        self.check(Endpoint::Delete)?;
        let mut tickets = self.tickets.lock();
        let before = tickets.len();
        tickets.retain(|t| t.id != id);
        if tickets.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> Result<TicketId, GatewayError> {
        self.record(Call::Create(ticket.title.clone()));
        self.check(Endpoint::Create)?;
        let id = {
            let mut next = self.next_id.lock();
            let id = *next;
            *next += 1;
            id
        };
        let create_date = self.now();
        self.tickets.lock().push(Ticket {
            id,
            xata_id: None,
            owner: "rec_user".to_string(),
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            create_date,
            closed_date: None,
            status: TicketStatus::Open,
            comments: Vec::new(),
        });
        Ok(id)
    }

    async fn update_ticket(
        &self,
        id: TicketId,
        update: &TicketUpdate,
    ) -> Result<(), GatewayError> {
        self.record(Call::Update(id));
        self.check(Endpoint::Update)?;
        self.with_ticket(id, |t| {
            if let Some(title) = &update.title {
                t.title = title.clone();
            }
            if let Some(description) = &update.description {
                t.description = Some(description.clone());
            }
        })
    }

    async fn add_comment(&self, id: TicketId, comment: &NewComment) -> Result<(), GatewayError> {
        self.record(Call::Comment(id, comment.comment.clone()));
        self.check(Endpoint::Comment)?;
        let comment_date = self.now();
        self.with_ticket(id, |t| {
            let comment_id = t.comments.len() as u64 + 1;
            // Newest first, the way the API returns them.
            t.comments.insert(
                0,
                Comment {
                    id: comment_id,
                    xata_id: None,
                    author: "rec_user".to_string(),
                    author_name: "alice".to_string(),
                    body: comment.comment.clone(),
                    comment_date,
                },
            );
        })
    }
}
