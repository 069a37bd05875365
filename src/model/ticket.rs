use serde::{Deserialize, Serialize};

use super::comment::Comment;
use super::timestamp::Timestamp;
use super::wire::{null_as_default, record_id, MissingId};

/// Server-assigned numeric ticket id.
pub type TicketId = u64;

/// Lifecycle state of a ticket. Encoded on the wire as `"O"` / `"C"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    #[serde(rename = "O")]
    Open,
    #[serde(rename = "C")]
    Closed,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }
}

/// A ticket as returned by `GET /tickets` and `GET /tickets/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TicketRecord")]
pub struct Ticket {
    pub id: TicketId,
    /// Opaque record key, when the API exposes one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xata_id: Option<String>,
    /// Reference to the owning user. Empty when the API sends none.
    #[serde(rename = "user")]
    pub owner: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub create_date: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_date: Option<Timestamp>,
    pub status: TicketStatus,
    pub comments: Vec<Comment>,
}

/// Ticket as it arrives on the wire, before the id spellings are merged.
#[derive(Deserialize)]
struct TicketRecord {
    #[serde(default)]
    ticket_id: Option<TicketId>,
    #[serde(default)]
    id: Option<TicketId>,
    #[serde(default)]
    xata_id: Option<String>,
    #[serde(default)]
    user: Option<String>,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default)]
    description: Option<String>,
    create_date: Timestamp,
    #[serde(default)]
    closed_date: Option<Timestamp>,
    status: TicketStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    comments: Vec<Comment>,
}

impl TryFrom<TicketRecord> for Ticket {
    type Error = MissingId;

    fn try_from(record: TicketRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record_id("ticket", "ticket_id", record.ticket_id, record.id)?,
            xata_id: record.xata_id,
            owner: record.user.or(record.owner).unwrap_or_default(),
            title: record.title,
            description: record.description,
            create_date: record.create_date,
            closed_date: record.closed_date,
            status: record.status,
            comments: record.comments,
        })
    }
}

impl Ticket {
    pub fn is_open(&self) -> bool {
        self.status == TicketStatus::Open
    }

    /// Closed and carrying a close date; tickets missing the date are
    /// left out of the closed listing.
    pub fn is_displayably_closed(&self) -> bool {
        self.status == TicketStatus::Closed && self.closed_date.is_some()
    }

    /// Path of the ticket detail view.
    pub fn view_path(&self) -> String {
        ticket_path(self.id)
    }
}

/// `/tickets/{id}`
pub fn ticket_path(id: TicketId) -> String {
    format!("/tickets/{}", id)
}

/// Body of `POST /tickets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTicket {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewTicket {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Body of `PUT /tickets/{id}`. Absent fields are left unchanged by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TicketUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TicketUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}
