use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;
use super::wire::{null_as_default, record_id, MissingId};

/// A comment attached to a ticket. Never edited by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CommentRecord")]
pub struct Comment {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xata_id: Option<String>,
    /// Reference to the author.
    #[serde(rename = "user")]
    pub author: String,
    /// Author display name.
    #[serde(rename = "username")]
    pub author_name: String,
    #[serde(rename = "comment")]
    pub body: String,
    pub comment_date: Timestamp,
}

#[derive(Deserialize)]
struct CommentRecord {
    #[serde(default)]
    ticket_comment_id: Option<u64>,
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    xata_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    user: String,
    #[serde(default, deserialize_with = "null_as_default")]
    username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    comment: String,
    comment_date: Timestamp,
}

impl TryFrom<CommentRecord> for Comment {
    type Error = MissingId;

    fn try_from(record: CommentRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record_id(
                "comment",
                "ticket_comment_id",
                record.ticket_comment_id,
                record.id,
            )?,
            xata_id: record.xata_id,
            author: record.user,
            author_name: record.username,
            body: record.comment,
            comment_date: record.comment_date,
        })
    }
}

/// Body of `POST /tickets/{id}/comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub comment: String,
}

impl NewComment {
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
        }
    }
}
