//! Display ordering for ticket listings and comment threads.

use std::cmp::Reverse;

use super::comment::Comment;
use super::ticket::Ticket;

/// Open tickets, newest first by creation date.
pub fn open_tickets(tickets: &[Ticket]) -> Vec<&Ticket> {
    let mut open: Vec<&Ticket> = tickets.iter().filter(|t| t.is_open()).collect();
    open.sort_by_key(|t| Reverse(t.create_date));
    open
}

/// Closed tickets that carry a close date, most recently closed first.
pub fn closed_tickets(tickets: &[Ticket]) -> Vec<&Ticket> {
    let mut closed: Vec<&Ticket> = tickets
        .iter()
        .filter(|t| t.is_displayably_closed())
        .collect();
    closed.sort_by_key(|t| Reverse(t.closed_date));
    closed
}

/// Comments oldest first. Stable for equal dates.
pub fn sorted_comments(comments: &[Comment]) -> Vec<&Comment> {
    let mut sorted: Vec<&Comment> = comments.iter().collect();
    sorted.sort_by_key(|c| c.comment_date);
    sorted
}
