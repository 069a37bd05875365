//! Plain-text screens.
//!
//! Each function renders one view from a store snapshot; none of them
//! hold state of their own.

use std::fmt::Write;

use crate::model::{sorted_comments, Ticket};
use crate::navigation::Route;
use crate::store::StoreState;

const LOADING: &str = "Loading...";

/// Open and closed tables of the ticket list screen.
pub fn render_ticket_list(state: &StoreState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Tickets");
    let _ = writeln!(out);

    let _ = writeln!(out, "Open Tickets");
    let open = state.open_tickets();
    if open.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for ticket in open {
        let _ = writeln!(
            out,
            "  #{:<6} {:<40} created {}",
            ticket.id, ticket.title, ticket.create_date
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Closed Tickets");
    let closed = state.closed_tickets();
    if closed.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for ticket in closed {
        let closed_date = ticket
            .closed_date
            .map(|d| d.to_string())
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  #{:<6} {:<40} created {}  closed {}",
            ticket.id, ticket.title, ticket.create_date, closed_date
        );
    }
    out
}

/// Ticket detail screen. Shows a loading line while no ticket is current.
pub fn render_ticket_detail(state: &StoreState) -> String {
    match &state.current_ticket {
        Some(ticket) => render_ticket(ticket),
        None => LOADING.to_string(),
    }
}

fn render_ticket(ticket: &Ticket) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", ticket.title);
    if let Some(description) = ticket.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "{}", description);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Status: {}", ticket.status.label());
    let _ = writeln!(out, "Created Date: {}", ticket.create_date);
    if let Some(closed) = ticket.closed_date {
        let _ = writeln!(out, "Closed Date: {}", closed);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Comments");
    let comments = sorted_comments(&ticket.comments);
    if comments.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for comment in comments {
        let _ = writeln!(out, "  {}: {}", comment.author_name, comment.body);
        let _ = writeln!(out, "    {}", comment.comment_date);
    }
    out
}

/// Body text for routes without data of their own.
pub fn render_placeholder(route: Route) -> &'static str {
    match route {
        Route::NotFound => "404 - Page Not Found",
        Route::Login => "Login",
        Route::Register => "Register",
        Route::NewTicket => "Create Ticket",
        Route::Tickets | Route::Ticket(_) | Route::EditTicket(_) => "",
    }
}
