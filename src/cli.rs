//! Command-line interface definitions.

use clap::{Parser, Subcommand};

use crate::model::{NewTicket, TicketId, TicketUpdate};
use crate::navigation::Route;

#[derive(Debug, Parser)]
#[command(name = "ticketdesk", version, about = "Terminal client for the ticket tracker API")]
pub struct Cli {
    /// Override the API base URL.
    #[arg(long, global = true, env = "TICKETDESK_API_URL")]
    pub api_url: Option<String>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable coloured output.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the session token.
    Login {
        #[arg(short, long)]
        username: String,
        /// Prompted for when omitted.
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create an account and store the session token.
    Register {
        #[arg(short, long)]
        username: String,
        /// Prompted for when omitted.
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Forget the stored session token.
    Logout,
    /// Check whether the stored session is still valid.
    Whoami,
    /// List open and closed tickets.
    List,
    /// Show a ticket with its comments.
    Show { id: TicketId },
    /// Create a ticket.
    New {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Edit a ticket's title or description.
    Edit {
        id: TicketId,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Close a ticket.
    Close { id: TicketId },
    /// Reopen a closed ticket.
    Open { id: TicketId },
    /// Delete a ticket.
    Delete {
        id: TicketId,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Comment on a ticket.
    Comment { id: TicketId, text: String },
}

impl Command {
    /// The screen this command acts on.
    pub fn route(&self) -> Route {
        match self {
            Command::Login { .. } | Command::Logout | Command::Whoami => Route::Login,
            Command::Register { .. } => Route::Register,
            Command::List | Command::Close { .. } | Command::Open { .. } | Command::Delete { .. } => {
                Route::Tickets
            }
            Command::New { .. } => Route::NewTicket,
            Command::Show { id } | Command::Comment { id, .. } => Route::Ticket(*id),
            Command::Edit { id, .. } => Route::EditTicket(*id),
        }
    }

    /// Whether the command needs a signed-in session.
    pub fn requires_session(&self) -> bool {
        !matches!(
            self,
            Command::Login { .. } | Command::Register { .. } | Command::Logout | Command::Whoami
        )
    }
}

/// Build the create body, dropping an empty description.
pub fn new_ticket(title: &str, description: Option<&str>) -> NewTicket {
    let ticket = NewTicket::new(title.trim());
    match description.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => ticket.with_description(d),
        None => ticket,
    }
}

/// Fill fields the user did not pass from the current ticket, the way the
/// edit form is prefilled.
pub fn prefilled_update(
    title: Option<String>,
    description: Option<String>,
    current_title: &str,
    current_description: Option<&str>,
) -> TicketUpdate {
    TicketUpdate {
        title: Some(title.unwrap_or_else(|| current_title.to_string())),
        description: Some(description.unwrap_or_else(|| {
            current_description.unwrap_or_default().to_string()
        })),
    }
}
