use crate::model::{ticket_path, TicketId};

/// A screen the view layer can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Tickets,
    NewTicket,
    Ticket(TicketId),
    EditTicket(TicketId),
    NotFound,
}

impl Route {
    /// Resolve a path. Trailing slashes and query strings are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Login,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["tickets"] => Route::Tickets,
            ["tickets", "new"] => Route::NewTicket,
            ["tickets", id] => id.parse().map(Route::Ticket).unwrap_or(Route::NotFound),
            ["tickets", id, "edit"] => id
                .parse()
                .map(Route::EditTicket)
                .unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }

    /// Canonical path. `NotFound` has none of its own.
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Register => "/register".to_string(),
            Route::Tickets => "/tickets".to_string(),
            Route::NewTicket => "/tickets/new".to_string(),
            Route::Ticket(id) => ticket_path(*id),
            Route::EditTicket(id) => format!("{}/edit", ticket_path(*id)),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Screens only signed-out users see.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }

    /// Where to send a user with the given auth status, or `None` to stay.
    pub fn redirect_for(&self, is_authenticated: bool) -> Option<Route> {
        match (self.is_public(), is_authenticated) {
            (true, true) => Some(Route::Tickets),
            (false, false) => Some(Route::Login),
            _ => None,
        }
    }

    /// The route after applying the auth guard.
    pub fn guarded(self, is_authenticated: bool) -> Route {
        self.redirect_for(is_authenticated).unwrap_or(self)
    }
}
