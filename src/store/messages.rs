//! User-facing outcome strings.

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const LOGOUT_FAILED: &str = "Failed to remove the stored session token";
pub const FETCH_TICKETS_FAILED: &str = "Failed to fetch tickets";
pub const FETCH_TICKET_FAILED: &str = "Failed to fetch ticket";
pub const CLOSE_FAILED: &str = "Failed to close ticket";
pub const OPEN_FAILED: &str = "Failed to open ticket";
pub const DELETE_FAILED: &str = "Failed to delete ticket";
pub const CREATE_FAILED: &str = "Failed to create ticket";
pub const UPDATE_FAILED: &str = "Failed to update ticket";
pub const COMMENT_FAILED: &str = "Failed to comment on ticket";

pub const CLOSED: &str = "Ticket closed successfully";
pub const OPENED: &str = "Ticket opened successfully";
pub const DELETED: &str = "Ticket deleted successfully";
pub const CREATED: &str = "Ticket created successfully";
pub const UPDATED: &str = "Ticket updated successfully";
pub const COMMENTED: &str = "Comment added successfully";

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this ticket?";
