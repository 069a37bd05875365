//! View layer: MVI primitives and text renderers.

pub mod mvi;
mod notify;
mod render;

pub use notify::{format_notification, take_notification};
pub use render::{render_placeholder, render_ticket_detail, render_ticket_list};
