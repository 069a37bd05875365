//! ticketdesk: client for a ticket-tracking API.
//!
//! The [`store::Store`] holds authentication status, tickets and outcome
//! notifications and performs every API call through a [`gateway::Gateway`].
//! Views read store snapshots and call store actions; the
//! [`navigation::Navigator`] clears the current ticket on each route change.

pub mod cli;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod session;
pub mod store;
pub mod ui;
