//! HTTP gateway to the remote ticket API.
//!
//! The [`Gateway`] trait is the store's only route to the network, so tests
//! and embedders can substitute their own implementation.

mod error;
mod http;
mod traits;

pub use error::GatewayError;
pub use http::HttpGateway;
pub use traits::Gateway;
