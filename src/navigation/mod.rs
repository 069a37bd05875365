//! Routes, the auth guard and the route-change trigger.

mod route;
mod trigger;

pub use route::Route;
pub use trigger::Navigator;
