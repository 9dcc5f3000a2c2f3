//! HTTP module for the portal pages.

pub mod handlers;
pub mod routes;

pub use routes::create_router;

/// Fixed listening port for the portal.
pub const PORT: u16 = 3000;
