//! HTTP surface of the calendar service.
//!
//! Public event endpoints, the admin login, and token-gated event
//! mutations, all delegating to the shared record store.

pub mod routes;
pub mod state;

pub use routes::app;
pub use state::AppState;
