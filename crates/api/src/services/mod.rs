//! External service integrations.

pub mod routing;

#[allow(unused_imports)] // Re-exports for downstream use
pub use routing::{RoutingClient, RoutingError, TravelEstimate};
