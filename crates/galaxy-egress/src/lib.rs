//! Galaxy Egress
//!
//! Outbound calls to the Galaxy REST API:
//! - Shared HTTP client construction
//! - Recent workflow invocations for the current user

pub mod client;
pub mod error;
pub mod invocations;

pub use error::{EgressError, Result};
pub use invocations::{InvocationsClient, RECENT_INVOCATIONS_LIMIT};
