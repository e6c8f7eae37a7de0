//! Galaxy Core
//!
//! Shared types for the Galaxy glue crates:
//! - Session context handed to the invocation fetcher
//! - Application configuration read by the masthead
//! - Root-relative URL resolution

pub mod config;
pub mod error;
pub mod session;
pub mod url;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use session::{Session, SessionContext};
pub use url::url_for;
