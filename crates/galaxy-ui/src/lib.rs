//! Galaxy Web UI glue
//!
//! Server-side masthead bootstrapping: the masthead options are collected
//! from the application config and the request context, serialized, and
//! handed to the client bundle's `initMasthead` entry point.
//! The HTML template is compiled into the binary.

pub mod error;
pub mod handlers;
pub mod masthead;
pub mod server;
pub mod trans;

pub use error::{RenderError, Result};
pub use masthead::{MastheadConfig, render_masthead};
pub use server::{UiConfig, UiServer};
pub use trans::TransContext;

use galaxy_core::AppConfig;
use std::sync::Arc;

/// Shared application state for the UI server
#[derive(Clone)]
pub struct AppState {
    pub app_config: Arc<AppConfig>,
    pub trans: Arc<TransContext>,
}
