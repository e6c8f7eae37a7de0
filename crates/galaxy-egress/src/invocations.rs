//! Recent workflow invocations
//!
//! One call is one `GET <app-root>/api/invocations?user_id=<id>&limit=150`.
//! There is no retry, caching or deduplication: concurrent calls are
//! independent requests and may complete in any order.

use crate::client::{HttpClientConfig, create_client};
use crate::{EgressError, Result};
use galaxy_core::SessionContext;
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::{debug, warn};

/// Resource path under the application root
pub const INVOCATIONS_PATH: &str = "api/invocations";

/// Number of most-recent invocations requested
pub const RECENT_INVOCATIONS_LIMIT: u32 = 150;

/// Query string for the invocations listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvocationQuery<'a> {
    pub user_id: &'a str,
    pub limit: u32,
}

impl<'a> InvocationQuery<'a> {
    pub fn recent(user_id: &'a str) -> Self {
        Self {
            user_id,
            limit: RECENT_INVOCATIONS_LIMIT,
        }
    }
}

/// Build `<base>/api/invocations` regardless of a trailing slash on `base_url`
pub fn invocations_url(base_url: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), INVOCATIONS_PATH)
}

/// Client for the invocations endpoint
#[derive(Debug, Clone)]
pub struct InvocationsClient {
    client: Client,
}

impl InvocationsClient {
    pub fn new(config: &HttpClientConfig) -> Result<Self> {
        Ok(Self {
            client: create_client(config)?,
        })
    }

    /// Wrap an existing client, sharing its connection pool
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// List the current user's recent invocations.
    ///
    /// A successful response is returned as received with its body unread.
    /// Any other status becomes [`EgressError::Status`] carrying the error
    /// body Galaxy sent (`{"err_msg": ..., "err_code": ...}`). A
    /// session without a user fails with [`EgressError::MissingUser`]
    /// before any request is sent.
    pub async fn recent_invocations(&self, ctx: &dyn SessionContext) -> Result<Response> {
        let user_id = ctx.user_id().ok_or(EgressError::MissingUser)?;
        let url = invocations_url(ctx.base_url());
        let query = InvocationQuery::recent(user_id);

        debug!("GET {} (user_id={}, limit={})", url, query.user_id, query.limit);

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .inspect_err(|e| warn!("Invocations request to {} failed: {}", url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Invocations request to {} returned {}", url, status);
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            return Err(EgressError::Status {
                status_code: status.as_u16(),
                url,
                body,
            });
        }

        Ok(response)
    }
}
