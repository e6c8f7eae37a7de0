//! Masthead bootstrapping
//!
//! Builds the options object for the client-side masthead and renders the
//! mount element plus the inline script that hands both to the bundle.

use crate::trans::TransContext;
use crate::{RenderError, Result};
use askama::Template;
use galaxy_core::{AppConfig, url_for};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// DOM id of the masthead mount element
pub const MOUNT_ID: &str = "masthead";

/// Upload endpoint used when `nginx_upload_path` is unset
pub const UPLOAD_TOOLS_PATH: &str = "/api/tools";

pub const DEFAULT_LIMS_DOC_URL: &str = "https://usegalaxy.org/u/rkchak/p/sts";

pub const DEFAULT_LOGO_SRC: &str = "/static/favicon.png";

/// Options handed to `initMasthead`. Field order is the emitted key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MastheadConfig {
    pub brand: String,
    pub display_galaxy_brand: Option<bool>,
    pub nginx_upload_path: String,
    pub use_remote_user: Option<bool>,
    pub remote_user_logout_href: Option<String>,
    pub enable_cloud_launch: bool,
    pub lims_doc_url: String,
    pub default_locale: Option<String>,
    pub support_url: Option<String>,
    pub search_url: Option<String>,
    pub mailing_lists: Option<String>,
    pub screencasts_url: Option<String>,
    pub wiki_url: Option<String>,
    pub citation_url: Option<String>,
    pub terms_url: String,
    pub allow_user_creation: Option<bool>,
    pub logo_url: Option<String>,
    pub logo_src: String,
    pub is_admin_user: bool,
    pub active_view: Option<String>,
    pub ftp_upload_site: Option<String>,
    pub datatypes_disable_auto: Option<bool>,
    pub user_json: Value,
}

impl MastheadConfig {
    pub fn build(active_view: Option<&str>, app: &AppConfig, trans: &TransContext) -> Self {
        let root = trans.root.as_str();

        Self {
            brand: app.brand.clone().unwrap_or_default(),
            display_galaxy_brand: app.display_galaxy_brand,
            nginx_upload_path: app
                .nginx_upload_path
                .clone()
                .unwrap_or_else(|| url_for(root, UPLOAD_TOOLS_PATH)),
            use_remote_user: app.use_remote_user,
            remote_user_logout_href: app.remote_user_logout_href.clone(),
            enable_cloud_launch: app.enable_cloud_launch.unwrap_or(false),
            lims_doc_url: app
                .lims_doc_url
                .clone()
                .unwrap_or_else(|| DEFAULT_LIMS_DOC_URL.to_string()),
            default_locale: app.default_locale.clone(),
            support_url: app.support_url.clone(),
            search_url: app.search_url.clone(),
            mailing_lists: app.mailing_lists.clone(),
            screencasts_url: app.screencasts_url.clone(),
            wiki_url: app.wiki_url.clone(),
            citation_url: app.citation_url.clone(),
            terms_url: app.terms_url.clone().unwrap_or_default(),
            allow_user_creation: app.allow_user_creation,
            logo_url: app.logo_url.as_deref().map(|url| url_for(root, url)),
            logo_src: url_for(root, app.logo_src.as_deref().unwrap_or(DEFAULT_LOGO_SRC)),
            is_admin_user: trans.user_is_admin,
            active_view: active_view.map(str::to_string),
            ftp_upload_site: app.ftp_upload_site.clone(),
            datatypes_disable_auto: app.datatypes_disable_auto,
            user_json: trans.user_json.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "masthead.html")]
struct MastheadTemplate<'a> {
    mount_id: &'a str,
    options: MastheadConfig,
}

/// Render the masthead mount element and its initialization script.
///
/// The options go through askama's `json` filter, which escapes `<`, `>`,
/// `&` and `'` so string values cannot break out of the script element.
/// A missing request context is fatal.
pub fn render_masthead(
    active_view: Option<&str>,
    app: &AppConfig,
    trans: Option<&TransContext>,
) -> Result<String> {
    let trans = trans.ok_or(RenderError::MissingContext("trans"))?;
    let options = MastheadConfig::build(active_view, app, trans);

    debug!(
        "Rendering masthead (active_view={:?}, admin={})",
        options.active_view, options.is_admin_user
    );

    let template = MastheadTemplate {
        mount_id: MOUNT_ID,
        options,
    };
    Ok(template.render()?)
}
