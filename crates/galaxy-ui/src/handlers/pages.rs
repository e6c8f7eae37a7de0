//! Page handlers

use crate::masthead::render_masthead;
use crate::{AppState, Result};
use askama::Template;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

/// Query parameters selecting the highlighted navigation item
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    active_view: Option<String>,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    brand: &'a str,
    masthead: String,
}

/// Full page with the masthead embedded
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ViewQuery>,
) -> Result<Html<String>> {
    let masthead = render_masthead(
        params.active_view.as_deref(),
        &state.app_config,
        Some(&state.trans),
    )?;

    let template = PageTemplate {
        brand: state.app_config.brand.as_deref().unwrap_or_default(),
        masthead,
    };
    Ok(Html(template.render()?))
}

/// Masthead fragment only
pub async fn masthead(
    State(state): State<AppState>,
    Query(params): Query<ViewQuery>,
) -> Result<Html<String>> {
    let html = render_masthead(
        params.active_view.as_deref(),
        &state.app_config,
        Some(&state.trans),
    )?;
    Ok(Html(html))
}
