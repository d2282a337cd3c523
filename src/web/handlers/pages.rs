// Page handlers for HTML rendering with Askama
//
// A normal request gets the whole document (sidebar, main area, footer).
// An htmx request (sidebar click, launch button) gets only the main area plus
// an out-of-band sidebar so the active entry highlight follows along.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_htmx::HxRequest;
use serde::Deserialize;

use crate::config::SiteConfig;
use crate::error::ContentError;
use crate::navigation::NavShell;
use crate::pages::{RenderedPage, SessionContext};
use crate::server::{AppError, AppState};

// ============================================================================
// View models
// ============================================================================

pub struct NavLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: String,
    pub active: bool,
}

pub struct ErrorView {
    pub title: String,
    pub message: String,
}

impl ErrorView {
    fn unknown_page(slug: &str) -> Self {
        Self {
            title: "Page not found".to_string(),
            message: format!("There is no page called '{}'.", slug),
        }
    }

    fn content(err: &ContentError) -> Self {
        Self {
            title: "This page could not be rendered".to_string(),
            message: err.to_string(),
        }
    }
}

/// Every link carries the session so a launched project survives navigation.
fn nav_links(nav: &NavShell, session: &SessionContext) -> Vec<NavLink> {
    let query = session.query_string();
    nav.entries()
        .iter()
        .map(|entry| NavLink {
            label: entry.label,
            icon: entry.icon,
            href: format!("/page/{}{}", entry.slug, query),
            active: nav.is_active(entry),
        })
        .collect()
}

// ============================================================================
// Templates
// ============================================================================

#[derive(Template)]
#[template(path = "layout.html")]
pub struct LayoutTemplate {
    pub site: SiteConfig,
    pub nav: Vec<NavLink>,
    /// `data:` URI of the sidebar profile image.
    pub avatar: Option<String>,
    pub page: Option<RenderedPage>,
    pub error: Option<ErrorView>,
    pub footer_year: String,
    pub oob: bool,
}

#[derive(Template)]
#[template(path = "fragment.html")]
pub struct FragmentTemplate {
    pub site: SiteConfig,
    pub nav: Vec<NavLink>,
    pub page: Option<RenderedPage>,
    pub error: Option<ErrorView>,
    pub oob: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// `?project=` carries the launched project between clicks.
#[derive(Debug, Default, Deserialize)]
pub struct SessionQuery {
    pub project: Option<String>,
}

impl From<SessionQuery> for SessionContext {
    fn from(query: SessionQuery) -> Self {
        SessionContext {
            launched_project: query.project.filter(|p| !p.trim().is_empty()),
        }
    }
}

pub async fn home_page(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Response, AppError> {
    render_selection(&state, None, query.into(), is_htmx)
}

pub async fn show_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<SessionQuery>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Response, AppError> {
    render_selection(&state, Some(&slug), query.into(), is_htmx)
}

fn render_selection(
    state: &AppState,
    slug: Option<&str>,
    session: SessionContext,
    is_htmx: bool,
) -> Result<Response, AppError> {
    let mut nav = NavShell::portfolio();

    let selected = match slug {
        Some(slug) => nav.select_slug(slug).is_some(),
        None => nav.active().is_some(),
    };

    let (status, page, error) = if !selected {
        let slug = slug.unwrap_or_default();
        tracing::warn!("Unknown page '{}'", slug);
        (StatusCode::NOT_FOUND, None, Some(ErrorView::unknown_page(slug)))
    } else {
        let module = nav
            .active_page()
            .ok_or_else(|| AppError::Internal("navigation has no entries".to_string()))?;

        match module.render(&state.loader, &session) {
            Ok(page) => (StatusCode::OK, Some(page), None),
            Err(err) => {
                tracing::error!("Failed to render {:?}: {}", module, err);
                (StatusCode::INTERNAL_SERVER_ERROR, None, Some(ErrorView::content(&err)))
            }
        }
    };

    let body = if is_htmx {
        FragmentTemplate {
            site: state.site,
            nav: nav_links(&nav, &session),
            page,
            error,
            oob: true,
        }
        .render()?
    } else {
        LayoutTemplate {
            site: state.site,
            nav: nav_links(&nav, &session),
            avatar: load_avatar(state),
            page,
            error,
            footer_year: chrono::Utc::now().format("%Y").to_string(),
            oob: false,
        }
        .render()?
    };

    Ok((status, Html(body)).into_response())
}

/// The sidebar must stay usable, so a missing avatar only logs.
fn load_avatar(state: &AppState) -> Option<String> {
    match state
        .loader
        .load_image(state.site.profile_image, None, state.site.profile_image_extension)
    {
        Ok(image) => Some(image.data_uri()),
        Err(err) => {
            tracing::warn!("Profile image unavailable: {}", err);
            None
        }
    }
}
