// HTTP request handlers
use crate::domain::chart::ChartData;
use crate::domain::error::DashboardError;
use crate::domain::site_score::SiteScore;
use crate::infrastructure::html_response::{dashboard_href, render_dashboard_page};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub expanded: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SiteView {
    #[serde(flatten)]
    pub site: SiteScore,
    pub overall: i32,
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = match &self {
            DashboardError::RowOutOfRange { .. } => StatusCode::BAD_REQUEST,
            DashboardError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("Dashboard render failed: {}", self);
        } else {
            tracing::debug!("Rejected dashboard request: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the dashboard page; `?expanded=i` opens the detail panel under row `i`
pub async fn dashboard_page(
    Query(query): Query<DashboardQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, DashboardError> {
    let service = &state.dashboard_service;
    let view_state = service.state(query.expanded)?;
    let dashboard = service.dashboard(&view_state);

    tracing::debug!("Rendering dashboard, expanded row: {:?}", view_state.expanded());
    Ok(Html(render_dashboard_page(&dashboard)?))
}

/// Row click: toggle row `index` and send the browser back to the page
pub async fn toggle_row(
    Path(index): Path<usize>,
    Query(query): Query<DashboardQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Redirect, DashboardError> {
    let next = state
        .dashboard_service
        .state(query.expanded)?
        .toggle_expand(index)?;

    tracing::debug!(
        "Toggled row {}: {:?} -> {:?}",
        index,
        query.expanded,
        next.expanded()
    );
    Ok(Redirect::to(&dashboard_href(next.expanded())))
}

/// Chart dataset for an external radar widget
pub async fn chart_data(State(state): State<Arc<AppState>>) -> Json<ChartData> {
    Json(state.dashboard_service.chart())
}

/// All sites with their computed overall score
pub async fn list_sites(State(state): State<Arc<AppState>>) -> Json<Vec<SiteView>> {
    let sites = state
        .dashboard_service
        .sites()
        .iter()
        .map(|site| SiteView {
            site: site.clone(),
            overall: site.overall(),
        })
        .collect();
    Json(sites)
}
