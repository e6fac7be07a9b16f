//! Founder dashboard routes.

use axum::{
    Json, Router,
    extract::{Query, State, WebSocketUpgrade},
    response::Response,
    routing::get,
};
use serde::Deserialize;
use tracing::info;
use venturehub_core::dashboard::{
    DashboardView, FounderChart, FounderPage, FounderView, TeamMember,
};

use super::DashboardQuery;
use crate::error::ApiResult;
use crate::{AppState, live};

/// Creates the founder routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/founder/dashboard",
            get(get_dashboard).post(post_dashboard),
        )
        .route("/founder/live", get(live_dashboard))
}

/// Caller-supplied roster.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterRequest {
    /// Team members; `null` or missing means no roster.
    #[serde(default)]
    pub team_members: Option<Vec<TeamMember>>,
}

async fn founder_view(state: &AppState, roster: Option<Vec<TeamMember>>) -> ApiResult<FounderView> {
    let snapshot = state.provider.founder_snapshot().await?;
    Ok(FounderView::new(snapshot, roster, state.avatars())?)
}

/// Founder page with the provider's roster.
async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<Json<FounderPage>> {
    let theme = query.theme(&state.dashboard)?;
    let chart: FounderChart = query.chart()?;
    let roster = state.provider.team_roster().await?;
    let view = founder_view(&state, roster).await?;
    Ok(Json(view.render(chart, theme)))
}

/// Founder page with the roster from the request body.
async fn post_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
    Json(body): Json<RosterRequest>,
) -> ApiResult<Json<FounderPage>> {
    let theme = query.theme(&state.dashboard)?;
    let chart: FounderChart = query.chart()?;
    let view = founder_view(&state, body.team_members).await?;
    Ok(Json(view.render(chart, theme)))
}

/// Upgrades to a live founder session.
async fn live_dashboard(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<Response> {
    let theme = query.theme(&state.dashboard)?;
    let roster = state.provider.team_roster().await?;
    let view = founder_view(&state, roster).await?;
    let period = state.dashboard.founder_rotation();
    info!(%theme, "founder live session requested");
    Ok(ws.on_upgrade(move |socket| live::run(socket, view, theme, period)))
}
