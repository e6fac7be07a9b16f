//! Investor dashboard routes.

use axum::{
    Json, Router,
    extract::{Query, State, WebSocketUpgrade},
    response::Response,
    routing::get,
};
use tracing::info;
use venturehub_core::dashboard::{
    DashboardView, InvestorChart, InvestorPage, InvestorSnapshot, InvestorView,
};

use super::DashboardQuery;
use crate::error::ApiResult;
use crate::{AppState, live};

/// Creates the investor routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/investor/dashboard", get(get_dashboard))
        .route("/investor/snapshot", get(get_snapshot))
        .route("/investor/live", get(live_dashboard))
}

async fn investor_view(state: &AppState) -> ApiResult<InvestorView> {
    let snapshot = state.provider.investor_snapshot().await?;
    Ok(InvestorView::new(snapshot)?)
}

/// Investor page.
async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<Json<InvestorPage>> {
    let theme = query.theme(&state.dashboard)?;
    let chart: InvestorChart = query.chart()?;
    let view = investor_view(&state).await?;
    Ok(Json(view.render(chart, theme)))
}

/// Raw investor snapshot, meetings included.
async fn get_snapshot(State(state): State<AppState>) -> ApiResult<Json<InvestorSnapshot>> {
    Ok(Json(state.provider.investor_snapshot().await?))
}

/// Upgrades to a live investor session.
async fn live_dashboard(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<Response> {
    let theme = query.theme(&state.dashboard)?;
    let view = investor_view(&state).await?;
    let period = state.dashboard.investor_rotation();
    info!(%theme, "investor live session requested");
    Ok(ws.on_upgrade(move |socket| live::run(socket, view, theme, period)))
}
