//! Dashboard routes: the aggregated overview page.

use axum::{extract::State, Json};

use crate::errors::ApiResponse;
use crate::models::dashboard::DashboardView;
use crate::services::dashboard;
use crate::AppState;

/// GET /api/v1/dashboard/overview — the rendered dashboard overview.
///
/// Never returns an error status: sources that failed to load are
/// reported in `degraded_sources` and their tiles show zero.
pub async fn overview(State(state): State<AppState>) -> Json<ApiResponse<DashboardView>> {
    let snapshot = dashboard::load(&state.db).await;
    ApiResponse::success(DashboardView::render(&snapshot))
}
