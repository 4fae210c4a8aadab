//! Statistics API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::ProductStats;
use crate::utils::AppResponse;

/// GET /api/statistics/products - catalog summary counts
pub async fn product_stats(State(state): State<ServerState>) -> Json<AppResponse<ProductStats>> {
    Json(state.catalog().get_product_stats().await)
}
