//! Brand API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::Brand;
use crate::utils::AppResponse;

/// GET /api/brands - list brands ordered by name
pub async fn list(State(state): State<ServerState>) -> Json<AppResponse<Vec<Brand>>> {
    Json(state.catalog().list_brands().await)
}
