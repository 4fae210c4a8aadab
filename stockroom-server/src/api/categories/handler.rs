//! Category API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::Category;
use crate::utils::AppResponse;

/// GET /api/categories - list categories ordered by name
pub async fn list(State(state): State<ServerState>) -> Json<AppResponse<Vec<Category>>> {
    Json(state.catalog().list_categories().await)
}
