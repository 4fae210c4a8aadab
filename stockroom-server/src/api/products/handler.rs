//! Product API Handlers
//!
//! Thin translation between the HTTP surface and [`CatalogService`]; every
//! response is the uniform envelope with HTTP 200, failures included, the
//! way the original backend client reported them.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{
    Product, ProductCreate, ProductFilter, ProductUpdate, SortConfig, SortDirection, StockStatus,
};
use crate::services::CatalogService;
use crate::utils::AppResponse;

/// Query-string shape of the list endpoint: the filter specification plus
/// the sort descriptor
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListQuery {
    pub category: Option<String>,
    pub brand: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub stock_status: Option<StockStatus>,
    pub date_range: Option<i64>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<SortDirection>,
}

impl ListQuery {
    fn into_parts(self) -> (ProductFilter, SortConfig) {
        let filter = ProductFilter {
            category: self.category,
            brand: self.brand,
            status: self.status,
            search: self.search,
            price_min: self.price_min,
            price_max: self.price_max,
            stock_status: self.stock_status,
            date_range: self.date_range,
            date_from: self.date_from,
            date_to: self.date_to,
        };

        let mut sort = SortConfig::default();
        if let Some(column) = self.sort_by {
            sort.column = column;
        }
        if let Some(direction) = self.sort_dir {
            sort.direction = direction;
        }

        (filter, sort)
    }
}

#[derive(Debug, Deserialize)]
pub struct BatchDeleteRequest {
    pub ids: Vec<String>,
}

fn catalog(state: &ServerState) -> CatalogService {
    state.catalog()
}

/// GET /api/products - list products with filters and sorting
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> Json<AppResponse<Vec<Product>>> {
    let (filter, sort) = query.into_parts();
    Json(catalog(&state).list_products(&filter, &sort).await)
}

/// GET /api/products/{id} - fetch one product with its images
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Json<AppResponse<Product>> {
    Json(catalog(&state).get_product(&id).await)
}

/// POST /api/products - create a product
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> Json<AppResponse<Product>> {
    Json(catalog(&state).create_product(payload).await)
}

/// PUT /api/products/{id} - replace a product's fields
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> Json<AppResponse<Product>> {
    Json(catalog(&state).update_product(&id, payload).await)
}

/// DELETE /api/products/{id} - hard delete a product
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Json<AppResponse<()>> {
    Json(catalog(&state).delete_product(&id).await)
}

/// POST /api/products/batch-delete - hard delete a list of products
pub async fn delete_many(
    State(state): State<ServerState>,
    Json(payload): Json<BatchDeleteRequest>,
) -> Json<AppResponse<()>> {
    Json(catalog(&state).delete_products(&payload.ids).await)
}
