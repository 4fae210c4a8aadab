//! Catalog Service - product CRUD, lookups and summary statistics
//!
//! Wraps the repositories into the uniform `{success, data | error}` envelope.
//! Failure policy: errors the database reports (constraint violations,
//! not-found) surface verbatim; connectivity failures are rewritten into a
//! user-facing diagnostic; anything unexpected collapses into a fixed generic
//! message per operation. Nothing ever propagates past this layer.

use crate::core::SessionIdentity;
use crate::db::DbService;
use crate::db::models::{
    Brand, Category, Product, ProductCreate, ProductFilter, ProductStats, ProductUpdate,
    SortConfig,
};
use crate::db::repository::{BrandRepository, CategoryRepository, ProductRepository, RepoError};
use crate::utils::AppResponse;

/// Diagnostic shown instead of raw connectivity errors, so users can tell
/// "service unreachable" apart from "query rejected"
pub const CONNECTIVITY_ERROR: &str = "Cannot connect to database. Your backend project may be \
     paused or deleted. Please check the project status in your provider dashboard.";

fn is_connectivity_error(message: &str) -> bool {
    message.contains("Failed to fetch") || message.contains("NetworkError")
}

/// Collapse a repository error into the envelope's error string
fn failure_message(err: &RepoError, fallback: &str) -> String {
    let message = err.to_string();
    if is_connectivity_error(&message) {
        return CONNECTIVITY_ERROR.to_string();
    }
    match err {
        RepoError::Database(m) | RepoError::NotFound(m) => m.clone(),
        RepoError::Internal(m) => {
            tracing::error!(error = %m, "unexpected catalog failure");
            fallback.to_string()
        }
    }
}

/// Catalog service over an injected database and session identity
#[derive(Clone)]
pub struct CatalogService {
    products: ProductRepository,
    categories: CategoryRepository,
    brands: BrandRepository,
    session: SessionIdentity,
}

impl CatalogService {
    pub fn new(db: DbService, session: SessionIdentity) -> Self {
        Self {
            products: ProductRepository::new(db.clone()),
            categories: CategoryRepository::new(db.clone()),
            brands: BrandRepository::new(db),
            session,
        }
    }

    /// List products matching a filter, normalized, in sort order.
    /// An empty match yields an empty array, never null.
    pub async fn list_products(
        &self,
        filter: &ProductFilter,
        sort: &SortConfig,
    ) -> AppResponse<Vec<Product>> {
        match self.products.find_filtered(filter, sort).await {
            Ok(rows) => {
                AppResponse::success(rows.into_iter().map(Product::from_row).collect())
            }
            Err(e) => AppResponse::error(failure_message(&e, "Failed to load products")),
        }
    }

    /// Fetch a single product by id, with its images collection attached
    pub async fn get_product(&self, id: &str) -> AppResponse<Product> {
        let row = match self.products.find_by_id(id).await {
            Ok(Some(row)) => row,
            Ok(None) => return AppResponse::error(format!("Product {id} not found")),
            Err(e) => return AppResponse::error(failure_message(&e, "Failed to load product")),
        };

        match self.products.find_images(id).await {
            Ok(images) => AppResponse::success(Product::from_row(row).with_images(images)),
            Err(e) => AppResponse::error(failure_message(&e, "Failed to load product")),
        }
    }

    /// Create a product from the allow-listed fields, stamping the current
    /// session identity as creator
    pub async fn create_product(&self, data: ProductCreate) -> AppResponse<Product> {
        let created_by = self.session.current_user_id();
        match self.products.create(data, created_by).await {
            Ok(row) => AppResponse::success(Product::from_row(row)),
            Err(e) => AppResponse::error(failure_message(&e, "Failed to create product")),
        }
    }

    /// Replace a product's allow-listed fields; restamps the last-modified
    /// timestamp
    pub async fn update_product(&self, id: &str, data: ProductUpdate) -> AppResponse<Product> {
        match self.products.update(id, data).await {
            Ok(row) => AppResponse::success(Product::from_row(row)),
            Err(e) => AppResponse::error(failure_message(&e, "Failed to update product")),
        }
    }

    /// Hard delete a single product; a missing id reports a not-found error
    pub async fn delete_product(&self, id: &str) -> AppResponse<()> {
        match self.products.delete(id).await {
            Ok(()) => AppResponse::ok(),
            Err(e) => AppResponse::error(failure_message(&e, "Failed to delete product")),
        }
    }

    /// Hard delete a list of products; ids that match nothing are ignored
    pub async fn delete_products(&self, ids: &[String]) -> AppResponse<()> {
        match self.products.delete_many(ids).await {
            Ok(()) => AppResponse::ok(),
            Err(e) => AppResponse::error(failure_message(&e, "Failed to delete products")),
        }
    }

    /// List all categories ordered by name
    pub async fn list_categories(&self) -> AppResponse<Vec<Category>> {
        match self.categories.find_all().await {
            Ok(categories) => AppResponse::success(categories),
            Err(e) => AppResponse::error(failure_message(&e, "Failed to load categories")),
        }
    }

    /// List all brands ordered by name
    pub async fn list_brands(&self) -> AppResponse<Vec<Brand>> {
        match self.brands.find_all().await {
            Ok(brands) => AppResponse::success(brands),
            Err(e) => AppResponse::error(failure_message(&e, "Failed to load brands")),
        }
    }

    /// Compute the four catalog summary counts. All-or-nothing: if any count
    /// fails the whole operation fails; partial results are never returned.
    pub async fn get_product_stats(&self) -> AppResponse<ProductStats> {
        let total = self.products.count_all().await;
        let active = self.products.count_by_status("active").await;
        let low_stock = self.products.count_low_stock().await;
        let out_of_stock = self.products.count_out_of_stock().await;

        match (total, active, low_stock, out_of_stock) {
            (Ok(total), Ok(active), Ok(low_stock), Ok(out_of_stock)) => {
                AppResponse::success(ProductStats {
                    total,
                    active,
                    low_stock,
                    out_of_stock,
                })
            }
            _ => AppResponse::error("Failed to load statistics"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_failures_are_rewritten() {
        let err = RepoError::Database("TypeError: Failed to fetch".into());
        assert_eq!(
            failure_message(&err, "Failed to load products"),
            CONNECTIVITY_ERROR
        );

        let err = RepoError::Database("NetworkError when attempting to fetch resource".into());
        assert_eq!(
            failure_message(&err, "Failed to load products"),
            CONNECTIVITY_ERROR
        );
    }

    #[test]
    fn database_errors_surface_verbatim() {
        let err = RepoError::Database("NOT NULL constraint failed: products.name".into());
        assert_eq!(
            failure_message(&err, "Failed to create product"),
            "NOT NULL constraint failed: products.name"
        );
    }

    #[test]
    fn unexpected_errors_collapse_to_the_generic_message() {
        let err = RepoError::Internal("row vanished mid-flight".into());
        assert_eq!(
            failure_message(&err, "Failed to load products"),
            "Failed to load products"
        );
    }
}
