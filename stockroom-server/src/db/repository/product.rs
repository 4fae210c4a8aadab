//! Product Repository
//!
//! Query composition and CRUD for the products table. Filters become
//! conditions on a [`QueryBuilder`]; joined category/brand/creator names ride
//! along on every read so the normalizer never issues a second lookup.

use chrono::Utc;
use uuid::Uuid;

use super::{RepoError, RepoResult};
use crate::db::DbService;
use crate::db::models::{
    ProductCreate, ProductFilter, ProductImage, ProductRow, ProductUpdate, SortConfig, StockStatus,
};
use crate::db::query::QueryBuilder;

/// Base SELECT with the lookup joins used by every product read
const PRODUCT_SELECT: &str = "SELECT p.id, p.name, p.sku, p.description, p.price, p.stock, \
     p.status, p.image_url, p.created_at, p.updated_at, \
     c.name AS category_name, b.name AS brand_name, u.full_name AS created_by_name \
     FROM products p \
     LEFT JOIN categories c ON c.id = p.category_id \
     LEFT JOIN brands b ON b.id = p.brand_id \
     LEFT JOIN user_profiles u ON u.id = p.created_by";

#[derive(Clone)]
pub struct ProductRepository {
    db: DbService,
}

impl ProductRepository {
    pub fn new(db: DbService) -> Self {
        Self { db }
    }

    fn pool(&self) -> &sqlx::SqlitePool {
        &self.db.pool
    }

    /// Find products matching a filter specification, in sort order
    pub async fn find_filtered(
        &self,
        filter: &ProductFilter,
        sort: &SortConfig,
    ) -> RepoResult<Vec<ProductRow>> {
        let qb = filter_conditions(filter);
        let sql = format!(
            "{PRODUCT_SELECT}{}{}",
            qb.where_clause(),
            sort.order_clause()
        );
        let rows = qb
            .apply_bindings_as(sqlx::query_as::<_, ProductRow>(&sql))
            .fetch_all(self.pool())
            .await?;
        Ok(rows)
    }

    /// Find a product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<ProductRow>> {
        let sql = format!("{PRODUCT_SELECT} WHERE p.id = ?");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(row)
    }

    /// Fetch the secondary images of a product, in insertion order
    pub async fn find_images(&self, product_id: &str) -> RepoResult<Vec<ProductImage>> {
        let images = sqlx::query_as::<_, ProductImage>(
            "SELECT id, product_id, image_url, is_primary \
             FROM product_images WHERE product_id = ? ORDER BY id",
        )
        .bind(product_id)
        .fetch_all(self.pool())
        .await?;
        Ok(images)
    }

    /// Insert a new product; the server assigns the id and both timestamps
    pub async fn create(
        &self,
        data: ProductCreate,
        created_by: Option<&str>,
    ) -> RepoResult<ProductRow> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let status = data.status.unwrap_or_else(|| "active".to_string());

        sqlx::query(
            "INSERT INTO products \
             (id, name, sku, description, price, stock, status, category_id, brand_id, \
              image_url, created_by, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&data.name)
        .bind(&data.sku)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.stock)
        .bind(&status)
        .bind(&data.category_id)
        .bind(&data.brand_id)
        .bind(&data.image_url)
        .bind(created_by)
        .bind(&now)
        .bind(&now)
        .execute(self.pool())
        .await?;

        self.find_by_id(&id)
            .await?
            .ok_or_else(|| RepoError::Internal(format!("Product {id} missing after insert")))
    }

    /// Replace the allow-listed fields of a product and restamp updated_at.
    /// Absent fields overwrite the stored value with NULL.
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<ProductRow> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            "UPDATE products SET name = ?, sku = ?, description = ?, price = ?, stock = ?, \
             category_id = ?, brand_id = ?, status = ?, image_url = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&data.name)
        .bind(&data.sku)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.stock)
        .bind(&data.category_id)
        .bind(&data.brand_id)
        .bind(&data.status)
        .bind(&data.image_url)
        .bind(&now)
        .bind(id)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Product {id} not found")));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
    }

    /// Hard delete a product
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Product {id} not found")));
        }
        Ok(())
    }

    /// Hard delete a list of products; ids that match nothing are ignored
    pub async fn delete_many(&self, ids: &[String]) -> RepoResult<()> {
        if ids.is_empty() {
            return Ok(());
        }

        let mut qb = QueryBuilder::new();
        qb.add_in_condition("id", ids);
        let sql = format!("DELETE FROM products{}", qb.where_clause());
        qb.apply_bindings(sqlx::query(&sql))
            .execute(self.pool())
            .await?;
        Ok(())
    }

    pub async fn count_all(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }

    pub async fn count_by_status(&self, status: &str) -> RepoResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE status = ?")
            .bind(status)
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }

    pub async fn count_low_stock(&self) -> RepoResult<i64> {
        let count =
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE stock >= 1 AND stock <= 10")
                .fetch_one(self.pool())
                .await?;
        Ok(count)
    }

    pub async fn count_out_of_stock(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE stock = 0")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }
}

/// Skip `None` and empty-string filter values
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Translate a filter specification into WHERE conditions.
///
/// Predicate order: category, brand, status, search, price bounds, stock
/// bucket, date window. When both the relative window and an explicit
/// from/to pair are supplied, the explicit range takes precedence and the
/// relative window emits nothing.
fn filter_conditions(filter: &ProductFilter) -> QueryBuilder {
    let mut qb = QueryBuilder::new();

    if let Some(category) = non_empty(&filter.category) {
        qb.add_condition("p.category_id = ?")
            .bind_text(category.to_string());
    }

    if let Some(brand) = non_empty(&filter.brand) {
        qb.add_condition("p.brand_id = ?").bind_text(brand.to_string());
    }

    if let Some(status) = non_empty(&filter.status) {
        qb.add_condition("p.status = ?").bind_text(status.to_string());
    }

    if let Some(term) = non_empty(&filter.search) {
        qb.add_search_condition(&["p.name", "p.sku", "p.description"], term);
    }

    if let Some(min) = filter.price_min {
        qb.add_condition("p.price >= ?").bind_f64(min);
    }

    if let Some(max) = filter.price_max {
        qb.add_condition("p.price <= ?").bind_f64(max);
    }

    match filter.stock_status {
        Some(StockStatus::InStock) => {
            qb.add_condition("p.stock > 10");
        }
        Some(StockStatus::LowStock) => {
            qb.add_condition("p.stock >= 1 AND p.stock <= 10");
        }
        Some(StockStatus::OutOfStock) => {
            qb.add_condition("p.stock = 0");
        }
        None => {}
    }

    if let (Some(from), Some(to)) = (non_empty(&filter.date_from), non_empty(&filter.date_to)) {
        qb.add_condition("p.created_at >= ?").bind_text(from.to_string());
        qb.add_condition("p.created_at <= ?").bind_text(to.to_string());
    } else if let Some(days) = filter.date_range {
        let cutoff = (Utc::now() - chrono::Duration::days(days)).to_rfc3339();
        qb.add_condition("p.created_at >= ?").bind_text(cutoff);
    }

    qb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{SortDirection, StockStatus};

    #[test]
    fn empty_filter_emits_no_predicates() {
        let qb = filter_conditions(&ProductFilter::default());
        assert_eq!(qb.where_clause(), "");
    }

    #[test]
    fn empty_string_fields_are_skipped() {
        let filter = ProductFilter {
            category: Some(String::new()),
            search: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter_conditions(&filter).where_clause(), "");
    }

    #[test]
    fn predicates_apply_in_fixed_order() {
        let filter = ProductFilter {
            category: Some("c1".into()),
            brand: Some("b1".into()),
            status: Some("active".into()),
            search: Some("usb".into()),
            price_min: Some(1.0),
            price_max: Some(9.0),
            stock_status: Some(StockStatus::LowStock),
            ..Default::default()
        };
        assert_eq!(
            filter_conditions(&filter).where_clause(),
            " WHERE p.category_id = ? AND p.brand_id = ? AND p.status = ? \
             AND (p.name LIKE ? OR p.sku LIKE ? OR p.description LIKE ?) \
             AND p.price >= ? AND p.price <= ? \
             AND p.stock >= 1 AND p.stock <= 10"
        );
    }

    #[test]
    fn stock_buckets_use_fixed_boundaries() {
        let bucket = |status| ProductFilter {
            stock_status: Some(status),
            ..Default::default()
        };
        assert_eq!(
            filter_conditions(&bucket(StockStatus::InStock)).where_clause(),
            " WHERE p.stock > 10"
        );
        assert_eq!(
            filter_conditions(&bucket(StockStatus::OutOfStock)).where_clause(),
            " WHERE p.stock = 0"
        );
    }

    #[test]
    fn relative_window_emits_single_lower_bound() {
        let filter = ProductFilter {
            date_range: Some(7),
            ..Default::default()
        };
        assert_eq!(
            filter_conditions(&filter).where_clause(),
            " WHERE p.created_at >= ?"
        );
    }

    #[test]
    fn explicit_range_takes_precedence_over_relative_window() {
        let filter = ProductFilter {
            date_range: Some(7),
            date_from: Some("2026-01-01T00:00:00+00:00".into()),
            date_to: Some("2026-02-01T00:00:00+00:00".into()),
            ..Default::default()
        };
        assert_eq!(
            filter_conditions(&filter).where_clause(),
            " WHERE p.created_at >= ? AND p.created_at <= ?"
        );
    }

    #[test]
    fn half_open_explicit_range_falls_back_to_relative_window() {
        let filter = ProductFilter {
            date_range: Some(30),
            date_from: Some("2026-01-01T00:00:00+00:00".into()),
            ..Default::default()
        };
        assert_eq!(
            filter_conditions(&filter).where_clause(),
            " WHERE p.created_at >= ?"
        );
    }

    #[test]
    fn sort_descriptor_appends_after_where() {
        let filter = ProductFilter {
            status: Some("active".into()),
            ..Default::default()
        };
        let qb = filter_conditions(&filter);
        let sort = SortConfig::new("name", SortDirection::Asc);
        assert_eq!(
            format!("{}{}", qb.where_clause(), sort.order_clause()),
            " WHERE p.status = ? ORDER BY p.name ASC"
        );
    }
}
