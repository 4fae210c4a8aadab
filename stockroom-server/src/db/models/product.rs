//! Product Model

use serde::{Deserialize, Serialize};

/// Raw product row as selected from the database, category/brand/creator
/// display names joined in (NULL when the reference is missing)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub status: String,
    pub image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub category_name: Option<String>,
    pub brand_name: Option<String>,
    pub created_by_name: Option<String>,
}

/// Secondary image row, passed through to callers unmodified
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: i64,
    pub product_id: String,
    pub image_url: String,
    pub is_primary: bool,
}

/// Normalized product record — the flat UI-facing shape
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub status: String,
    /// Category display name; empty string when the join is null
    pub category: String,
    /// Brand display name; empty string when the join is null
    pub brand: String,
    pub image: Option<String>,
    /// Present only on get-one responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,
    pub last_modified: String,
    pub created_by: String,
}

impl Product {
    /// Normalize a raw row: resolve joined names, default missing optional
    /// fields to empty string or numeric zero. Never fails.
    pub fn from_row(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            sku: row.sku.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            price: row.price.unwrap_or(0.0),
            stock: row.stock.unwrap_or(0),
            status: row.status,
            category: row.category_name.unwrap_or_default(),
            brand: row.brand_name.unwrap_or_default(),
            image: row.image_url,
            images: None,
            last_modified: row.updated_at,
            created_by: row.created_by_name.unwrap_or_default(),
        }
    }

    /// Attach the images collection (get-one responses)
    pub fn with_images(mut self, images: Vec<ProductImage>) -> Self {
        self.images = Some(images);
        self
    }
}

/// Create payload — the fixed field allow-list. Unknown input fields are
/// dropped during deserialization; this is intended behavior, not a bug.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub category_id: Option<String>,
    pub brand_id: Option<String>,
    /// Defaults to "active" when absent
    pub status: Option<String>,
    pub image_url: Option<String>,
}

/// Update payload — full replacement of the allow-listed fields. Absent
/// fields overwrite the stored value with NULL; there is no sparse patch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub category_id: Option<String>,
    pub brand_id: Option<String>,
    pub status: Option<String>,
    pub image_url: Option<String>,
}

/// Catalog summary counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total: i64,
    pub active: i64,
    pub low_stock: i64,
    pub out_of_stock: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_row() -> ProductRow {
        ProductRow {
            id: "p1".into(),
            name: "Widget".into(),
            sku: None,
            description: None,
            price: None,
            stock: None,
            status: "draft".into(),
            image_url: None,
            created_at: "2026-01-01T00:00:00+00:00".into(),
            updated_at: "2026-01-02T00:00:00+00:00".into(),
            category_name: None,
            brand_name: None,
            created_by_name: None,
        }
    }

    #[test]
    fn normalization_defaults_missing_fields() {
        let product = Product::from_row(bare_row());
        assert_eq!(product.sku, "");
        assert_eq!(product.description, "");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.stock, 0);
        assert_eq!(product.category, "");
        assert_eq!(product.brand, "");
        assert_eq!(product.created_by, "");
        assert_eq!(product.image, None);
        assert_eq!(product.last_modified, "2026-01-02T00:00:00+00:00");
    }

    #[test]
    fn list_shape_has_no_images_key() {
        let json = serde_json::to_value(Product::from_row(bare_row())).unwrap();
        assert!(json.get("images").is_none());
        assert_eq!(json["lastModified"], "2026-01-02T00:00:00+00:00");
    }

    #[test]
    fn create_payload_drops_unknown_fields() {
        let payload: ProductCreate = serde_json::from_value(serde_json::json!({
            "name": "Widget",
            "price": 9.5,
            "warehouseAisle": "B4"
        }))
        .unwrap();
        assert_eq!(payload.name.as_deref(), Some("Widget"));
        assert_eq!(payload.price, Some(9.5));
    }

    #[test]
    fn stats_serialize_camel_case() {
        let stats = ProductStats {
            total: 4,
            active: 3,
            low_stock: 2,
            out_of_stock: 1,
        };
        assert_eq!(
            serde_json::to_value(stats).unwrap(),
            serde_json::json!({"total": 4, "active": 3, "lowStock": 2, "outOfStock": 1})
        );
    }
}
