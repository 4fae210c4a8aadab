//! Filter specification and sort descriptor

use serde::Deserialize;

/// Stock-status bucket — fixed policy, not configurable per catalog:
/// out-of-stock = 0, low-stock = 1..=10, in-stock = 11+
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

/// Optional predicates narrowing a product listing
///
/// `None` and empty-string fields emit no predicate; callers cannot
/// distinguish "filter by empty string" from "no filter".
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Category id (equality)
    pub category: Option<String>,
    /// Brand id (equality)
    pub brand: Option<String>,
    /// Status (equality)
    pub status: Option<String>,
    /// Free-text term matched against name, sku and description
    pub search: Option<String>,
    /// Inclusive price lower bound
    pub price_min: Option<f64>,
    /// Inclusive price upper bound
    pub price_max: Option<f64>,
    /// Stock-status bucket
    pub stock_status: Option<StockStatus>,
    /// Relative window: created within the last N days
    pub date_range: Option<i64>,
    /// Explicit window start (RFC 3339); takes precedence over `date_range`
    /// when both ends are supplied
    pub date_from: Option<String>,
    /// Explicit window end (RFC 3339)
    pub date_to: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Single (column, direction) sort descriptor; no multi-key sort
#[derive(Debug, Clone)]
pub struct SortConfig {
    pub column: String,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            column: "created_at".to_string(),
            direction: SortDirection::Desc,
        }
    }
}

impl SortConfig {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    /// Map the requested column onto the joined SELECT; unknown columns fall
    /// back to the creation timestamp rather than reaching the SQL text.
    pub fn sort_column(&self) -> &'static str {
        match self.column.as_str() {
            "name" => "p.name",
            "sku" => "p.sku",
            "price" => "p.price",
            "stock" => "p.stock",
            "status" => "p.status",
            "updated_at" | "lastModified" => "p.updated_at",
            _ => "p.created_at",
        }
    }

    /// Render the ORDER BY clause
    pub fn order_clause(&self) -> String {
        format!(" ORDER BY {} {}", self.sort_column(), self.direction.as_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sort_is_created_at_desc() {
        assert_eq!(SortConfig::default().order_clause(), " ORDER BY p.created_at DESC");
    }

    #[test]
    fn known_columns_map_onto_the_join_alias() {
        let sort = SortConfig::new("price", SortDirection::Asc);
        assert_eq!(sort.order_clause(), " ORDER BY p.price ASC");
    }

    #[test]
    fn unknown_column_falls_back_to_created_at() {
        let sort = SortConfig::new("category; DROP TABLE products", SortDirection::Asc);
        assert_eq!(sort.order_clause(), " ORDER BY p.created_at ASC");
    }

    #[test]
    fn stock_status_parses_snake_case() {
        let status: StockStatus = serde_json::from_str("\"low_stock\"").unwrap();
        assert_eq!(status, StockStatus::LowStock);
    }
}
