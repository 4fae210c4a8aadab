//! Query builder for constructing SQL with dynamic WHERE conditions
//!
//! Conditions and bindings are collected independently; callers push one
//! condition per filter predicate, then render the clause and replay the
//! bindings onto a sqlx query.

use sqlx::query::{Query, QueryAs};
use sqlx::{Database, Sqlite};

pub struct QueryBuilder {
    conditions: Vec<String>,
    bindings: Vec<QueryValue>,
}

#[derive(Debug, Clone)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
            bindings: Vec::new(),
        }
    }

    /// Add a condition; placeholders must be matched by bind_* calls
    pub fn add_condition(&mut self, condition: &str) -> &mut Self {
        self.conditions.push(condition.to_string());
        self
    }

    pub fn bind_text(&mut self, value: String) -> &mut Self {
        self.bindings.push(QueryValue::Text(value));
        self
    }

    pub fn bind_i64(&mut self, value: i64) -> &mut Self {
        self.bindings.push(QueryValue::Integer(value));
        self
    }

    pub fn bind_f64(&mut self, value: f64) -> &mut Self {
        self.bindings.push(QueryValue::Float(value));
        self
    }

    /// Add a case-insensitive LIKE search across multiple columns
    pub fn add_search_condition(&mut self, fields: &[&str], search: &str) -> &mut Self {
        let field_conditions: Vec<String> = fields
            .iter()
            .map(|field| format!("{} LIKE ?", field))
            .collect();

        self.conditions
            .push(format!("({})", field_conditions.join(" OR ")));

        let search_pattern = format!("%{}%", search);
        for _ in fields {
            self.bindings.push(QueryValue::Text(search_pattern.clone()));
        }

        self
    }

    /// Add an IN condition over a list of values
    pub fn add_in_condition(&mut self, field: &str, values: &[String]) -> &mut Self {
        let placeholders: Vec<&str> = values.iter().map(|_| "?").collect();
        self.conditions
            .push(format!("{} IN ({})", field, placeholders.join(", ")));

        for val in values {
            self.bindings.push(QueryValue::Text(val.clone()));
        }

        self
    }

    /// Render the WHERE clause (empty string when no conditions were added)
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    /// Replay the collected bindings onto a sqlx query
    pub fn apply_bindings<'a, 'b>(
        &'b self,
        mut query: Query<'a, Sqlite, <Sqlite as Database>::Arguments<'a>>,
    ) -> Query<'a, Sqlite, <Sqlite as Database>::Arguments<'a>>
    where
        'b: 'a,
    {
        for binding in &self.bindings {
            query = match binding {
                QueryValue::Text(s) => query.bind(s),
                QueryValue::Integer(i) => query.bind(*i),
                QueryValue::Float(f) => query.bind(*f),
            };
        }
        query
    }

    /// Replay the collected bindings onto a sqlx query_as
    pub fn apply_bindings_as<'a, 'b, O>(
        &'b self,
        mut query: QueryAs<'a, Sqlite, O, <Sqlite as Database>::Arguments<'a>>,
    ) -> QueryAs<'a, Sqlite, O, <Sqlite as Database>::Arguments<'a>>
    where
        'b: 'a,
    {
        for binding in &self.bindings {
            query = match binding {
                QueryValue::Text(s) => query.bind(s),
                QueryValue::Integer(i) => query.bind(*i),
                QueryValue::Float(f) => query.bind(*f),
            };
        }
        query
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_where_clause() {
        let builder = QueryBuilder::new();
        assert_eq!(builder.where_clause(), "");
    }

    #[test]
    fn single_condition() {
        let mut builder = QueryBuilder::new();
        builder
            .add_condition("status = ?")
            .bind_text("active".to_string());
        assert_eq!(builder.where_clause(), " WHERE status = ?");
    }

    #[test]
    fn multiple_conditions_join_with_and() {
        let mut builder = QueryBuilder::new();
        builder
            .add_condition("status = ?")
            .bind_text("active".to_string())
            .add_condition("price >= ?")
            .bind_f64(10.0)
            .add_condition("stock <= ?")
            .bind_i64(10);
        assert_eq!(
            builder.where_clause(),
            " WHERE status = ? AND price >= ? AND stock <= ?"
        );
    }

    #[test]
    fn search_condition_spans_fields() {
        let mut builder = QueryBuilder::new();
        builder.add_search_condition(&["name", "sku", "description"], "usb");
        assert_eq!(
            builder.where_clause(),
            " WHERE (name LIKE ? OR sku LIKE ? OR description LIKE ?)"
        );
    }

    #[test]
    fn in_condition() {
        let mut builder = QueryBuilder::new();
        builder.add_in_condition("id", &["a".to_string(), "b".to_string()]);
        assert_eq!(builder.where_clause(), " WHERE id IN (?, ?)");
    }
}
