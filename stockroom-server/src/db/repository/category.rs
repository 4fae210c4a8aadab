//! Category Repository

use super::RepoResult;
use crate::db::DbService;
use crate::db::models::Category;

#[derive(Clone)]
pub struct CategoryRepository {
    db: DbService,
}

impl CategoryRepository {
    pub fn new(db: DbService) -> Self {
        Self { db }
    }

    /// Find all categories ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, created_at FROM categories ORDER BY name",
        )
        .fetch_all(&self.db.pool)
        .await?;
        Ok(categories)
    }
}
