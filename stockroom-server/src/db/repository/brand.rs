//! Brand Repository

use super::RepoResult;
use crate::db::DbService;
use crate::db::models::Brand;

#[derive(Clone)]
pub struct BrandRepository {
    db: DbService,
}

impl BrandRepository {
    pub fn new(db: DbService) -> Self {
        Self { db }
    }

    /// Find all brands ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<Brand>> {
        let brands =
            sqlx::query_as::<_, Brand>("SELECT id, name, created_at FROM brands ORDER BY name")
                .fetch_all(&self.db.pool)
                .await?;
        Ok(brands)
    }
}
