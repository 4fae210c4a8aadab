//! Brand Model

use serde::{Deserialize, Serialize};

/// Brand lookup record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub created_at: String,
}
