use crate::core::Config;
use crate::core::session::SessionIdentity;
use crate::db::DbService;
use crate::services::CatalogService;
use crate::utils::AppResult;

/// Server state shared across handlers
///
/// Holds the configuration, the database service and the session identity.
/// Cloning is cheap; the pool inside [`DbService`] is reference counted.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite database service
    pub db: DbService,
    /// Authenticated identity used to stamp record ownership
    pub session: SessionIdentity,
}

impl ServerState {
    /// Open the database and assemble the state
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(&config.database_path).await?;
        let session = config
            .service_user_id
            .clone()
            .map(SessionIdentity::new)
            .unwrap_or_else(SessionIdentity::anonymous);

        Ok(Self {
            config: config.clone(),
            db,
            session,
        })
    }

    /// Catalog service bound to this state's database and session
    pub fn catalog(&self) -> CatalogService {
        CatalogService::new(self.db.clone(), self.session.clone())
    }
}
