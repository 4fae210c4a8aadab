//! Stockroom - product-catalog data service
//!
//! A small catalog backend: filtered/sorted product listings, CRUD, lookup
//! tables and summary statistics, served over HTTP with every response
//! wrapped in a uniform `{success, data | error}` envelope.
//!
//! # Module structure
//!
//! ```text
//! stockroom-server/src/
//! ├── core/          # configuration, state, session identity, server
//! ├── api/           # HTTP routes and handlers
//! ├── services/      # CatalogService (envelope layer)
//! ├── db/            # SQLite pool, query builder, models, repositories
//! └── utils/         # envelope, errors, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState, SessionIdentity};
pub use crate::db::DbService;
pub use crate::services::CatalogService;
pub use crate::utils::{AppError, AppResponse, AppResult};

// Re-export logger setup
pub use crate::utils::logger::init_logger_with_file;
