//! Core module: server configuration, state and session identity
//!
//! - [`Config`] - environment-driven configuration
//! - [`ServerState`] - shared handler state
//! - [`Server`] - HTTP server
//! - [`SessionIdentity`] - read-only current-user accessor

pub mod config;
pub mod server;
pub mod session;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use session::SessionIdentity;
pub use state::ServerState;
