//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. Every member is cheap to
//! clone: the database handle is a pool and the rest sit behind `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, service::mail::Mailer, service::token::TokenService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Configuration read at startup.
    pub config: Arc<Config>,

    /// Signs and verifies access tokens.
    pub tokens: TokenService,

    /// Delivers OTP and account mails.
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    /// Creates the application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool with migrations applied
    /// - `config` - Application configuration
    /// - `mailer` - Outgoing mail implementation
    ///
    /// # Returns
    /// - `AppState` - State with a token service keyed by `config.secret_key`
    pub fn new(db: DatabaseConnection, config: Config, mailer: Arc<dyn Mailer>) -> Self {
        let tokens = TokenService::new(&config.secret_key, config.token_ttl_days);

        Self {
            db,
            config: Arc::new(config),
            tokens,
            mailer,
        }
    }
}
