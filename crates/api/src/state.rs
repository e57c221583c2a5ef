//! Shared application state handed to every handler.

use std::sync::Arc;

use fenestra_db::DbPool;

use crate::config::ServerConfig;
use crate::notifications::Mailer;

/// Cloned into each request. Everything inside is cheap to clone: the pool
/// is an `Arc` internally and the rest is wrapped explicitly.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Arc<ServerConfig>,
    /// `None` when SMTP is not configured. Handlers that notify by email
    /// skip the step entirely in that case.
    pub mailer: Option<Arc<Mailer>>,
}

impl AppState {
    pub fn new(pool: DbPool, config: ServerConfig, mailer: Option<Mailer>) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            mailer: mailer.map(Arc::new),
        }
    }
}
