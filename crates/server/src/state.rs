use std::sync::Arc;

use database::db::create_connection;
use sea_orm::{DatabaseConnection, DbErr};

use crate::auth::AuthConfig;

/// Shared application state: one connection pool and the auth configuration
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    pub async fn new() -> Result<Self, DbErr> {
        let db = create_connection().await?;
        Ok(Self {
            db,
            auth: Arc::new(AuthConfig::from_env()),
        })
    }
}
