//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, DatabaseSettings, Db},
    domain::{
        categories::{CategoriesService, PgCategoriesService},
        products::{PgProductsService, ProductsService},
        transactions::{PgTransactionsService, TransactionsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migrations(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub categories: Arc<dyn CategoriesService>,
    pub products: Arc<dyn ProductsService>,
    pub transactions: Arc<dyn TransactionsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(
        categories: Arc<dyn CategoriesService>,
        products: Arc<dyn ProductsService>,
        transactions: Arc<dyn TransactionsService>,
    ) -> Self {
        Self {
            categories,
            products,
            transactions,
        }
    }

    /// Wire the Postgres-backed services onto a storage handle.
    #[must_use]
    pub fn from_db(db: &Db) -> Self {
        Self::new(
            Arc::new(PgCategoriesService::new(db.clone())),
            Arc::new(PgProductsService::new(db.clone())),
            Arc::new(PgTransactionsService::new(db.clone())),
        )
    }
}

/// Open the storage handle, applying migrations when configured to.
///
/// # Errors
///
/// Returns an error when establishing a database connection or migrating fails.
pub async fn open_database(settings: &DatabaseSettings) -> Result<Db, AppInitError> {
    let pool = database::connect(&settings.url, settings.max_connections)
        .await
        .map_err(AppInitError::Database)?;

    if settings.run_migrations {
        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        info!("database migrations applied");
    }

    Ok(Db::new(pool))
}
