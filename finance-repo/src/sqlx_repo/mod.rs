mod transaction_repo;
mod user_repo;

use crate::{HealthCheck, Repos};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct SQLxRepo {
    pool: Pool<Postgres>,
}

impl SQLxRepo {
    pub fn new(pool: Pool<Postgres>) -> SQLxRepo {
        SQLxRepo { pool }
    }
}

#[async_trait]
impl HealthCheck for SQLxRepo {
    #[instrument(skip(self))]
    async fn check(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                warn!(%e, "Database health check failed");
                false
            }
        }
    }
}

pub async fn create_repos(
    database_url: &str,
    max_pool_size: u32,
    run_migrations: bool,
) -> Result<Repos, anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_pool_size)
        .connect(database_url)
        .await
        .context("Unable to connect to database")?;
    info!(max_pool_size, "Database pool created");

    if run_migrations {
        info!("Running migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Unable to run migrations")?;
    }

    let repo = Arc::new(SQLxRepo::new(pool));
    Ok(Repos {
        user_repo: repo.clone(),
        transaction_repo: repo.clone(),
        health_check: repo,
    })
}
