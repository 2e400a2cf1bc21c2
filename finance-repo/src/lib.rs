use async_trait::async_trait;
use std::sync::Arc;

pub mod transaction_repo;
pub mod user_repo;

// implementation modules
pub mod mem_repo;
pub mod sqlx_repo;

use transaction_repo::TransactionRepo;
use user_repo::UserRepo;

#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn check(&self) -> bool;
}

/// Handles to one backing store, shared by every worker of the HTTP server.
#[derive(Clone)]
pub struct Repos {
    pub user_repo: Arc<dyn UserRepo>,
    pub transaction_repo: Arc<dyn TransactionRepo>,
    pub health_check: Arc<dyn HealthCheck>,
}
