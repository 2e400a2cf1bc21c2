use crate::{HealthCheck, Repos};
use async_trait::async_trait;
use std::sync::Arc;

mod transaction_repo;
mod user_repo;

pub use transaction_repo::MemTransactionRepo;
pub use user_repo::MemUserRepo;

struct MemHealthCheck;

#[async_trait]
impl HealthCheck for MemHealthCheck {
    async fn check(&self) -> bool {
        true
    }
}

pub fn create_repos() -> Repos {
    let transaction_repo = MemTransactionRepo::new();
    let user_repo = MemUserRepo::new();

    Repos {
        user_repo: Arc::new(user_repo),
        transaction_repo: Arc::new(transaction_repo),
        health_check: Arc::new(MemHealthCheck),
    }
}
