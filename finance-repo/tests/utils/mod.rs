use finance_repo::Repos;
use serde::Deserialize;
use std::{env, fs};
use tracing::info;

pub mod generator;

#[derive(Deserialize)]
struct TestConfig {
    database_url: String,
}

#[derive(Debug)]
pub enum RepoType {
    SQLx,
    Mem,
}

fn test_database_url() -> Option<String> {
    if let Ok(url) = env::var("TEST_DATABASE_URL") {
        return Some(url);
    }
    let config = fs::read_to_string("config_test.toml").ok()?;
    let config: TestConfig = toml::from_str(config.as_str()).unwrap();
    Some(config.database_url)
}

/// Builds the repos under test. SQLx cases are skipped (`None`) when no test
/// database is configured.
pub async fn build_repos(repo_type: RepoType) -> Option<Repos> {
    match repo_type {
        RepoType::SQLx => {
            let Some(database_url) = test_database_url() else {
                info!("No test database configured, skipping");
                return None;
            };
            let repos = finance_repo::sqlx_repo::create_repos(&database_url, 1, true)
                .await
                .unwrap();
            Some(repos)
        }
        RepoType::Mem => Some(finance_repo::mem_repo::create_repos()),
    }
}
