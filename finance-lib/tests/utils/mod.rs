#![allow(dead_code)]

use anyhow::anyhow;
use async_trait::async_trait;
use finance_repo::transaction_repo::{
    NewTransaction, Transaction, TransactionId, TransactionRepo, TransactionRepoError,
};
use finance_repo::user_repo::{NewUser, User, UserId, UserRepo, UserRepoError};
use finance_repo::Repos;
use rstest::*;
use std::sync::Arc;
use tracing::info;
use tracing::Level;

pub const STORE_FAILURE: &str = "connection reset by peer";

macro_rules! build_app {
    ($repos:expr, $login_policy:expr) => {{
        let app = App::new()
            .wrap(finance_lib::tracing::create_middleware())
            .configure(finance_lib::app_config_func($repos, $login_policy));
        tracing::info!("Built app");
        app
    }};
    ($repos:expr) => {
        build_app!($repos, finance_lib::LoginPolicy::default())
    };
}

#[allow(unused_macros)]
macro_rules! create_user {
    (&$service:ident, $body:expr) => {{
        let request = TestRequest::post()
            .uri("/users")
            .set_json(&$body)
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert_eq!(
            response.status(),
            StatusCode::CREATED,
            "Got {} response when creating user",
            response.status()
        );
        let body: serde_json::Value = test::read_body_json(response).await;
        body["user"].clone()
    }};
}

#[allow(unused_macros)]
macro_rules! create_transaction {
    (&$service:ident, $body:expr) => {{
        let request = TestRequest::post()
            .uri("/transactions")
            .set_json(&$body)
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert_eq!(
            response.status(),
            StatusCode::CREATED,
            "Got {} response when creating transaction",
            response.status()
        );
        let body: serde_json::Value = test::read_body_json(response).await;
        body["transaction"].clone()
    }};
}

#[allow(unused_macros)]
macro_rules! get_json {
    (&$service:ident, $uri:expr) => {{
        let request = TestRequest::get().uri($uri).to_request();
        let response = test::call_service(&$service, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(response).await;
        body
    }};
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[fixture]
pub fn repos(_tracing_setup: &()) -> Repos {
    finance_repo::mem_repo::create_repos()
}

/// Memory repos whose user and transaction stores fail every call.
#[fixture]
pub fn failing_repos(repos: Repos) -> Repos {
    Repos {
        user_repo: Arc::new(FailingUserRepo),
        transaction_repo: Arc::new(FailingTransactionRepo),
        ..repos
    }
}

pub struct FailingUserRepo;

#[async_trait]
impl UserRepo for FailingUserRepo {
    async fn get_all_users(&self) -> Result<Vec<User>, UserRepoError> {
        Err(anyhow!(STORE_FAILURE).into())
    }

    async fn get_user(&self, _user_id: UserId) -> Result<User, UserRepoError> {
        Err(anyhow!(STORE_FAILURE).into())
    }

    async fn get_user_by_username(&self, _username: &str) -> Result<User, UserRepoError> {
        Err(anyhow!(STORE_FAILURE).into())
    }

    async fn create_user(&self, _new_user: NewUser) -> Result<User, UserRepoError> {
        Err(anyhow!(STORE_FAILURE).into())
    }

    async fn update_user(
        &self,
        _user_id: UserId,
        _updated_user: NewUser,
    ) -> Result<User, UserRepoError> {
        Err(anyhow!(STORE_FAILURE).into())
    }

    async fn delete_user(&self, _user_id: UserId) -> Result<(), UserRepoError> {
        Err(anyhow!(STORE_FAILURE).into())
    }
}

pub struct FailingTransactionRepo;

#[async_trait]
impl TransactionRepo for FailingTransactionRepo {
    async fn get_all_transactions(&self) -> Result<Vec<Transaction>, TransactionRepoError> {
        Err(anyhow!(STORE_FAILURE).into())
    }

    async fn get_transaction(
        &self,
        _transaction_id: TransactionId,
    ) -> Result<Transaction, TransactionRepoError> {
        Err(anyhow!(STORE_FAILURE).into())
    }

    async fn create_new_transaction(
        &self,
        _new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        Err(anyhow!(STORE_FAILURE).into())
    }

    async fn update_transaction(
        &self,
        _transaction_id: TransactionId,
        _updated_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        Err(anyhow!(STORE_FAILURE).into())
    }

    async fn delete_transaction(
        &self,
        _transaction_id: TransactionId,
    ) -> Result<Transaction, TransactionRepoError> {
        Err(anyhow!(STORE_FAILURE).into())
    }
}
