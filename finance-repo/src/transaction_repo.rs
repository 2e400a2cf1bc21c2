use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::user_repo::UserId;

pub type TransactionId = i32;

#[async_trait]
pub trait TransactionRepo: Sync + Send {
    async fn get_all_transactions(&self) -> Result<Vec<Transaction>, TransactionRepoError>;

    async fn get_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Transaction, TransactionRepoError>;

    async fn create_new_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError>;

    async fn update_transaction(
        &self,
        transaction_id: TransactionId,
        updated_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError>;

    async fn delete_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Transaction, TransactionRepoError>;
}

#[derive(Error, Debug)]
pub enum TransactionRepoError {
    #[error("Transaction with id {0} not found")]
    TransactionNotFound(TransactionId),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A stored transaction. Serialized with the field names clients send, so
/// handlers can return it as is.
#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Transaction {
    #[serde(rename = "TransactionID")]
    pub id: TransactionId,
    #[serde(rename = "UserID")]
    pub user_id: UserId,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Descriptions")]
    pub description: Option<String>,
    #[serde(rename = "Date")]
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub const fn new(
        id: TransactionId,
        user_id: UserId,
        amount: Decimal,
        kind: String,
        category: String,
        description: Option<String>,
        date: DateTime<Utc>,
    ) -> Transaction {
        Transaction {
            id,
            user_id,
            amount,
            kind,
            category,
            description,
            date,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct NewTransaction {
    pub user_id: UserId,
    pub amount: Decimal,
    pub kind: String,
    pub category: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}

impl NewTransaction {
    pub const fn new(
        user_id: UserId,
        amount: Decimal,
        kind: String,
        category: String,
        description: Option<String>,
        date: DateTime<Utc>,
    ) -> NewTransaction {
        NewTransaction {
            user_id,
            amount,
            kind,
            category,
            description,
            date,
        }
    }

    pub fn to_transaction(self, id: TransactionId) -> Transaction {
        Transaction::new(
            id,
            self.user_id,
            self.amount,
            self.kind,
            self.category,
            self.description,
            self.date,
        )
    }
}

impl From<Transaction> for NewTransaction {
    fn from(transaction: Transaction) -> Self {
        NewTransaction::new(
            transaction.user_id,
            transaction.amount,
            transaction.kind,
            transaction.category,
            transaction.description,
            transaction.date,
        )
    }
}
