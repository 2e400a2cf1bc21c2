use crate::sqlx_repo::SQLxRepo;
use crate::transaction_repo::TransactionRepoError::TransactionNotFound;
use crate::transaction_repo::{
    NewTransaction, Transaction, TransactionId, TransactionRepo, TransactionRepoError,
};
use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::query_as;
use tracing::instrument;

const COLUMNS: &str = "id, user_id, amount, transaction_type, category, description, date";

#[derive(sqlx::FromRow)]
struct TransactionEntry {
    id: i32,
    user_id: i32,
    amount: Decimal,
    transaction_type: String,
    category: String,
    description: Option<String>,
    date: DateTime<Utc>,
}

impl From<TransactionEntry> for Transaction {
    fn from(value: TransactionEntry) -> Self {
        Transaction::new(
            value.id,
            value.user_id,
            value.amount,
            value.transaction_type,
            value.category,
            value.description,
            value.date,
        )
    }
}

#[async_trait]
impl TransactionRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_all_transactions(&self) -> Result<Vec<Transaction>, TransactionRepoError> {
        let sql = format!("SELECT {} FROM transactions ORDER BY id", COLUMNS);
        let transactions = query_as::<_, TransactionEntry>(&sql)
            .fetch_all(&self.pool)
            .await
            .context("Unable to get transactions")?
            .into_iter()
            .map(|transaction_entry| transaction_entry.into())
            .collect();
        Ok(transactions)
    }

    #[instrument(skip(self))]
    async fn get_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Transaction, TransactionRepoError> {
        let sql = format!("SELECT {} FROM transactions WHERE id = $1", COLUMNS);
        let transaction_entry: Option<TransactionEntry> = query_as(&sql)
            .bind(transaction_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to get transaction {}", transaction_id))?;
        transaction_entry
            .map(|t| t.into())
            .ok_or(TransactionNotFound(transaction_id))
    }

    #[instrument(skip(self, new_transaction))]
    async fn create_new_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let sql = format!(
            "INSERT INTO transactions(user_id, amount, transaction_type, category, description, date) VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            COLUMNS
        );
        let transaction_entry: TransactionEntry = query_as(&sql)
            .bind(new_transaction.user_id)
            .bind(new_transaction.amount)
            .bind(&new_transaction.kind)
            .bind(&new_transaction.category)
            .bind(&new_transaction.description)
            .bind(new_transaction.date)
            .fetch_one(&self.pool)
            .await
            .context("Unable to insert transaction")?;
        Ok(transaction_entry.into())
    }

    #[instrument(skip(self, updated_transaction))]
    async fn update_transaction(
        &self,
        transaction_id: TransactionId,
        updated_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let sql = format!(
            "UPDATE transactions SET user_id = $1, amount = $2, transaction_type = $3, category = $4, description = $5, date = $6 WHERE id = $7 RETURNING {}",
            COLUMNS
        );
        let transaction_entry: Option<TransactionEntry> = query_as(&sql)
            .bind(updated_transaction.user_id)
            .bind(updated_transaction.amount)
            .bind(&updated_transaction.kind)
            .bind(&updated_transaction.category)
            .bind(&updated_transaction.description)
            .bind(updated_transaction.date)
            .bind(transaction_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to update transaction {}", transaction_id))?;
        transaction_entry
            .map(|t| t.into())
            .ok_or(TransactionNotFound(transaction_id))
    }

    #[instrument(skip(self))]
    async fn delete_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Transaction, TransactionRepoError> {
        let sql = format!("DELETE FROM transactions WHERE id = $1 RETURNING {}", COLUMNS);
        let transaction_entry: Option<TransactionEntry> = query_as(&sql)
            .bind(transaction_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to delete transaction {}", transaction_id))?;
        transaction_entry
            .map(|t| t.into())
            .ok_or(TransactionNotFound(transaction_id))
    }
}
