use crate::error::HandlerError;
use crate::transaction::models::{TransactionFields, TransactionPatch};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use finance_repo::transaction_repo::{TransactionId, TransactionRepo, TransactionRepoError};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

pub(super) const TRANSACTION_NOT_FOUND: &str = "Transaction not found";
pub(super) const INVALID_DATA: &str = "Invalid data";

fn lookup_error(context: &'static str) -> impl FnOnce(TransactionRepoError) -> HandlerError {
    move |e| match e {
        TransactionRepoError::TransactionNotFound(_) => {
            HandlerError::NotFound(TRANSACTION_NOT_FOUND)
        }
        e => HandlerError::internal(context, e),
    }
}

#[get("")]
#[instrument(skip(transaction_repo))]
pub async fn get_all_transactions(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
) -> Result<impl Responder, HandlerError> {
    let transactions = transaction_repo
        .get_all_transactions()
        .await
        .map_err(|e| HandlerError::internal("Failed to fetch transactions", e))?;
    Ok(HttpResponse::Ok().json(json!({ "transactions": transactions })))
}

#[post("")]
#[instrument(skip(transaction_repo, fields))]
pub async fn create_new_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    fields: web::Json<TransactionFields>,
) -> Result<impl Responder, HandlerError> {
    let fields = fields.into_inner();
    fields
        .validate()
        .map_err(|_| HandlerError::InvalidInput(INVALID_DATA))?;

    let transaction = transaction_repo
        .create_new_transaction(fields.into())
        .await
        .map_err(|e| HandlerError::internal("Failed to create transaction", e))?;
    info!(transaction_id = transaction.id, "Created transaction");

    Ok(HttpResponse::Created().json(json!({
        "message": "Transaction created successfully",
        "transaction": transaction,
    })))
}

#[put("/{transaction_id}")]
#[instrument(skip(transaction_repo, body))]
pub async fn update_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    transaction_id: web::Path<TransactionId>,
    body: web::Bytes,
) -> Result<impl Responder, HandlerError> {
    let transaction_id = transaction_id.into_inner();
    let mut transaction = transaction_repo
        .get_transaction(transaction_id)
        .await
        .map_err(lookup_error("Failed to update transaction"))?;

    let patch: TransactionPatch =
        serde_json::from_slice(&body).map_err(|_| HandlerError::InvalidInput(INVALID_DATA))?;
    patch
        .validate()
        .map_err(|_| HandlerError::InvalidInput(INVALID_DATA))?;
    patch.apply(&mut transaction);

    let transaction = transaction_repo
        .update_transaction(transaction_id, transaction.into())
        .await
        .map_err(lookup_error("Failed to update transaction"))?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Transaction updated successfully",
        "transaction": transaction,
    })))
}

#[delete("/{transaction_id}")]
#[instrument(skip(transaction_repo))]
pub async fn delete_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    transaction_id: web::Path<TransactionId>,
) -> Result<impl Responder, HandlerError> {
    let transaction_id = transaction_id.into_inner();
    transaction_repo
        .delete_transaction(transaction_id)
        .await
        .map_err(lookup_error("Failed to delete transaction"))?;
    info!(transaction_id, "Deleted transaction");

    Ok(HttpResponse::Ok().json(json!({ "message": "Transaction deleted successfully" })))
}
