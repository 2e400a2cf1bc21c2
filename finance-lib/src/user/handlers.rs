use crate::error::HandlerError;
use crate::user::models::{UserFields, UserPatch, UserResponse};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use finance_repo::user_repo::{UserId, UserRepo, UserRepoError};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

pub(super) const USER_NOT_FOUND: &str = "User not found";
pub(super) const INVALID_DATA: &str = "Invalid data";

fn lookup_error(context: &'static str) -> impl FnOnce(UserRepoError) -> HandlerError {
    move |e| match e {
        UserRepoError::UserNotFound(_) => HandlerError::NotFound(USER_NOT_FOUND),
        e => HandlerError::internal(context, e),
    }
}

#[get("")]
#[instrument(skip(user_repo))]
pub async fn get_all_users(
    user_repo: web::Data<Arc<dyn UserRepo>>,
) -> Result<impl Responder, HandlerError> {
    let users: Vec<UserResponse> = user_repo
        .get_all_users()
        .await
        .map_err(|e| HandlerError::internal("Failed to fetch users", e))?
        .into_iter()
        .map(UserResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(json!({ "users": users })))
}

#[post("")]
#[instrument(skip(user_repo, fields))]
pub async fn create_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    fields: web::Json<UserFields>,
) -> Result<impl Responder, HandlerError> {
    let fields = fields.into_inner();
    fields
        .validate()
        .map_err(|_| HandlerError::InvalidInput(INVALID_DATA))?;

    let user = user_repo
        .create_user(fields.into())
        .await
        .map_err(|e| HandlerError::internal("Failed to create user", e))?;
    info!(user_id = user.id, "Created user");

    Ok(HttpResponse::Created().json(json!({
        "message": "User created successfully",
        "user": UserResponse::from(user),
    })))
}

/// The record is looked up before the body is read, so an unknown id wins over
/// a malformed body.
#[put("/{user_id}")]
#[instrument(skip(user_repo, body))]
pub async fn update_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    user_id: web::Path<UserId>,
    body: web::Bytes,
) -> Result<impl Responder, HandlerError> {
    let user_id = user_id.into_inner();
    let mut user = user_repo
        .get_user(user_id)
        .await
        .map_err(lookup_error("Failed to update user"))?;

    let patch: UserPatch =
        serde_json::from_slice(&body).map_err(|_| HandlerError::InvalidInput(INVALID_DATA))?;
    patch
        .validate()
        .map_err(|_| HandlerError::InvalidInput(INVALID_DATA))?;
    patch.apply(&mut user);

    let user = user_repo
        .update_user(user_id, user.into())
        .await
        .map_err(lookup_error("Failed to update user"))?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "User updated successfully",
        "user": UserResponse::from(user),
    })))
}

#[delete("/{user_id}")]
#[instrument(skip(user_repo))]
pub async fn delete_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    user_id: web::Path<UserId>,
) -> Result<impl Responder, HandlerError> {
    let user_id = user_id.into_inner();
    user_repo
        .get_user(user_id)
        .await
        .map_err(lookup_error("Failed to delete user"))?;
    user_repo
        .delete_user(user_id)
        .await
        .map_err(lookup_error("Failed to delete user"))?;
    info!(user_id, "Deleted user");

    Ok(HttpResponse::Ok().json(json!({ "message": "User deleted successfully" })))
}
