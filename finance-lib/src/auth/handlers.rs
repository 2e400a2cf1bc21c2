use crate::auth::LoginPolicy;
use crate::error::HandlerError;
use actix_web::{web, HttpResponse, Responder};
use finance_repo::user_repo::{UserRepo, UserRepoError};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

pub(super) const INVALID_INPUT: &str = "Invalid input";
const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Deserialize, Validate)]
pub struct UserCredentials {
    #[serde(rename = "Username", alias = "username")]
    #[validate(length(min = 1))]
    pub username: String,
    #[serde(rename = "Password", alias = "password")]
    #[validate(length(min = 1))]
    pub password: String,
}

#[instrument(skip(user_repo, policy, credentials), fields(username = %credentials.username))]
pub async fn login(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    policy: web::Data<LoginPolicy>,
    credentials: web::Json<UserCredentials>,
) -> Result<impl Responder, HandlerError> {
    let credentials = credentials.into_inner();
    credentials
        .validate()
        .map_err(|_| HandlerError::InvalidInput(INVALID_INPUT))?;

    let user = user_repo
        .get_user_by_username(&credentials.username)
        .await
        .map_err(|e| match e {
            UserRepoError::UsernameNotFound(_) => HandlerError::Unauthorized(INVALID_CREDENTIALS),
            e => HandlerError::internal("Failed to log in", e),
        })?;

    if policy.verify_password && user.password != credentials.password {
        warn!("Password mismatch");
        return Err(HandlerError::Unauthorized(INVALID_CREDENTIALS));
    }
    info!(user_id = user.id, "Login successful");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Login successful",
        "user": {
            "id": user.id,
            "username": user.username,
            "email": user.email,
        },
    })))
}
