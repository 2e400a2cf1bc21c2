mod handlers;
pub mod models;

use crate::error::{json_config, path_config};
use actix_web::{web, Scope};

pub fn user_service() -> Scope {
    web::scope("/users")
        .app_data(json_config(handlers::INVALID_DATA))
        .app_data(path_config(handlers::USER_NOT_FOUND))
        .service(handlers::get_all_users)
        .service(handlers::create_user)
        .service(handlers::update_user)
        .service(handlers::delete_user)
}
