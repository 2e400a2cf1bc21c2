mod handlers;
pub mod models;

use crate::error::{json_config, path_config};
use actix_web::{web, Scope};

pub fn transaction_service() -> Scope {
    web::scope("/transactions")
        .app_data(json_config(handlers::INVALID_DATA))
        .app_data(path_config(handlers::TRANSACTION_NOT_FOUND))
        .service(handlers::get_all_transactions)
        .service(handlers::create_new_transaction)
        .service(handlers::update_transaction)
        .service(handlers::delete_transaction)
}
