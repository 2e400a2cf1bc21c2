
use actix_web::web;
use actix_web::web::Data;
use finance_repo::Repos;

pub mod auth;
pub mod config;
mod error;
mod health;
pub mod info;
pub mod tracing;
pub mod transaction;
pub mod user;

pub use auth::LoginPolicy;
pub use error::HandlerError;

/// Registers the repos and every route. Shared by the server binary and the
/// integration tests.
pub fn app_config_func(
    repos: Repos,
    login_policy: LoginPolicy,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(Data::new(repos.user_repo))
            .app_data(Data::new(repos.transaction_repo))
            .app_data(Data::new(repos.health_check))
            .app_data(Data::new(login_policy))
            .service(info::info)
            .service(health::health)
            .service(user::user_service())
            .service(transaction::transaction_service());
        auth::auth_service(cfg);
    }
}
