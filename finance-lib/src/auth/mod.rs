use crate::error::json_config;
use actix_web::web;

pub mod handlers;

/// How `POST /login` treats the supplied password.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoginPolicy {
    /// When false, any password is accepted for an existing username.
    pub verify_password: bool,
}

impl Default for LoginPolicy {
    fn default() -> Self {
        LoginPolicy {
            verify_password: true,
        }
    }
}

pub fn auth_service(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/login")
            .app_data(json_config(handlers::INVALID_INPUT))
            .route(web::post().to(handlers::login)),
    );
}
