//! Authentication endpoints

mod login;
mod models;
mod register;
mod session;

pub use login::login;
pub use models::{LoginRequest, LoginResponse, ProfileResponse, UserInfo};
pub use register::register;
pub use session::{logout, me};

use actix_web::web;

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout))
            .route("/me", web::get().to(me)),
    );
}
