pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod utils;

pub use errors::AppError;

use actix_web::web;
use sqlx::SqlitePool;
use utils::storage::UploadStore;

/// Shared state plus every route. Used by the server and by the integration tests.
pub fn configure_app(
    pool: SqlitePool,
    uploads: UploadStore,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(pool))
            .app_data(web::Data::new(uploads));
        handlers::configure(cfg);
    }
}
