use actix_web::{HttpResponse, web};

use crate::repository::RepositoryError;

pub mod categories;

/// Mount every category endpoint under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(categories::list_categories)
            .service(categories::list_all_categories)
            .service(categories::read_category)
            .service(categories::register_category)
            .service(categories::modify_category)
            .service(categories::remove_category),
    );
}

/// Translate a repository failure into an HTTP response, logging anything
/// that is not the caller's fault.
pub fn repository_error_response(action: &str, err: RepositoryError) -> HttpResponse {
    match err {
        RepositoryError::ValidationError(message) => HttpResponse::BadRequest().body(message),
        RepositoryError::NotFound => HttpResponse::NotFound().finish(),
        err => {
            log::error!("Failed to {action}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
