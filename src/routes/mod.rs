use actix_web::HttpResponse;

use crate::services::ServiceError;

pub mod categories;
pub mod charms;
pub mod discounts;
pub mod products;

/// Map a service error onto the HTTP response shared by all handlers.
pub(crate) fn error_response(context: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Form(message) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message }))
        }
        err => {
            log::error!("{context}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
