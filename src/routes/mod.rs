use actix_web::http::StatusCode;
use actix_web::{HttpResponse, error, web};

use crate::dto::api::ApiFailure;

pub mod api;
pub mod categories;

pub const CATEGORY_NOT_FOUND: &str = "Category not found.";
pub const SPECIFICATION_NOT_FOUND: &str = "Specification not found.";
pub const NOTHING_TO_UPDATE: &str = "Nothing to update.";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Register every category route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(categories::show_categories)
        .service(categories::show_category_form);
    api::configure(cfg);
}

/// JSON failure body with the given status.
pub fn failure(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ApiFailure::new(message))
}

/// Generic 500 response; never carries the underlying error.
pub fn internal_error() -> HttpResponse {
    failure(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}

/// Answer malformed JSON bodies with the API failure shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = failure(StatusCode::BAD_REQUEST, err.to_string());
        error::InternalError::from_response(err, response).into()
    })
}
