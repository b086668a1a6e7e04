//! JSON endpoints of the category API.
//!
//! Status codes follow the established contract of each endpoint, which is
//! not uniform: a missing specification is 400 on lookup but 404 on update
//! and removal, and a missing category is 404 only on removal.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use pushkind_common::domain::auth::AuthenticatedUser;

use crate::dto::api::{ApiSuccess, CategoriesBody, CategoryBody, SpecificationBody};
use crate::forms::categories::{
    AddSpecificationForm, AddSpecificationPayload, CategoryIdForm, CategoryIdPayload,
    CreateCategoryForm, CreateCategoryPayload, SpecificationIdForm, SpecificationIdPayload,
    UpdateCategoryNameForm, UpdateCategoryNamePayload, UpdateSpecificationForm,
    UpdateSpecificationPayload,
};
use crate::repository::DieselRepository;
use crate::routes::{
    CATEGORY_NOT_FOUND, NOTHING_TO_UPDATE, SPECIFICATION_NOT_FOUND, failure, internal_error,
};
use crate::services::ServiceError;
use crate::services::categories::{
    add_specification as add_specification_service, create_category as create_category_service,
    get_category as get_category_service, get_specification as get_specification_service,
    list_categories as list_categories_service, remove_category as remove_category_service,
    remove_specification as remove_specification_service,
    update_category_name as update_category_name_service,
    update_specification as update_specification_service,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_category)
        .service(list_categories)
        .service(get_category)
        .service(update_category_name)
        .service(remove_category)
        .service(get_specification)
        .service(add_specification)
        .service(update_specification)
        .service(remove_specification);
}

/// Responses shared by every endpoint for errors without a per-endpoint status.
fn common_failure(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => failure(StatusCode::UNAUTHORIZED, "Unauthorized"),
        ServiceError::Form(message) => failure(StatusCode::BAD_REQUEST, message),
        ServiceError::NothingToUpdate => failure(StatusCode::BAD_REQUEST, NOTHING_TO_UPDATE),
        err => {
            log::error!("Failed to {action}: {err}");
            internal_error()
        }
    }
}

#[post("/api/categories")]
pub async fn create_category(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateCategoryForm>,
) -> impl Responder {
    let payload: CreateCategoryPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return common_failure(ServiceError::from(e), "create category"),
    };

    match create_category_service(payload, &user, repo.get_ref()) {
        Ok(category) => HttpResponse::Created().json(
            ApiSuccess::new(CategoryBody { category })
                .titled("Created!", Some("Category created successfully.")),
        ),
        Err(err) => common_failure(err, "create category"),
    }
}

#[get("/api/categories")]
pub async fn list_categories(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_categories_service(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(ApiSuccess::new(CategoriesBody { categories })),
        Err(err) => common_failure(err, "list categories"),
    }
}

#[post("/api/categories/find")]
pub async fn get_category(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryIdForm>,
) -> impl Responder {
    let payload: CategoryIdPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return common_failure(ServiceError::from(e), "get category"),
    };

    match get_category_service(payload, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(ApiSuccess::new(CategoryBody { category })),
        Err(ServiceError::NotFound) => failure(StatusCode::BAD_REQUEST, CATEGORY_NOT_FOUND),
        Err(err) => common_failure(err, "get category"),
    }
}

#[put("/api/categories/name")]
pub async fn update_category_name(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateCategoryNameForm>,
) -> impl Responder {
    let payload: UpdateCategoryNamePayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return common_failure(ServiceError::from(e), "update category name"),
    };

    match update_category_name_service(payload, &user, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(
            ApiSuccess::new(CategoryBody { category })
                .titled("Updated!", Some("Category's name updated successfully.")),
        ),
        Err(ServiceError::NotFound) => failure(StatusCode::BAD_REQUEST, CATEGORY_NOT_FOUND),
        Err(err) => common_failure(err, "update category name"),
    }
}

#[delete("/api/categories")]
pub async fn remove_category(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryIdForm>,
) -> impl Responder {
    let payload: CategoryIdPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return common_failure(ServiceError::from(e), "remove category"),
    };

    match remove_category_service(payload, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok()
            .json(ApiSuccess::new(CategoryBody { category }).titled("Deleted!", None)),
        Err(ServiceError::NotFound) => failure(StatusCode::NOT_FOUND, CATEGORY_NOT_FOUND),
        Err(err) => common_failure(err, "remove category"),
    }
}

#[post("/api/categories/specs/find")]
pub async fn get_specification(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<SpecificationIdForm>,
) -> impl Responder {
    let payload: SpecificationIdPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return common_failure(ServiceError::from(e), "get specification"),
    };

    match get_specification_service(payload, repo.get_ref()) {
        Ok(spec) => HttpResponse::Ok().json(ApiSuccess::new(SpecificationBody { spec })),
        Err(ServiceError::NotFound) => failure(StatusCode::BAD_REQUEST, CATEGORY_NOT_FOUND),
        Err(ServiceError::SpecificationNotFound) => {
            failure(StatusCode::BAD_REQUEST, SPECIFICATION_NOT_FOUND)
        }
        Err(err) => common_failure(err, "get specification"),
    }
}

#[post("/api/categories/specs")]
pub async fn add_specification(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddSpecificationForm>,
) -> impl Responder {
    let payload: AddSpecificationPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return common_failure(ServiceError::from(e), "add specification"),
    };

    match add_specification_service(payload, &user, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(
            ApiSuccess::new(CategoryBody { category })
                .titled("Added!", Some("Specification added successfully.")),
        ),
        Err(ServiceError::NotFound) => failure(StatusCode::BAD_REQUEST, CATEGORY_NOT_FOUND),
        Err(err) => common_failure(err, "add specification"),
    }
}

#[put("/api/categories/specs")]
pub async fn update_specification(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateSpecificationForm>,
) -> impl Responder {
    let payload: UpdateSpecificationPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return common_failure(ServiceError::from(e), "update specification"),
    };

    match update_specification_service(payload, &user, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(
            ApiSuccess::new(CategoryBody { category })
                .titled("Updated!", Some("Specification updated successfully.")),
        ),
        Err(ServiceError::NotFound) => failure(StatusCode::BAD_REQUEST, CATEGORY_NOT_FOUND),
        Err(ServiceError::SpecificationNotFound) => {
            failure(StatusCode::NOT_FOUND, SPECIFICATION_NOT_FOUND)
        }
        Err(err) => common_failure(err, "update specification"),
    }
}

#[delete("/api/categories/specs")]
pub async fn remove_specification(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<SpecificationIdForm>,
) -> impl Responder {
    let payload: SpecificationIdPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return common_failure(ServiceError::from(e), "remove specification"),
    };

    match remove_specification_service(payload, &user, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(
            ApiSuccess::new(CategoryBody { category })
                .titled("Deleted!", Some("Specification deleted successfully.")),
        ),
        Err(ServiceError::NotFound) => failure(StatusCode::BAD_REQUEST, CATEGORY_NOT_FOUND),
        Err(ServiceError::SpecificationNotFound) => {
            failure(StatusCode::NOT_FOUND, SPECIFICATION_NOT_FOUND)
        }
        Err(err) => common_failure(err, "remove specification"),
    }
}
