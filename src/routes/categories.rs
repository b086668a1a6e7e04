use actix_web::{HttpResponse, Responder, error, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::models::config::CommonServerConfig;
use pushkind_common::routes::{base_context, render_template};
use tera::Tera;

use crate::repository::DieselRepository;
use crate::services::categories::{
    CategoryFormQuery, CategoryFormView, show_categories as show_categories_service,
    show_category_form as show_category_form_service,
};

#[get("/categories")]
pub async fn show_categories(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<CommonServerConfig>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, error::Error> {
    let categories =
        show_categories_service(repo.get_ref()).map_err(error::ErrorInternalServerError)?;

    let mut context = base_context(
        &flash_messages,
        &user,
        "categories",
        &server_config.auth_service_url,
    );
    context.insert("title", "Categories");
    context.insert("sub_title", "Category List");
    context.insert("categories", &categories);
    Ok(render_template(&tera, "categories/index.html", &context))
}

/// Blank or pre-filled category form, depending on `?source=edit&id=...`.
#[get("/categories/handle")]
pub async fn show_category_form(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    params: web::Query<CategoryFormQuery>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<CommonServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let view = match show_category_form_service(params.into_inner(), repo.get_ref()) {
        Ok(view) => view,
        Err(err) => {
            log::debug!("Category form unavailable: {err}");
            return HttpResponse::NotFound().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        &user,
        "categories",
        &server_config.auth_service_url,
    );
    context.insert("title", "Categories");
    context.insert("sub_title", view.sub_title());
    context.insert("script", "category_handle");
    if let CategoryFormView::Edit(category) = &view {
        context.insert("category", category);
    }
    render_template(&tera, "categories/handle.html", &context)
}
