use chrono::Utc;
use pushkind_common::domain::auth::AuthenticatedUser;
use serde::Deserialize;

use crate::domain::category::{Actor, Category, Specification};
use crate::domain::types::{ActorId, ActorName, CategoryId};
use crate::dto::categories::{CategoryFormDto, CategoryListItemDto};
use crate::forms::categories::{
    AddSpecificationPayload, CategoryIdPayload, CreateCategoryPayload, SpecificationIdPayload,
    UpdateCategoryNamePayload, UpdateSpecificationPayload,
};
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

fn actor_of(user: &AuthenticatedUser) -> ServiceResult<Actor> {
    match (ActorId::new(user.sub.as_str()), ActorName::new(user.name.as_str())) {
        (Ok(id), Ok(name)) => Ok(Actor { id, name }),
        (Err(e), _) | (_, Err(e)) => {
            log::warn!("Rejected user without a usable identity: {e}");
            Err(ServiceError::Unauthorized)
        }
    }
}

fn fetch_category<R>(category_id: CategoryId, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

fn persist_category<R>(category: &Category, repo: &R) -> ServiceResult<Category>
where
    R: CategoryWriter,
{
    repo.save_category(category).map_err(|e| {
        log::error!("Failed to save category {}: {e}", category.id);
        ServiceError::Internal
    })
}

pub fn create_category<R>(
    payload: CreateCategoryPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Category>
where
    R: CategoryWriter,
{
    let actor = actor_of(user)?;

    let category = payload.into_new_category(&actor);
    match repo.create_category(&category) {
        Ok(category) => Ok(category),
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn get_category<R>(payload: CategoryIdPayload, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    fetch_category(payload.category_id, repo)
}

/// Rename a category, rejecting names equal to the current one.
pub fn update_category_name<R>(
    payload: UpdateCategoryNamePayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter,
{
    let actor = actor_of(user)?;
    let mut category = fetch_category(payload.category_id, repo)?;

    if category.name == payload.name {
        return Err(ServiceError::NothingToUpdate);
    }

    category.name = payload.name;
    category.record_update(&actor, Utc::now().naive_utc());

    persist_category(&category, repo)
}

/// Delete a category with its specifications, returning the removed document.
pub fn remove_category<R>(payload: CategoryIdPayload, repo: &R) -> ServiceResult<Category>
where
    R: CategoryWriter,
{
    match repo.delete_category(payload.category_id) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn get_specification<R>(
    payload: SpecificationIdPayload,
    repo: &R,
) -> ServiceResult<Specification>
where
    R: CategoryReader,
{
    let category = fetch_category(payload.category_id, repo)?;

    category
        .specification(payload.spec_id)
        .cloned()
        .ok_or(ServiceError::SpecificationNotFound)
}

/// Append a specification to a category.
///
/// Unlike the other mutations this does not record an `updated` entry.
pub fn add_specification<R>(
    payload: AddSpecificationPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter,
{
    actor_of(user)?;
    let mut category = fetch_category(payload.category_id, repo)?;

    category
        .specs
        .push(Specification::pending(payload.name, payload.options));

    persist_category(&category, repo)
}

/// Overwrite a specification's name and options.
///
/// Options are compared by value and order; an identical pair is rejected.
pub fn update_specification<R>(
    payload: UpdateSpecificationPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter,
{
    let actor = actor_of(user)?;
    let mut category = fetch_category(payload.category_id, repo)?;

    let index = category
        .specification_index(payload.spec_id)
        .ok_or(ServiceError::SpecificationNotFound)?;

    let spec = &mut category.specs[index];
    if spec.has_contents(&payload.name, &payload.options) {
        return Err(ServiceError::NothingToUpdate);
    }
    spec.name = payload.name;
    spec.options = payload.options;

    category.record_update(&actor, Utc::now().naive_utc());

    persist_category(&category, repo)
}

pub fn remove_specification<R>(
    payload: SpecificationIdPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter,
{
    let actor = actor_of(user)?;
    let mut category = fetch_category(payload.category_id, repo)?;

    let index = category
        .specification_index(payload.spec_id)
        .ok_or(ServiceError::SpecificationNotFound)?;

    category.specs.remove(index);
    category.record_update(&actor, Utc::now().naive_utc());

    persist_category(&category, repo)
}

/// Rows of the category list page.
pub fn show_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryListItemDto>>
where
    R: CategoryReader,
{
    let categories = list_categories(repo)?;
    Ok(categories
        .into_iter()
        .map(CategoryListItemDto::from)
        .collect())
}

/// Query parameters accepted by the category form page.
#[derive(Deserialize, Debug, Default)]
pub struct CategoryFormQuery {
    pub source: Option<String>,
    pub id: Option<String>,
}

/// Which variant of the category form to render.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryFormView {
    New,
    Edit(CategoryFormDto),
}

impl CategoryFormView {
    pub fn sub_title(&self) -> &'static str {
        match self {
            CategoryFormView::New => "New Category",
            CategoryFormView::Edit(_) => "Edit Category",
        }
    }
}

/// Resolve the form page: a blank form, or an existing category for editing.
///
/// An edit request for an unknown or unparsable id yields
/// [`ServiceError::NotFound`].
pub fn show_category_form<R>(query: CategoryFormQuery, repo: &R) -> ServiceResult<CategoryFormView>
where
    R: CategoryReader,
{
    if query.source.as_deref() != Some("edit") {
        return Ok(CategoryFormView::New);
    }

    let category_id = query
        .id
        .as_deref()
        .and_then(|id| CategoryId::parse(id).ok())
        .ok_or(ServiceError::NotFound)?;

    let category = fetch_category(category_id, repo)?;
    Ok(CategoryFormView::Edit(CategoryFormDto::from(category)))
}
