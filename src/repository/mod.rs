use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::CategoryId;

pub mod category;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category documents.
pub trait CategoryReader {
    /// List every category with its specifications and audit trail.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category documents.
pub trait CategoryWriter {
    /// Persist a new category and return it as stored.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Persist the full state of a previously fetched category.
    ///
    /// Specifications without an id are inserted, missing ones are removed and
    /// audit entries not yet stored are appended. Returns the reloaded
    /// document, or `RepositoryError::NotFound` when the category is gone.
    fn save_category(&self, category: &Category) -> RepositoryResult<Category>;
    /// Delete a category and everything it owns, returning what was removed.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}
