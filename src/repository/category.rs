use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, SpecificationId};
use crate::models::category::{
    Category as DbCategory, CategoryUpdate as DbCategoryUpdate, NewCategory as DbNewCategory,
    NewCategoryUpdate as DbNewCategoryUpdate, NewSpecification as DbNewSpecification,
    Specification as DbSpecification, encode_options,
};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

/// Attach specifications and audit entries to the given category rows.
fn assemble_categories(
    conn: &mut SqliteConnection,
    rows: Vec<DbCategory>,
) -> RepositoryResult<Vec<Category>> {
    use crate::schema::{category_specs, category_updates};

    let specs = DbSpecification::belonging_to(&rows)
        .select(DbSpecification::as_select())
        .order((category_specs::position.asc(), category_specs::id.asc()))
        .load::<DbSpecification>(conn)?
        .grouped_by(&rows);

    let updates = DbCategoryUpdate::belonging_to(&rows)
        .select(DbCategoryUpdate::as_select())
        .order(category_updates::id.asc())
        .load::<DbCategoryUpdate>(conn)?
        .grouped_by(&rows);

    let categories = rows
        .into_iter()
        .zip(specs)
        .zip(updates)
        .map(|((category, specs), updates)| Category::try_from((category, specs, updates)))
        .collect::<Result<Vec<Category>, _>>()?;

    Ok(categories)
}

fn load_category(
    conn: &mut SqliteConnection,
    id: CategoryId,
) -> RepositoryResult<Option<Category>> {
    use crate::schema::categories;

    let row = categories::table
        .find(id.get())
        .select(DbCategory::as_select())
        .first::<DbCategory>(conn)
        .optional()?;

    match row {
        Some(row) => Ok(assemble_categories(conn, vec![row])?.pop()),
        None => Ok(None),
    }
}

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let conn: &mut SqliteConnection = &mut conn;

        let rows = categories::table
            .select(DbCategory::as_select())
            .order(categories::id.asc())
            .load::<DbCategory>(conn)?;

        assemble_categories(conn, rows)
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        let mut conn = self.conn()?;
        load_category(&mut conn, id)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let row = diesel::insert_into(categories::table)
            .values(db_category)
            .returning(DbCategory::as_returning())
            .get_result::<DbCategory>(&mut conn)?;

        Ok(Category::try_from((row, vec![], vec![]))?)
    }

    fn save_category(&self, category: &Category) -> RepositoryResult<Category> {
        use crate::schema::{categories, category_specs, category_updates};

        let mut conn = self.conn()?;
        let conn: &mut SqliteConnection = &mut conn;
        let category_id = category.id.get();

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let affected = diesel::update(categories::table.find(category_id))
                .set(categories::name.eq(category.name.as_str()))
                .execute(conn)?;
            if affected == 0 {
                return Err(RepositoryError::NotFound);
            }

            let kept = category
                .specs
                .iter()
                .filter_map(|spec| spec.id.map(SpecificationId::get))
                .collect::<Vec<i32>>();

            diesel::delete(
                category_specs::table
                    .filter(category_specs::category_id.eq(category_id))
                    .filter(category_specs::id.ne_all(kept)),
            )
            .execute(conn)?;

            for (position, spec) in category.specs.iter().enumerate() {
                let position = position as i32;
                let options = encode_options(&spec.options)?;
                match spec.id {
                    Some(spec_id) => {
                        diesel::update(
                            category_specs::table
                                .filter(category_specs::id.eq(spec_id.get()))
                                .filter(category_specs::category_id.eq(category_id)),
                        )
                        .set((
                            category_specs::name.eq(spec.name.as_str()),
                            category_specs::options.eq(&options),
                            category_specs::position.eq(position),
                        ))
                        .execute(conn)?;
                    }
                    None => {
                        diesel::insert_into(category_specs::table)
                            .values(DbNewSpecification {
                                category_id,
                                name: spec.name.as_str().to_string(),
                                options,
                                position,
                            })
                            .execute(conn)?;
                    }
                }
            }

            let recorded = category_updates::table
                .filter(category_updates::category_id.eq(category_id))
                .count()
                .get_result::<i64>(conn)? as usize;

            for entry in category.updated.iter().skip(recorded) {
                diesel::insert_into(category_updates::table)
                    .values(DbNewCategoryUpdate::new(category.id, entry))
                    .execute(conn)?;
            }

            load_category(conn, category.id)?.ok_or(RepositoryError::NotFound)
        })
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::{categories, category_specs, category_updates};

        let mut conn = self.conn()?;
        let conn: &mut SqliteConnection = &mut conn;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let Some(category) = load_category(conn, id)? else {
                return Ok(None);
            };

            diesel::delete(category_specs::table.filter(category_specs::category_id.eq(id.get())))
                .execute(conn)?;
            diesel::delete(
                category_updates::table.filter(category_updates::category_id.eq(id.get())),
            )
            .execute(conn)?;
            diesel::delete(categories::table.find(id.get())).execute(conn)?;

            Ok(Some(category))
        })
    }
}
