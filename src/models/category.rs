use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde_json::Value;

use crate::domain::category::{
    AuditEntry, Category as DomainCategory, NewCategory as DomainNewCategory,
    Specification as DomainSpecification,
};
use crate::domain::types::{
    ActorId, ActorName, CategoryId, CategoryName, SpecificationName, TypeConstraintError,
};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub created_by_id: String,
    pub created_by_name: String,
    pub created_at: NaiveDateTime,
    pub actived: bool,
}

/// Insertable form of [`Category`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub name: String,
    pub created_by_id: String,
    pub created_by_name: String,
    pub created_at: NaiveDateTime,
}

/// Diesel model representing the `category_specs` table.
///
/// `options` holds the JSON-encoded option list.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Category))]
#[diesel(table_name = crate::schema::category_specs)]
pub struct Specification {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub options: String,
    pub position: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::category_specs)]
pub struct NewSpecification {
    pub category_id: i32,
    pub name: String,
    pub options: String,
    pub position: i32,
}

/// Diesel model representing the append-only `category_updates` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Category))]
#[diesel(table_name = crate::schema::category_updates)]
pub struct CategoryUpdate {
    pub id: i32,
    pub category_id: i32,
    pub actor_id: String,
    pub actor_name: String,
    pub datetime: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::category_updates)]
pub struct NewCategoryUpdate {
    pub category_id: i32,
    pub actor_id: String,
    pub actor_name: String,
    pub datetime: NaiveDateTime,
}

impl NewCategoryUpdate {
    pub fn new(category_id: CategoryId, entry: &AuditEntry) -> Self {
        Self {
            category_id: category_id.get(),
            actor_id: entry.actor_id.as_str().to_string(),
            actor_name: entry.actor_name.as_str().to_string(),
            datetime: entry.datetime,
        }
    }
}

/// Encode an option list for the `options` column.
pub fn encode_options(options: &[Value]) -> Result<String, TypeConstraintError> {
    serde_json::to_string(options)
        .map_err(|e| TypeConstraintError::InvalidValue(format!("specification options: {e}")))
}

fn decode_options(raw: &str) -> Result<Vec<Value>, TypeConstraintError> {
    serde_json::from_str(raw)
        .map_err(|e| TypeConstraintError::InvalidValue(format!("specification options: {e}")))
}

impl TryFrom<Specification> for DomainSpecification {
    type Error = TypeConstraintError;

    fn try_from(spec: Specification) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(spec.id.try_into()?),
            name: SpecificationName::new(spec.name)?,
            options: decode_options(&spec.options)?,
        })
    }
}

impl TryFrom<CategoryUpdate> for AuditEntry {
    type Error = TypeConstraintError;

    fn try_from(update: CategoryUpdate) -> Result<Self, Self::Error> {
        Ok(Self {
            actor_id: ActorId::new(update.actor_id)?,
            actor_name: ActorName::new(update.actor_name)?,
            datetime: update.datetime,
        })
    }
}

/// A category row together with its child rows, in document order.
impl TryFrom<(Category, Vec<Specification>, Vec<CategoryUpdate>)> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(
        (category, specs, updates): (Category, Vec<Specification>, Vec<CategoryUpdate>),
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            name: CategoryName::new(category.name)?,
            created: AuditEntry {
                actor_id: ActorId::new(category.created_by_id)?,
                actor_name: ActorName::new(category.created_by_name)?,
                datetime: category.created_at,
            },
            updated: updates
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<Vec<AuditEntry>, _>>()?,
            actived: category.actived,
            specs: specs
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<Vec<DomainSpecification>, _>>()?,
        })
    }
}

impl From<DomainNewCategory> for NewCategory {
    fn from(category: DomainNewCategory) -> Self {
        Self {
            name: category.name.into_inner(),
            created_by_id: category.created.actor_id.into_inner(),
            created_by_name: category.created.actor_name.into_inner(),
            created_at: category.created.datetime,
        }
    }
}
