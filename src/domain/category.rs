use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::types::{
    ActorId, ActorName, CategoryId, CategoryName, SpecificationId, SpecificationName,
};

/// User performing a mutation, recorded in the audit fields of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: ActorName,
}

impl Actor {
    /// Build an audit entry attributing a change at `datetime` to this actor.
    pub fn stamp(&self, datetime: NaiveDateTime) -> AuditEntry {
        AuditEntry {
            actor_id: self.id.clone(),
            actor_name: self.name.clone(),
            datetime,
        }
    }
}

/// Who touched a category and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub actor_id: ActorId,
    pub actor_name: ActorName,
    pub datetime: NaiveDateTime,
}

/// Named set of selectable option values embedded in a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    /// `None` until the owning category is saved.
    pub id: Option<SpecificationId>,
    pub name: SpecificationName,
    pub options: Vec<Value>,
}

impl Specification {
    /// A specification that has not been persisted yet.
    pub fn pending(name: SpecificationName, options: Vec<Value>) -> Self {
        Self {
            id: None,
            name,
            options,
        }
    }

    /// Whether `name` and `options` match this specification by value.
    pub fn has_contents(&self, name: &SpecificationName, options: &[Value]) -> bool {
        &self.name == name && self.options.as_slice() == options
    }
}

/// Taxonomy record owning an ordered list of specifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub created: AuditEntry,
    /// Append-only; entries are never removed once saved.
    pub updated: Vec<AuditEntry>,
    pub actived: bool,
    pub specs: Vec<Specification>,
}

impl Category {
    /// Position of the specification with `id` in `specs`.
    pub fn specification_index(&self, id: SpecificationId) -> Option<usize> {
        self.specs.iter().position(|spec| spec.id == Some(id))
    }

    /// Specification with `id`, if the category holds one.
    pub fn specification(&self, id: SpecificationId) -> Option<&Specification> {
        self.specs.iter().find(|spec| spec.id == Some(id))
    }

    /// Append an audit entry for a change made by `actor`.
    pub fn record_update(&mut self, actor: &Actor, datetime: NaiveDateTime) {
        self.updated.push(actor.stamp(datetime));
    }

    /// Timestamp shown as the category's last activity.
    ///
    /// The first `updated` entry is treated as the latest one; categories
    /// that were never updated fall back to their creation time.
    pub fn last_activity(&self) -> NaiveDateTime {
        self.updated
            .first()
            .map(|entry| entry.datetime)
            .unwrap_or(self.created.datetime)
    }
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: CategoryName,
    pub created: AuditEntry,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use serde_json::json;

    fn at(seconds: i64) -> NaiveDateTime {
        DateTime::from_timestamp(seconds, 0).unwrap().naive_utc()
    }

    fn actor(id: &str) -> Actor {
        Actor {
            id: ActorId::new(id).unwrap(),
            name: ActorName::new("Alice").unwrap(),
        }
    }

    fn sample_category() -> Category {
        Category {
            id: CategoryId::new(1).unwrap(),
            name: CategoryName::new("Phones").unwrap(),
            created: actor("u1").stamp(at(10)),
            updated: vec![],
            actived: true,
            specs: vec![
                Specification {
                    id: Some(SpecificationId::new(3).unwrap()),
                    name: SpecificationName::new("Color").unwrap(),
                    options: vec![json!("Red"), json!("Blue")],
                },
                Specification {
                    id: Some(SpecificationId::new(7).unwrap()),
                    name: SpecificationName::new("Size").unwrap(),
                    options: vec![json!(64), json!(128)],
                },
            ],
        }
    }

    #[test]
    fn last_activity_falls_back_to_creation() {
        let category = sample_category();
        assert_eq!(category.last_activity(), at(10));
    }

    #[test]
    fn last_activity_reads_first_update_entry() {
        let mut category = sample_category();
        category.record_update(&actor("u2"), at(20));
        category.record_update(&actor("u3"), at(30));

        assert_eq!(category.updated.len(), 2);
        assert_eq!(category.last_activity(), at(20));
    }

    #[test]
    fn finds_specifications_by_id() {
        let category = sample_category();
        let id = SpecificationId::new(7).unwrap();

        assert_eq!(category.specification_index(id), Some(1));
        assert_eq!(category.specification(id).unwrap().name.as_str(), "Size");
        assert!(
            category
                .specification(SpecificationId::new(99).unwrap())
                .is_none()
        );
    }

    #[test]
    fn content_comparison_is_order_sensitive() {
        let category = sample_category();
        let spec = &category.specs[0];
        let name = SpecificationName::new("Color").unwrap();

        assert!(spec.has_contents(&name, &[json!("Red"), json!("Blue")]));
        assert!(!spec.has_contents(&name, &[json!("Blue"), json!("Red")]));
    }
}
