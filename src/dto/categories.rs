use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::domain::category::{Category, Specification};

/// Format used for dates shown on category pages.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn format_date(datetime: NaiveDateTime) -> String {
    datetime.format(DATE_FORMAT).to_string()
}

/// Textual form of an option value: strings verbatim, everything else as JSON.
fn option_to_string(option: &Value) -> String {
    match option {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn spec_id_to_string(spec: &Specification) -> String {
    spec.id.map(|id| id.to_string()).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecificationNameDto {
    pub name: String,
}

/// Row of the category list page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryListItemDto {
    pub id: String,
    pub name: String,
    pub status: bool,
    /// `None` when the category has no specifications.
    pub specs: Option<Vec<SpecificationNameDto>>,
    pub updated: String,
}

impl From<Category> for CategoryListItemDto {
    fn from(value: Category) -> Self {
        let updated = format_date(value.last_activity());
        let specs = if value.specs.is_empty() {
            None
        } else {
            Some(
                value
                    .specs
                    .iter()
                    .map(|spec| SpecificationNameDto {
                        name: spec.name.as_str().to_string(),
                    })
                    .collect(),
            )
        };

        Self {
            id: value.id.to_string(),
            name: value.name.into_inner(),
            status: value.actived,
            specs,
            updated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecificationFormDto {
    pub id: String,
    pub name: String,
    pub options: Vec<String>,
}

/// Category as pre-filled into the edit form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryFormDto {
    pub id: String,
    pub name: String,
    pub specs: Vec<SpecificationFormDto>,
}

impl From<Category> for CategoryFormDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.to_string(),
            specs: value
                .specs
                .iter()
                .map(|spec| SpecificationFormDto {
                    id: spec_id_to_string(spec),
                    name: spec.name.as_str().to_string(),
                    options: spec.options.iter().map(option_to_string).collect(),
                })
                .collect(),
            name: value.name.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::{Actor, Category, Specification};
    use crate::domain::types::{
        ActorId, ActorName, CategoryId, CategoryName, SpecificationId, SpecificationName,
    };
    use chrono::DateTime;
    use serde_json::json;

    fn at(seconds: i64) -> NaiveDateTime {
        DateTime::from_timestamp(seconds, 0).unwrap().naive_utc()
    }

    fn sample_category() -> Category {
        let actor = Actor {
            id: ActorId::new("u1").unwrap(),
            name: ActorName::new("Alice").unwrap(),
        };
        Category {
            id: CategoryId::new(5).unwrap(),
            name: CategoryName::new("Phones").unwrap(),
            created: actor.stamp(at(0)),
            updated: vec![],
            actived: false,
            specs: vec![],
        }
    }

    #[test]
    fn list_item_uses_creation_date_until_updated() {
        let item = CategoryListItemDto::from(sample_category());

        assert_eq!(item.id, "5");
        assert!(!item.status);
        assert_eq!(item.specs, None);
        assert_eq!(item.updated, "1970-01-01 00:00");
    }

    #[test]
    fn list_item_uses_first_update_entry() {
        let mut category = sample_category();
        let actor = Actor {
            id: ActorId::new("u2").unwrap(),
            name: ActorName::new("Bob").unwrap(),
        };
        category.record_update(&actor, at(3_600));
        category.record_update(&actor, at(7_200));
        category.specs.push(Specification {
            id: Some(SpecificationId::new(1).unwrap()),
            name: SpecificationName::new("Color").unwrap(),
            options: vec![],
        });

        let item = CategoryListItemDto::from(category);

        assert_eq!(item.updated, "1970-01-01 01:00");
        assert_eq!(
            item.specs,
            Some(vec![SpecificationNameDto {
                name: "Color".into()
            }])
        );
    }

    #[test]
    fn form_stringifies_ids_and_options() {
        let mut category = sample_category();
        category.specs.push(Specification {
            id: Some(SpecificationId::new(12).unwrap()),
            name: SpecificationName::new("Size").unwrap(),
            options: vec![json!("XL"), json!(42), json!(true)],
        });

        let form = CategoryFormDto::from(category);

        assert_eq!(form.id, "5");
        assert_eq!(form.specs[0].id, "12");
        assert_eq!(form.specs[0].options, vec!["XL", "42", "true"]);
    }
}
