use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{Actor, NewCategory};
use crate::domain::types::{
    CategoryId, CategoryName, SpecificationId, SpecificationName, TypeConstraintError,
};
use crate::forms::RawId;

#[derive(Debug, Error)]
pub enum CategoryFormError {
    #[error("Category request validation failed: {0}")]
    Validation(String),
    #[error("Category request contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

#[derive(Deserialize, Validate)]
pub struct CreateCategoryForm {
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCategoryPayload {
    pub name: CategoryName,
}

impl CreateCategoryPayload {
    pub fn into_new_category(self, actor: &Actor) -> NewCategory {
        NewCategory {
            name: self.name,
            created: actor.stamp(Utc::now().naive_utc()),
        }
    }
}

impl TryFrom<CreateCategoryForm> for CreateCategoryPayload {
    type Error = CategoryFormError;

    fn try_from(value: CreateCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: CategoryName::new(value.name)?,
        })
    }
}

/// Body carrying only a category id (lookup and removal).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryIdForm {
    pub category_id: RawId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryIdPayload {
    pub category_id: CategoryId,
}

impl TryFrom<CategoryIdForm> for CategoryIdPayload {
    type Error = CategoryFormError;

    fn try_from(value: CategoryIdForm) -> Result<Self, Self::Error> {
        Ok(Self {
            category_id: value.category_id.parse("categoryId")?,
        })
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryNameForm {
    pub category_id: RawId,
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategoryNamePayload {
    pub category_id: CategoryId,
    pub name: CategoryName,
}

impl TryFrom<UpdateCategoryNameForm> for UpdateCategoryNamePayload {
    type Error = CategoryFormError;

    fn try_from(value: UpdateCategoryNameForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            category_id: value.category_id.parse("categoryId")?,
            name: CategoryName::new(value.name)?,
        })
    }
}

/// Body addressing one specification of a category.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificationIdForm {
    pub category_id: RawId,
    pub spec_id: RawId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpecificationIdPayload {
    pub category_id: CategoryId,
    pub spec_id: SpecificationId,
}

impl TryFrom<SpecificationIdForm> for SpecificationIdPayload {
    type Error = CategoryFormError;

    fn try_from(value: SpecificationIdForm) -> Result<Self, Self::Error> {
        Ok(Self {
            category_id: value.category_id.parse("categoryId")?,
            spec_id: value.spec_id.parse("specId")?,
        })
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddSpecificationForm {
    pub category_id: RawId,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub options: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddSpecificationPayload {
    pub category_id: CategoryId,
    pub name: SpecificationName,
    pub options: Vec<Value>,
}

impl TryFrom<AddSpecificationForm> for AddSpecificationPayload {
    type Error = CategoryFormError;

    fn try_from(value: AddSpecificationForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            category_id: value.category_id.parse("categoryId")?,
            name: SpecificationName::new(value.name)?,
            options: value.options,
        })
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSpecificationForm {
    pub category_id: RawId,
    pub spec_id: RawId,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub options: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSpecificationPayload {
    pub category_id: CategoryId,
    pub spec_id: SpecificationId,
    pub name: SpecificationName,
    pub options: Vec<Value>,
}

impl TryFrom<UpdateSpecificationForm> for UpdateSpecificationPayload {
    type Error = CategoryFormError;

    fn try_from(value: UpdateSpecificationForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            category_id: value.category_id.parse("categoryId")?,
            spec_id: value.spec_id.parse("specId")?,
            name: SpecificationName::new(value.name)?,
            options: value.options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_form_trims_name() {
        let form = CreateCategoryForm {
            name: "  Phones ".to_string(),
        };

        let payload: CreateCategoryPayload = form.try_into().unwrap();
        assert_eq!(payload.name.as_str(), "Phones");
    }

    #[test]
    fn create_form_rejects_blank_name() {
        let form = CreateCategoryForm {
            name: "   ".to_string(),
        };

        let payload: Result<CreateCategoryPayload, _> = form.try_into();
        assert!(matches!(payload, Err(CategoryFormError::TypeConstraint(_))));
    }

    #[test]
    fn add_specification_defaults_missing_options() {
        let form: AddSpecificationForm =
            serde_json::from_value(json!({"categoryId": "4", "name": "Color"})).unwrap();

        let payload: AddSpecificationPayload = form.try_into().unwrap();
        assert_eq!(payload.category_id.get(), 4);
        assert!(payload.options.is_empty());
    }

    #[test]
    fn update_specification_keeps_option_values() {
        let form: UpdateSpecificationForm = serde_json::from_value(json!({
            "categoryId": 1,
            "specId": "9",
            "name": "Size",
            "options": [64, "XL", {"w": 2}]
        }))
        .unwrap();

        let payload: UpdateSpecificationPayload = form.try_into().unwrap();
        assert_eq!(payload.spec_id.get(), 9);
        assert_eq!(payload.options, vec![json!(64), json!("XL"), json!({"w": 2})]);
    }

    #[test]
    fn specification_id_form_rejects_invalid_ids() {
        let form: SpecificationIdForm =
            serde_json::from_value(json!({"categoryId": 1, "specId": "nope"})).unwrap();

        let payload: Result<SpecificationIdPayload, _> = form.try_into();
        assert!(payload.is_err());
    }
}
