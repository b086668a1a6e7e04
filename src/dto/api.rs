//! JSON envelopes returned by the category API.

use serde::Serialize;

use crate::domain::category::{Category, Specification};

/// Successful response: `{"success": true, "title"?, "message"?, ...body}`.
#[derive(Debug, Serialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(body: T) -> Self {
        Self {
            success: true,
            title: None,
            message: None,
            body,
        }
    }

    pub fn titled(mut self, title: &'static str, message: Option<&'static str>) -> Self {
        self.title = Some(title);
        self.message = message;
        self
    }
}

/// Failed response: `{"success": false, "message": ...}`.
#[derive(Debug, Serialize)]
pub struct ApiFailure {
    pub success: bool,
    pub message: String,
}

impl ApiFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryBody {
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct CategoriesBody {
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct SpecificationBody {
    pub spec: Specification,
}
