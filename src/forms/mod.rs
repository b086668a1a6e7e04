use serde::Deserialize;

use crate::domain::types::TypeConstraintError;

pub mod categories;

/// Identifier as sent by clients: a JSON number or its string form.
///
/// The edit page renders ids as strings, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    /// Convert into a domain identifier.
    pub fn parse<T>(&self, field: &'static str) -> Result<T, TypeConstraintError>
    where
        T: TryFrom<i32, Error = TypeConstraintError>,
    {
        let value = match self {
            RawId::Number(number) => i32::try_from(*number).ok(),
            RawId::Text(text) => text.trim().parse::<i32>().ok(),
        };
        let value = value.ok_or_else(|| {
            TypeConstraintError::InvalidValue(format!("{field} is not a valid identifier"))
        })?;
        T::try_from(value)
    }
}
