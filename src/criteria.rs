// 🔎 Filter Criteria - partial User, discriminant excluded
//
// UserCriteria mirrors User field for field, every field optional, with no
// way to name `type`. Criteria arriving as loose key/value data (JSON,
// pairs) go through an allow-list and fail loudly on any other key.

use crate::entities::User;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Error, Debug)]
pub enum CriteriaError {
    #[error("Invalid criteria field '{field}': allowed fields are name, age, occupation")]
    InvalidCriteriaField { field: String },

    #[error("Invalid value for criteria field '{field}': expected {expected}, got {found}")]
    InvalidValue {
        field: String,
        expected: &'static str,
        found: String,
    },

    #[error("Criteria must be a JSON object, got {found}")]
    NotAnObject { found: String },

    #[error("Failed to parse criteria JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CriteriaError {
    /// The offending key, for errors tied to a single field
    pub fn field(&self) -> Option<&str> {
        match self {
            CriteriaError::InvalidCriteriaField { field }
            | CriteriaError::InvalidValue { field, .. } => Some(field),
            CriteriaError::NotAnObject { .. } | CriteriaError::Json(_) => None,
        }
    }
}

// ============================================================================
// CRITERIA FIELD (allow-list)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriteriaField {
    Name,
    Age,
    Occupation,
}

impl CriteriaField {
    pub const ALL: [CriteriaField; 3] = [
        CriteriaField::Name,
        CriteriaField::Age,
        CriteriaField::Occupation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CriteriaField::Name => "name",
            CriteriaField::Age => "age",
            CriteriaField::Occupation => "occupation",
        }
    }

    /// Resolve a key against the allow-list. `type` is never accepted.
    pub fn parse(key: &str) -> Result<Self, CriteriaError> {
        match key {
            "name" => Ok(CriteriaField::Name),
            "age" => Ok(CriteriaField::Age),
            "occupation" => Ok(CriteriaField::Occupation),
            other => {
                warn!(field = other, "rejected criteria field");
                Err(CriteriaError::InvalidCriteriaField {
                    field: other.to_string(),
                })
            }
        }
    }
}

// ============================================================================
// USER CRITERIA
// ============================================================================

/// Zero or more field constraints on a [`User`]. An empty value matches
/// every user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
}

impl UserCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.occupation.is_none()
    }

    /// Fields that carry a constraint
    pub fn keys(&self) -> Vec<CriteriaField> {
        CriteriaField::ALL
            .into_iter()
            .filter(|field| match field {
                CriteriaField::Name => self.name.is_some(),
                CriteriaField::Age => self.age.is_some(),
                CriteriaField::Occupation => self.occupation.is_some(),
            })
            .collect()
    }

    /// True when every constrained field equals the user's value
    pub fn matches(&self, user: &User) -> bool {
        self.name.as_ref().map_or(true, |name| *name == user.name)
            && self.age.map_or(true, |age| age == user.age)
            && self
                .occupation
                .as_ref()
                .map_or(true, |occupation| *occupation == user.occupation)
    }

    /// Build criteria from loose key/value pairs, validating each key
    /// against the allow-list and each value against the field's type.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut criteria = UserCriteria::new();

        for (key, value) in pairs {
            let key = key.as_ref();
            match CriteriaField::parse(key)? {
                CriteriaField::Name => criteria.name = Some(expect_string(key, &value)?),
                CriteriaField::Age => criteria.age = Some(expect_age(key, &value)?),
                CriteriaField::Occupation => {
                    criteria.occupation = Some(expect_string(key, &value)?)
                }
            }
        }

        Ok(criteria)
    }

    /// Build criteria from a JSON object such as `{"age": 23}`
    pub fn from_value(value: &Value) -> Result<Self, CriteriaError> {
        let object = value.as_object().ok_or_else(|| CriteriaError::NotAnObject {
            found: json_kind(value).to_string(),
        })?;

        Self::from_pairs(object.iter().map(|(key, value)| (key, value.clone())))
    }

    pub fn from_json_str(json: &str) -> Result<Self, CriteriaError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }
}

// ============================================================================
// VALUE CHECKS (strict, no coercion)
// ============================================================================

fn expect_string(field: &str, value: &Value) -> Result<String, CriteriaError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| CriteriaError::InvalidValue {
            field: field.to_string(),
            expected: "string",
            found: json_kind(value).to_string(),
        })
}

fn expect_age(field: &str, value: &Value) -> Result<u32, CriteriaError> {
    as_age(value).ok_or_else(|| CriteriaError::InvalidValue {
        field: field.to_string(),
        expected: "non-negative integer",
        found: json_kind(value).to_string(),
    })
}

/// Whole numbers only; `23` and `23.0` are the same age
fn as_age(value: &Value) -> Option<u32> {
    if let Some(age) = value.as_u64() {
        return u32::try_from(age).ok();
    }

    let age = value.as_f64()?;
    if age.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&age) {
        Some(age as u32)
    } else {
        None
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// TESTS
// ============================================================================
