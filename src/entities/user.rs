// 👤 User Entity - the only variant the filter ever returns

use serde::{Deserialize, Serialize};

// ============================================================================
// USER ENTITY
// ============================================================================

/// A regular user record.
///
/// The `type` discriminant lives on [`Person`](super::Person), not here, so a
/// `User` value can never disagree with the variant that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: u32,
    pub occupation: String,
}

impl User {
    /// Field names carried by a user, discriminant excluded
    pub const FIELDS: [&'static str; 3] = ["name", "age", "occupation"];

    pub fn new(name: impl Into<String>, age: u32, occupation: impl Into<String>) -> Self {
        User {
            name: name.into(),
            age,
            occupation: occupation.into(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
