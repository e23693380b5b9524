// 🛡️ Admin Entity

use serde::{Deserialize, Serialize};

/// An administrator record. Shares `name` and `age` with [`User`](super::User)
/// by shape only; there is no common supertype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub name: String,
    pub age: u32,
    pub role: String,
}

impl Admin {
    pub fn new(name: impl Into<String>, age: u32, role: impl Into<String>) -> Self {
        Admin {
            name: name.into(),
            age,
            role: role.into(),
        }
    }
}
