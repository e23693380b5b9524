// Entity Models - Person as a closed sum type
//
// A Person is exactly one of:
// - User  { name, age, occupation }
// - Admin { name, age, role }
//
// The variant IS the discriminant. It is fixed at construction and
// serialized as the `type` field ("user" / "admin").

pub mod admin;
pub mod user;

pub use admin::Admin;
pub use user::User;

use serde::{Deserialize, Serialize};

// ============================================================================
// PERSON KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonKind {
    User,
    Admin,
}

impl PersonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonKind::User => "user",
            PersonKind::Admin => "admin",
        }
    }
}

impl std::fmt::Display for PersonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PERSON
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Person {
    User(User),
    Admin(Admin),
}

impl Person {
    pub fn user(name: impl Into<String>, age: u32, occupation: impl Into<String>) -> Self {
        Person::User(User::new(name, age, occupation))
    }

    pub fn admin(name: impl Into<String>, age: u32, role: impl Into<String>) -> Self {
        Person::Admin(Admin::new(name, age, role))
    }

    /// Which variant this person is
    pub fn kind(&self) -> PersonKind {
        match self {
            Person::User(_) => PersonKind::User,
            Person::Admin(_) => PersonKind::Admin,
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Person::User(_))
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Person::Admin(_))
    }

    pub fn as_user(&self) -> Option<&User> {
        match self {
            Person::User(user) => Some(user),
            Person::Admin(_) => None,
        }
    }

    pub fn as_admin(&self) -> Option<&Admin> {
        match self {
            Person::Admin(admin) => Some(admin),
            Person::User(_) => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Person::User(user) => &user.name,
            Person::Admin(admin) => &admin.name,
        }
    }

    pub fn age(&self) -> u32 {
        match self {
            Person::User(user) => user.age,
            Person::Admin(admin) => admin.age,
        }
    }

    /// Variant-specific detail: occupation for users, role for admins
    pub fn additional_info(&self) -> &str {
        match self {
            Person::User(user) => &user.occupation,
            Person::Admin(admin) => &admin.role,
        }
    }
}

impl From<User> for Person {
    fn from(user: User) -> Self {
        Person::User(user)
    }
}

impl From<Admin> for Person {
    fn from(admin: Admin) -> Self {
        Person::Admin(admin)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_is_exclusive() {
        let people = [
            Person::user("Max Mustermann", 25, "Chimney sweep"),
            Person::admin("Jane Doe", 32, "Administrator"),
        ];

        for person in &people {
            assert_ne!(person.is_user(), person.is_admin());
        }
        assert_eq!(people[0].kind(), PersonKind::User);
        assert_eq!(people[1].kind(), PersonKind::Admin);
    }

    #[test]
    fn test_additional_info_per_variant() {
        let user = Person::user("Kate Müller", 23, "Astronaut");
        let admin = Person::admin("Bruce Willis", 64, "World saver");

        assert_eq!(user.additional_info(), "Astronaut");
        assert_eq!(admin.additional_info(), "World saver");
        assert_eq!(admin.name(), "Bruce Willis");
        assert_eq!(admin.age(), 64);
    }

    #[test]
    fn test_serialized_discriminant() {
        let json = serde_json::to_value(Person::admin("Agent Smith", 23, "Administrator")).unwrap();

        assert_eq!(json["type"], "admin");
        assert_eq!(json["role"], "Administrator");
    }

    #[test]
    fn test_deserialize_tagged_user() {
        let person: Person =
            serde_json::from_str(r#"{"type":"user","name":"Wilson","age":23,"occupation":"Ball"}"#)
                .unwrap();

        assert_eq!(person.as_user(), Some(&User::new("Wilson", 23, "Ball")));
        assert!(person.as_admin().is_none());
    }

    #[test]
    fn test_unknown_discriminant_rejected() {
        let result: Result<Person, _> =
            serde_json::from_str(r#"{"type":"guest","name":"Nobody","age":1}"#);

        assert!(result.is_err());
    }
}
