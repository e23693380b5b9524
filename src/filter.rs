// 🧮 Person Filter - narrow to users, then apply criteria
//
// Output is always a stable sub-sequence of the input: users only,
// original order, nothing added.

use crate::criteria::{CriteriaError, UserCriteria};
use crate::entities::{Admin, Person, User};
use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

// ============================================================================
// FILTERING
// ============================================================================

/// Users from `persons` matching every constraint in `criteria`
pub fn filter_users(persons: &[Person], criteria: &UserCriteria) -> Vec<User> {
    let matches: Vec<User> = persons
        .iter()
        .filter_map(Person::as_user)
        .filter(|user| criteria.matches(user))
        .cloned()
        .collect();

    debug!(
        criteria = ?criteria,
        persons = persons.len(),
        matched = matches.len(),
        "filtered users"
    );

    matches
}

/// Same as [`filter_users`], for criteria given as a raw JSON object.
/// Fails before filtering if any key is outside the allowed user fields.
pub fn filter_users_raw(persons: &[Person], criteria: &Value) -> Result<Vec<User>, CriteriaError> {
    let criteria = UserCriteria::from_value(criteria)?;
    Ok(filter_users(persons, &criteria))
}

// ============================================================================
// PERSON REGISTRY
// ============================================================================

/// Read-only, ordered collection of persons
#[derive(Debug, Clone, Default)]
pub struct PersonRegistry {
    persons: Vec<Person>,
}

impl PersonRegistry {
    pub fn new(persons: Vec<Person>) -> Self {
        PersonRegistry { persons }
    }

    /// The six demonstration records
    pub fn sample() -> Self {
        PersonRegistry::new(vec![
            Person::user("Max Mustermann", 25, "Chimney sweep"),
            Person::admin("Jane Doe", 32, "Administrator"),
            Person::user("Kate Müller", 23, "Astronaut"),
            Person::admin("Bruce Willis", 64, "World saver"),
            Person::user("Wilson", 23, "Ball"),
            Person::admin("Agent Smith", 23, "Administrator"),
        ])
    }

    /// Load from a JSON array of tagged records (`{"type": "user", ...}`)
    pub fn from_json_str(json: &str) -> Result<Self> {
        let persons: Vec<Person> =
            serde_json::from_str(json).context("Failed to parse persons JSON")?;

        Ok(PersonRegistry::new(persons))
    }

    pub fn all(&self) -> &[Person] {
        &self.persons
    }

    pub fn users(&self) -> Vec<&User> {
        self.persons.iter().filter_map(Person::as_user).collect()
    }

    pub fn admins(&self) -> Vec<&Admin> {
        self.persons.iter().filter_map(Person::as_admin).collect()
    }

    pub fn count(&self) -> usize {
        self.persons.len()
    }

    pub fn filter_users(&self, criteria: &UserCriteria) -> Vec<User> {
        filter_users(&self.persons, criteria)
    }

    pub fn filter_users_raw(&self, criteria: &Value) -> Result<Vec<User>, CriteriaError> {
        filter_users_raw(&self.persons, criteria)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn test_sample_registry() {
        let registry = PersonRegistry::sample();

        assert_eq!(registry.count(), 6);
        assert_eq!(registry.users().len(), 3);
        assert_eq!(registry.admins().len(), 3);
    }

    #[test]
    fn test_empty_criteria_returns_all_users_in_order() {
        let registry = PersonRegistry::sample();
        let users = registry.filter_users(&UserCriteria::new());

        assert_eq!(names(&users), vec!["Max Mustermann", "Kate Müller", "Wilson"]);
    }

    #[test]
    fn test_filter_by_age_excludes_admins() {
        let registry = PersonRegistry::sample();
        let users = registry.filter_users(&UserCriteria::new().age(23));

        // Agent Smith is 23 too, but an admin
        assert_eq!(
            users,
            vec![
                User::new("Kate Müller", 23, "Astronaut"),
                User::new("Wilson", 23, "Ball"),
            ]
        );
    }

    #[test]
    fn test_filter_by_occupation() {
        let registry = PersonRegistry::sample();
        let users = registry.filter_users(&UserCriteria::new().occupation("Ball"));

        assert_eq!(users, vec![User::new("Wilson", 23, "Ball")]);
    }

    #[test]
    fn test_every_result_satisfies_every_key() {
        let registry = PersonRegistry::sample();
        let criteria = UserCriteria::new().name("Kate Müller").age(23);

        for user in registry.filter_users(&criteria) {
            assert_eq!(user.name, "Kate Müller");
            assert_eq!(user.age, 23);
        }
    }

    #[test]
    fn test_no_match() {
        let registry = PersonRegistry::sample();
        let users = registry.filter_users(&UserCriteria::new().occupation("Administrator"));

        assert!(users.is_empty());
    }

    #[test]
    fn test_refilter_with_empty_criteria_is_noop() {
        let registry = PersonRegistry::sample();
        let first = registry.filter_users(&UserCriteria::new().age(23));

        let persons: Vec<Person> = first.iter().cloned().map(Person::from).collect();
        let second = filter_users(&persons, &UserCriteria::new());

        assert_eq!(first, second);
    }

    #[test]
    fn test_results_always_users_satisfying_criteria() {
        let mixed = vec![
            Person::admin("Root", 40, "Administrator"),
            Person::user("Ana", 30, "Pilot"),
            Person::user("Ben", 30, "Baker"),
            Person::admin("Ana", 30, "Pilot"),
            Person::user("Ana", 41, "Baker"),
        ];
        let admins_only = vec![
            Person::admin("Root", 40, "Administrator"),
            Person::admin("Ana", 30, "Pilot"),
        ];
        let criteria_set = [
            UserCriteria::new(),
            UserCriteria::new().name("Ana"),
            UserCriteria::new().age(30),
            UserCriteria::new().occupation("Baker"),
            UserCriteria::new().name("Ana").age(30),
            UserCriteria::new().name("Ana").age(41).occupation("Baker"),
            UserCriteria::new().occupation("Administrator"),
        ];

        for persons in [&mixed, &admins_only] {
            for criteria in &criteria_set {
                let users = filter_users(persons, criteria);

                for user in &users {
                    assert!(persons.contains(&Person::User(user.clone())));
                    assert!(criteria.matches(user));
                    if let Some(name) = &criteria.name {
                        assert_eq!(&user.name, name);
                    }
                    if let Some(age) = criteria.age {
                        assert_eq!(user.age, age);
                    }
                    if let Some(occupation) = &criteria.occupation {
                        assert_eq!(&user.occupation, occupation);
                    }
                }

                let refiltered: Vec<Person> = users.iter().cloned().map(Person::from).collect();
                assert_eq!(filter_users(&refiltered, &UserCriteria::new()), users);
            }
        }

        assert!(filter_users(&admins_only, &UserCriteria::new()).is_empty());
        assert_eq!(filter_users(&mixed, &UserCriteria::new()).len(), 3);
    }

    #[test]
    fn test_raw_criteria_with_type_key_fails() {
        let registry = PersonRegistry::sample();
        let err = registry.filter_users_raw(&json!({"type": "user"})).unwrap_err();

        assert!(matches!(err, CriteriaError::InvalidCriteriaField { ref field } if field == "type"));
    }

    #[test]
    fn test_raw_criteria_filters() {
        let registry = PersonRegistry::sample();
        let users = registry.filter_users_raw(&json!({"age": 23})).unwrap();

        assert_eq!(names(&users), vec!["Kate Müller", "Wilson"]);
    }

    #[test]
    fn test_from_json_str() {
        let registry = PersonRegistry::from_json_str(
            r#"[
                {"type": "user", "name": "Wilson", "age": 23, "occupation": "Ball"},
                {"type": "admin", "name": "Jane Doe", "age": 32, "role": "Administrator"}
            ]"#,
        )
        .unwrap();

        assert_eq!(registry.count(), 2);
        assert!(registry.all()[0].is_user());
        assert!(registry.all()[1].is_admin());
    }

    #[test]
    fn test_from_json_str_rejects_bad_discriminant() {
        let result = PersonRegistry::from_json_str(r#"[{"type": "root", "name": "x", "age": 1}]"#);

        assert!(result.is_err());
    }
}
