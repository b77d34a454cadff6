//! Built-in candidate roster

use crate::roster::models::Person;

/// Names every session starts from when no roster file is configured
pub const DEFAULT_NAMES: [&str; 19] = [
    "Lily Rose",
    "Ava Grace",
    "Ruby Mae",
    "Stella Luna",
    "Jack Ryan",
    "Emma Kate",
    "Olivia Jade",
    "Ethan James",
    "Amelia Rose",
    "Lucas John",
    "Madison Claire",
    "Noah William",
    "Isla Faith",
    "Mason Alexander",
    "Grace Elizabeth",
    "Liam Thomas",
    "Chloe Grace",
    "Jackson Lee",
    "Scarlett Belle",
];

/// Build the default roster
#[must_use]
pub fn default_roster() -> Vec<Person> {
    DEFAULT_NAMES.iter().map(|name| Person::new(*name)).collect()
}
