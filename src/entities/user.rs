// 👤 User Entity - Catalog owners
//
// Users own categories; a product reaches its user through the category's
// owner_id. Records are fixture data: loaded once, never mutated.

use serde::{Deserialize, Serialize};

// ============================================================================
// SEX
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    /// Male ("m" in fixture data)
    #[serde(rename = "m")]
    Male,

    /// Female ("f" in fixture data)
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }
}

// ============================================================================
// USER ENTITY
// ============================================================================

/// A catalog user
///
/// `id` is unique across the fixture set and is the foreign-key target of
/// `Category::owner_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique id
    pub id: u32,

    /// Display name (e.g., "Max", "Anna")
    pub name: String,

    /// Sex, used by the table renderer for tinting
    pub sex: Sex,
}

impl User {
    pub fn new(id: u32, name: &str, sex: Sex) -> Self {
        User {
            id,
            name: name.to_string(),
            sex,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
