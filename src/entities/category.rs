// 🏷️ Category Entity - Product groupings with an owning user
//
// Each category belongs to exactly one user via owner_id. The multi-select
// filter works on category titles, so titles are unique in fixture data.

use serde::{Deserialize, Serialize};

/// A product category
///
/// `owner_id` points at `User::id`; the denormalizer resolves it when
/// building goods and tolerates a missing owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique id, foreign-key target of `Product::category_id`
    pub id: u32,

    /// Display title (e.g., "Grocery", "Drinks")
    pub title: String,

    /// Emoji icon shown next to the title (e.g., "🍞", "🍺")
    pub icon: String,

    /// Owning user (→ User.id)
    #[serde(rename = "ownerId")]
    pub owner_id: u32,
}

impl Category {
    pub fn new(id: u32, title: &str, icon: &str, owner_id: u32) -> Self {
        Category {
            id,
            title: title.to_string(),
            icon: icon.to_string(),
            owner_id,
        }
    }

    /// Display form used by table cells: "🍞 - Grocery"
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let category = Category::new(1, "Grocery", "🍞", 2);

        assert_eq!(category.id, 1);
        assert_eq!(category.title, "Grocery");
        assert_eq!(category.owner_id, 2);
    }

    #[test]
    fn test_category_label() {
        let category = Category::new(3, "Fruits", "🍏", 2);

        assert_eq!(category.label(), "🍏 - Fruits");
    }

    #[test]
    fn test_category_owner_id_rename() {
        let json = r#"{"id":4,"title":"Electronics","icon":"💻","ownerId":1}"#;
        let category: Category = serde_json::from_str(json).unwrap();

        assert_eq!(category.owner_id, 1);
    }
}
