// 📦 Product Entity - The records the catalog table is built from
//
// Products reference a category by id; the owning user is reached through
// that category. Fixture order is the display order.

use serde::{Deserialize, Serialize};

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique id
    pub id: u32,

    /// Display name (e.g., "Milk", "Bread"); free-text search targets this
    pub name: String,

    /// Category this product belongs to (→ Category.id)
    #[serde(rename = "categoryId")]
    pub category_id: u32,
}

impl Product {
    pub fn new(id: u32, name: &str, category_id: u32) -> Self {
        Product {
            id,
            name: name.to_string(),
            category_id,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new(1, "Milk", 2);

        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Milk");
        assert_eq!(product.category_id, 2);
    }

    #[test]
    fn test_product_category_id_rename() {
        let json = r#"{"id":2,"name":"Bread","categoryId":1}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.category_id, 1);
    }
}
