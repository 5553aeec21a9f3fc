// 🛒 Goods - Denormalized products enriched with category and owner
//
// The join runs once at startup: product → category (by category_id) →
// user (by the category's owner_id). Missing foreign keys degrade to None
// instead of failing; filtering then treats the absent side as a non-match.

use serde::{Deserialize, Serialize};

use crate::entities::{Category, User};
use crate::store::RecordStore;

// ============================================================================
// GOOD
// ============================================================================

/// A product with its category and owning user joined in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Good {
    /// Product id
    pub id: u32,

    /// Product name
    pub name: String,

    /// Resolved category, None when category_id had no match
    pub category: Option<Category>,

    /// Owner of the resolved category, None when either hop missed
    pub user: Option<User>,
}

impl Good {
    /// Category cell text: "🍞 - Grocery", or "-" when the join missed
    pub fn category_label(&self) -> String {
        match &self.category {
            Some(category) => category.label(),
            None => "-".to_string(),
        }
    }

    /// User cell text, "-" when the join missed
    pub fn user_name(&self) -> &str {
        match &self.user {
            Some(user) => user.name.as_str(),
            None => "-",
        }
    }
}

// ============================================================================
// DENORMALIZER
// ============================================================================

/// Join every product with its category and owning user.
///
/// Output length equals the product count and preserves product order.
/// Runs once; the result is treated as immutable afterward.
pub fn denormalize(store: &RecordStore) -> Vec<Good> {
    store
        .products()
        .iter()
        .map(|product| {
            let category = store.category_by_id(product.category_id).cloned();
            let user = category
                .as_ref()
                .and_then(|category| store.user_by_id(category.owner_id))
                .cloned();

            Good {
                id: product.id,
                name: product.name.clone(),
                category,
                user,
            }
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Product, Sex};

    #[test]
    fn test_denormalize_length_and_order() {
        let store = RecordStore::with_fixtures();
        let goods = denormalize(&store);

        assert_eq!(goods.len(), store.products().len());
        for (good, product) in goods.iter().zip(store.products()) {
            assert_eq!(good.id, product.id);
            assert_eq!(good.name, product.name);
        }
    }

    #[test]
    fn test_denormalize_resolves_category_and_owner() {
        let store = RecordStore::with_fixtures();
        let goods = denormalize(&store);

        // "Milk" lives in Drinks, which Max owns
        let milk = goods.iter().find(|g| g.name == "Milk").unwrap();
        assert_eq!(milk.category.as_ref().unwrap().title, "Drinks");
        assert_eq!(milk.user.as_ref().unwrap().name, "Max");
    }

    #[test]
    fn test_denormalize_dangling_category_id() {
        let store = RecordStore::new(
            vec![User::new(1, "Max", Sex::Male)],
            vec![Category::new(1, "Fruits", "🍎", 1)],
            vec![Product::new(1, "Apple", 1), Product::new(2, "Ghost", 99)],
        );
        let goods = denormalize(&store);

        assert_eq!(goods.len(), 2);
        assert!(goods[0].category.is_some());

        // Dangling category_id: both joined fields absent, no error
        assert!(goods[1].category.is_none());
        assert!(goods[1].user.is_none());
    }

    #[test]
    fn test_denormalize_dangling_owner_id() {
        let store = RecordStore::new(
            vec![],
            vec![Category::new(1, "Fruits", "🍎", 42)],
            vec![Product::new(1, "Apple", 1)],
        );
        let goods = denormalize(&store);

        assert!(goods[0].category.is_some());
        assert!(goods[0].user.is_none());
    }

    #[test]
    fn test_good_labels() {
        let store = RecordStore::new(
            vec![],
            vec![Category::new(1, "Fruits", "🍎", 42)],
            vec![Product::new(1, "Apple", 1), Product::new(2, "Ghost", 99)],
        );
        let goods = denormalize(&store);

        assert_eq!(goods[0].category_label(), "🍎 - Fruits");
        assert_eq!(goods[0].user_name(), "-");
        assert_eq!(goods[1].category_label(), "-");
    }
}
