// 📂 Embedded Fixture Data - Default users, categories, and products
//
// Stands in for a backing data source; the store can also read the same
// three collections from JSON files. Foreign keys here are consistent
// (every owner_id and category_id resolves).

use crate::entities::{Category, Product, Sex, User};

pub fn default_users() -> Vec<User> {
    vec![
        User::new(1, "Max", Sex::Male),
        User::new(2, "Anna", Sex::Female),
        User::new(3, "Roma", Sex::Male),
    ]
}

pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Grocery", "🍞", 2),
        Category::new(2, "Drinks", "🍺", 1),
        Category::new(3, "Fruits", "🍏", 2),
        Category::new(4, "Electronics", "💻", 1),
        Category::new(5, "Clothes", "👚", 3),
    ]
}

pub fn default_products() -> Vec<Product> {
    vec![
        Product::new(1, "Milk", 2),
        Product::new(2, "Bread", 1),
        Product::new(3, "Garlic", 1),
        Product::new(4, "Apple", 3),
        Product::new(5, "Banana", 3),
        Product::new(6, "Laptop", 4),
        Product::new(7, "T-shirt", 5),
        Product::new(8, "Juice", 2),
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_foreign_keys_resolve() {
        let users = default_users();
        let categories = default_categories();
        let products = default_products();

        for category in &categories {
            assert!(
                users.iter().any(|u| u.id == category.owner_id),
                "category {} has dangling owner_id {}",
                category.title,
                category.owner_id
            );
        }

        for product in &products {
            assert!(
                categories.iter().any(|c| c.id == product.category_id),
                "product {} has dangling category_id {}",
                product.name,
                product.category_id
            );
        }
    }

    #[test]
    fn test_fixture_ids_unique() {
        let users = default_users();
        let categories = default_categories();
        let products = default_products();

        for (i, user) in users.iter().enumerate() {
            assert!(users.iter().skip(i + 1).all(|u| u.id != user.id));
        }
        for (i, category) in categories.iter().enumerate() {
            assert!(categories.iter().skip(i + 1).all(|c| c.id != category.id));
        }
        for (i, product) in products.iter().enumerate() {
            assert!(products.iter().skip(i + 1).all(|p| p.id != product.id));
        }
    }

    #[test]
    fn test_fixture_category_titles_unique() {
        let categories = default_categories();

        for (i, category) in categories.iter().enumerate() {
            assert!(categories
                .iter()
                .skip(i + 1)
                .all(|c| c.title != category.title));
        }
    }
}
