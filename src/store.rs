// 🗄️ Record Store - The three read-only fixture collections
//
// Holds users, categories, and products for the process lifetime. Records
// are loaded once (embedded defaults or JSON files) and never mutated;
// everything downstream works on lookups into these collections.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::entities::{Category, Product, User};
use crate::fixtures;

// ============================================================================
// RECORD STORE
// ============================================================================

/// Static record collections, read-only after construction
#[derive(Debug, Clone)]
pub struct RecordStore {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl RecordStore {
    /// Build a store from explicit collections (used by tests and loaders)
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        RecordStore {
            users,
            categories,
            products,
        }
    }

    /// Build a store from the embedded default fixtures
    pub fn with_fixtures() -> Self {
        RecordStore::new(
            fixtures::default_users(),
            fixtures::default_categories(),
            fixtures::default_products(),
        )
    }

    /// Load a store from a directory containing users.json, categories.json
    /// and products.json
    pub fn from_json_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();

        let users = load_json(&dir.join("users.json"))?;
        let categories = load_json(&dir.join("categories.json"))?;
        let products = load_json(&dir.join("products.json"))?;

        Ok(RecordStore::new(users, categories, products))
    }

    // ========================================================================
    // LOOKUPS
    // ========================================================================

    /// First user with the given id, if any
    pub fn user_by_id(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// First category with the given id, if any
    pub fn category_by_id(&self, id: u32) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// First user with the given name, if any
    pub fn user_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|user| user.name == name)
    }

    // ========================================================================
    // ENUMERATION (for filter controls)
    // ========================================================================

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// User names in fixture order (the owner-filter tabs)
    pub fn user_names(&self) -> Vec<&str> {
        self.users.iter().map(|user| user.name.as_str()).collect()
    }

    /// Category titles in fixture order (the multi-select buttons)
    pub fn category_titles(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|category| category.title.as_str())
            .collect()
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture file: {:?}", path))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse fixture JSON: {:?}", path))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Sex;

    fn small_store() -> RecordStore {
        RecordStore::new(
            vec![User::new(1, "Max", Sex::Male)],
            vec![Category::new(1, "Fruits", "🍎", 1)],
            vec![Product::new(1, "Apple", 1)],
        )
    }

    #[test]
    fn test_lookup_by_id() {
        let store = small_store();

        assert_eq!(store.user_by_id(1).unwrap().name, "Max");
        assert_eq!(store.category_by_id(1).unwrap().title, "Fruits");
        assert!(store.user_by_id(99).is_none());
        assert!(store.category_by_id(99).is_none());
    }

    #[test]
    fn test_lookup_by_name() {
        let store = small_store();

        assert_eq!(store.user_by_name("Max").unwrap().id, 1);
        assert!(store.user_by_name("Anna").is_none());
    }

    #[test]
    fn test_enumeration_preserves_fixture_order() {
        let store = RecordStore::with_fixtures();

        assert_eq!(store.user_names(), vec!["Max", "Anna", "Roma"]);
        assert_eq!(
            store.category_titles(),
            vec!["Grocery", "Drinks", "Fruits", "Electronics", "Clothes"]
        );
    }

    #[test]
    fn test_from_json_dir() {
        let dir = std::env::temp_dir().join("goods_catalog_store_test");
        fs::create_dir_all(&dir).unwrap();

        fs::write(
            dir.join("users.json"),
            r#"[{"id":1,"name":"Max","sex":"m"}]"#,
        )
        .unwrap();
        fs::write(
            dir.join("categories.json"),
            r#"[{"id":1,"title":"Fruits","icon":"🍎","ownerId":1}]"#,
        )
        .unwrap();
        fs::write(
            dir.join("products.json"),
            r#"[{"id":1,"name":"Apple","categoryId":1}]"#,
        )
        .unwrap();

        let store = RecordStore::from_json_dir(&dir).unwrap();

        assert_eq!(store.users().len(), 1);
        assert_eq!(store.categories().len(), 1);
        assert_eq!(store.products().len(), 1);
        assert_eq!(store.products()[0].name, "Apple");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_from_json_dir_missing_file() {
        let dir = std::env::temp_dir().join("goods_catalog_store_missing");
        fs::create_dir_all(&dir).ok();
        fs::remove_file(dir.join("users.json")).ok();

        assert!(RecordStore::from_json_dir(&dir).is_err());

        fs::remove_dir_all(&dir).ok();
    }
}
