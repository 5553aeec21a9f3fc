// 🔍 Filter Engine - Owner, query, and category predicates over goods
//
// The three predicates AND together; inside each one, matching any allowed
// value suffices. Goods with an absent joined field never match a filter
// that needs that field.

use std::collections::HashSet;

use crate::goods::Good;

// ============================================================================
// OWNER FILTER
// ============================================================================

/// Owner tab selection: everything, or a single user by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerFilter {
    /// No owner restriction
    All,

    /// Only goods whose category is owned by this user
    Name(String),
}

impl OwnerFilter {
    pub fn matches(&self, good: &Good) -> bool {
        match self {
            OwnerFilter::All => true,
            // Absent user never matches a concrete owner
            OwnerFilter::Name(name) => good
                .user
                .as_ref()
                .map_or(false, |user| user.name == *name),
        }
    }
}

// ============================================================================
// CATEGORY SELECTION
// ============================================================================

/// Multi-select category state
///
/// The "All" sentinel and concrete titles are mutually exclusive by
/// construction; `Titles` is kept non-empty by the transitions below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelection {
    /// No category restriction
    All,

    /// Only goods in one of these categories (never empty)
    Titles(HashSet<String>),
}

impl CategorySelection {
    /// Toggle one category title.
    ///
    /// From All, the clicked title becomes the sole selection. Re-clicking
    /// a selected title removes it; removing the last one reverts to All.
    /// Clicking an unselected title adds it.
    pub fn toggle(&mut self, title: &str) {
        match self {
            CategorySelection::All => {
                let mut titles = HashSet::new();
                titles.insert(title.to_string());
                *self = CategorySelection::Titles(titles);
            }
            CategorySelection::Titles(titles) => {
                if titles.contains(title) {
                    titles.remove(title);
                    if titles.is_empty() {
                        *self = CategorySelection::All;
                    }
                } else {
                    titles.insert(title.to_string());
                }
            }
        }

        debug_assert!(self.is_valid());
    }

    /// The sentinel transition: clicking "All" always clears the selection
    pub fn select_all(&mut self) {
        *self = CategorySelection::All;
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }

    pub fn contains(&self, title: &str) -> bool {
        match self {
            CategorySelection::All => false,
            CategorySelection::Titles(titles) => titles.contains(title),
        }
    }

    pub fn matches(&self, good: &Good) -> bool {
        match self {
            CategorySelection::All => true,
            // Absent category never matches a concrete selection
            CategorySelection::Titles(titles) => good
                .category
                .as_ref()
                .map_or(false, |category| titles.contains(&category.title)),
        }
    }

    /// Invariant: `Titles` is never empty
    pub fn is_valid(&self) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Titles(titles) => !titles.is_empty(),
        }
    }
}

// ============================================================================
// FILTER STATE
// ============================================================================

/// The current filter selections, owned by the session
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Owner tab ("All" or a user name)
    pub owner: OwnerFilter,

    /// Raw search input, compared case-insensitively, never trimmed
    pub query: String,

    /// Category multi-select
    pub categories: CategorySelection,
}

impl FilterState {
    pub fn new() -> Self {
        FilterState {
            owner: OwnerFilter::All,
            query: String::new(),
            categories: CategorySelection::All,
        }
    }

    /// Reset-all-filters action: back to the default state in one step
    pub fn reset(&mut self) {
        *self = FilterState::new();
    }

    pub fn set_owner(&mut self, owner: OwnerFilter) {
        self.owner = owner;
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// True when no filter restricts anything
    pub fn is_default(&self) -> bool {
        self.owner == OwnerFilter::All && self.query.is_empty() && self.categories.is_all()
    }

    /// Case-insensitive substring match on the product name
    fn query_matches(&self, good: &Good) -> bool {
        self.query.is_empty()
            || good
                .name
                .to_lowercase()
                .contains(&self.query.to_lowercase())
    }

    /// All three predicates must pass
    pub fn matches(&self, good: &Good) -> bool {
        self.owner.matches(good) && self.query_matches(good) && self.categories.matches(good)
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// FILTER ENGINE
// ============================================================================

/// Derive the visible subset of goods for the given filter state.
///
/// Pure: preserves input order, never mutates `goods`. Small inputs, so the
/// full list is re-filtered on every state change.
pub fn visible(goods: &[Good], state: &FilterState) -> Vec<Good> {
    goods
        .iter()
        .filter(|good| state.matches(good))
        .cloned()
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
