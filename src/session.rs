// 🧭 Catalog Session - One UI session of filter state over the goods list
//
// The goods list is computed once and never changes; every mutator applies
// exactly one state transition and synchronously recomputes the visible
// list before returning, so a renderer only ever reads a complete result.

use crate::filter::{visible, FilterState, OwnerFilter};
use crate::goods::Good;

// ============================================================================
// CATALOG SESSION
// ============================================================================

pub struct CatalogSession {
    goods: Vec<Good>,
    state: FilterState,
    visible: Vec<Good>,
}

impl CatalogSession {
    pub fn new(goods: Vec<Good>) -> Self {
        let state = FilterState::new();
        let visible = visible(&goods, &state);

        CatalogSession {
            goods,
            state,
            visible,
        }
    }

    // ========================================================================
    // READS
    // ========================================================================

    /// The full denormalized list, unfiltered
    pub fn goods(&self) -> &[Good] {
        &self.goods
    }

    /// The currently visible subset, in goods order
    pub fn visible(&self) -> &[Good] {
        &self.visible
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// The "no results" signal: false when the filters match nothing
    pub fn has_matches(&self) -> bool {
        !self.visible.is_empty()
    }

    // ========================================================================
    // TRANSITIONS (each one recomputes before returning)
    // ========================================================================

    pub fn set_owner(&mut self, owner: OwnerFilter) {
        self.state.set_owner(owner);
        self.recompute();
    }

    pub fn set_query(&mut self, query: &str) {
        self.state.set_query(query);
        self.recompute();
    }

    /// Append one typed character to the query
    pub fn push_query_char(&mut self, c: char) {
        self.state.query.push(c);
        self.recompute();
    }

    /// Remove the last typed character (Backspace)
    pub fn pop_query_char(&mut self) {
        self.state.query.pop();
        self.recompute();
    }

    pub fn clear_query(&mut self) {
        self.state.clear_query();
        self.recompute();
    }

    pub fn toggle_category(&mut self, title: &str) {
        self.state.categories.toggle(title);
        self.recompute();
    }

    pub fn select_all_categories(&mut self) {
        self.state.categories.select_all();
        self.recompute();
    }

    /// Reset-all-filters action
    pub fn reset_filters(&mut self) {
        self.state.reset();
        self.recompute();
    }

    fn recompute(&mut self) {
        debug_assert!(self.state.categories.is_valid());
        self.visible = visible(&self.goods, &self.state);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goods::denormalize;
    use crate::store::RecordStore;

    fn fixture_session() -> CatalogSession {
        let store = RecordStore::with_fixtures();
        CatalogSession::new(denormalize(&store))
    }

    #[test]
    fn test_new_session_shows_everything() {
        let session = fixture_session();

        assert_eq!(session.visible().len(), session.goods().len());
        assert!(session.has_matches());
        assert!(session.state().is_default());
    }

    #[test]
    fn test_every_mutator_recomputes() {
        let mut session = fixture_session();
        let all = session.goods().len();

        session.set_owner(OwnerFilter::Name("Anna".to_string()));
        assert!(session.visible().len() < all);
        for good in session.visible() {
            assert_eq!(good.user.as_ref().unwrap().name, "Anna");
        }

        session.set_owner(OwnerFilter::All);
        assert_eq!(session.visible().len(), all);

        session.toggle_category("Drinks");
        for good in session.visible() {
            assert_eq!(good.category.as_ref().unwrap().title, "Drinks");
        }

        session.select_all_categories();
        assert_eq!(session.visible().len(), all);
    }

    #[test]
    fn test_keystroke_granularity_query() {
        let mut session = fixture_session();

        session.push_query_char('m');
        session.push_query_char('i');
        session.push_query_char('l');
        assert_eq!(session.state().query, "mil");
        assert_eq!(session.visible().len(), 1);
        assert_eq!(session.visible()[0].name, "Milk");

        session.pop_query_char();
        assert_eq!(session.state().query, "mi");

        session.clear_query();
        assert_eq!(session.visible().len(), session.goods().len());
    }

    #[test]
    fn test_no_matches_signal() {
        let mut session = fixture_session();

        session.set_query("zzz");

        assert!(session.visible().is_empty());
        assert!(!session.has_matches());
    }

    #[test]
    fn test_reset_filters_restores_everything() {
        let mut session = fixture_session();

        session.set_owner(OwnerFilter::Name("Max".to_string()));
        session.set_query("milk");
        session.toggle_category("Drinks");

        session.reset_filters();

        assert!(session.state().is_default());
        assert_eq!(session.visible().len(), session.goods().len());
    }

    #[test]
    fn test_goods_list_is_stable_across_transitions() {
        let mut session = fixture_session();
        let snapshot = session.goods().to_vec();

        session.set_query("apple");
        session.toggle_category("Fruits");
        session.reset_filters();

        assert_eq!(session.goods(), snapshot.as_slice());
    }
}
