//! Cross-page selection of artworks
//!
//! The store maps artwork IDs to the full artwork so the selection panel
//! can show entries whose page is no longer loaded. Entries keep the order
//! in which they were first selected.

use std::collections::HashSet;

use super::data::Artwork;

/// Insertion-ordered set of selected artworks, keyed by ID
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    /// Selected artworks in selection order
    entries: Vec<Artwork>,
    /// IDs of everything in `entries`, for fast membership checks
    ids: HashSet<i64>,
}

impl SelectionStore {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the artwork if it isn't selected, deselect it otherwise
    pub fn toggle(&mut self, artwork: &Artwork) {
        if self.is_selected(artwork.id) {
            self.remove(artwork.id);
        } else {
            self.insert(artwork);
        }
    }

    /// Select (`included == true`) or deselect every artwork in `artworks`
    ///
    /// Used by the header checkbox to select or clear the visible page.
    pub fn set_membership(&mut self, artworks: &[Artwork], included: bool) {
        for artwork in artworks {
            if included {
                self.insert(artwork);
            } else {
                self.remove(artwork.id);
            }
        }
    }

    /// Deselect an artwork by ID. Does nothing if it isn't selected.
    pub fn remove(&mut self, id: i64) {
        if self.ids.remove(&id) {
            self.entries.retain(|art| art.id != id);
        }
    }

    /// Select the first `n` artworks of `artworks`
    ///
    /// `n` larger than the slice selects the whole slice.
    pub fn select_first_n(&mut self, artworks: &[Artwork], n: usize) {
        let count = n.min(artworks.len());
        for artwork in &artworks[..count] {
            self.insert(artwork);
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// True when `artworks` is non-empty and every one of them is selected
    pub fn all_selected(&self, artworks: &[Artwork]) -> bool {
        !artworks.is_empty() && artworks.iter().all(|art| self.is_selected(art.id))
    }

    /// Selected artworks in the order they were selected
    pub fn values(&self) -> impl Iterator<Item = &Artwork> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add an artwork, keeping its original position if already selected
    fn insert(&mut self, artwork: &Artwork) {
        if self.ids.insert(artwork.id) {
            self.entries.push(artwork.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn page(ids: std::ops::RangeInclusive<i64>) -> Vec<Artwork> {
        ids.map(|id| Artwork::new(id, format!("Artwork {}", id))).collect()
    }

    fn selected_ids(store: &SelectionStore) -> Vec<i64> {
        store.values().map(|art| art.id).collect()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut store = SelectionStore::new();
        let art = Artwork::new(3, "Nighthawks");

        store.toggle(&art);
        assert!(store.is_selected(3));
        assert_eq!(store.len(), 1);

        store.toggle(&art);
        assert!(!store.is_selected(3));
        assert!(store.is_empty());
    }

    #[test]
    fn test_selection_across_pages_scenario() {
        let mut store = SelectionStore::new();

        let page_0 = page(1..=5);
        store.toggle(&page_0[2]);
        assert_eq!(selected_ids(&store), vec![3]);

        let page_1 = page(6..=10);
        store.toggle(&page_1[1]);
        assert_eq!(selected_ids(&store), vec![3, 7]);

        // Page 0 is gone, but its selection is still here
        assert!(store.is_selected(3));

        store.remove(3);
        assert_eq!(selected_ids(&store), vec![7]);
    }

    #[test]
    fn test_select_first_n_is_clamped() {
        let mut store = SelectionStore::new();
        let artworks = page(1..=5);

        store.select_first_n(&artworks, 8);

        assert_eq!(selected_ids(&store), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_select_first_zero_selects_nothing() {
        let mut store = SelectionStore::new();
        store.select_first_n(&page(1..=5), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_header_toggle_on_empty_page_is_noop() {
        let mut store = SelectionStore::new();
        store.toggle(&Artwork::new(42, "The Old Guitarist"));

        store.set_membership(&[], true);
        assert_eq!(selected_ids(&store), vec![42]);

        store.set_membership(&[], false);
        assert_eq!(selected_ids(&store), vec![42]);
    }

    #[test]
    fn test_all_selected_is_false_for_empty_page() {
        let store = SelectionStore::new();
        assert!(!store.all_selected(&[]));
    }

    #[test]
    fn test_all_selected_tracks_visible_page() {
        let mut store = SelectionStore::new();
        let artworks = page(1..=3);

        store.select_first_n(&artworks, 2);
        assert!(!store.all_selected(&artworks));

        store.toggle(&artworks[2]);
        assert!(store.all_selected(&artworks));
    }

    #[test]
    fn test_reselect_keeps_original_position() {
        let mut store = SelectionStore::new();
        let artworks = page(1..=3);

        store.toggle(&artworks[1]);
        store.toggle(&artworks[0]);
        store.set_membership(&artworks, true);

        assert_eq!(selected_ids(&store), vec![2, 1, 3]);
    }

    proptest! {
        #[test]
        fn prop_double_toggle_restores_membership(
            preselected in proptest::collection::vec(0i64..20, 0..10),
            id in 0i64..20,
        ) {
            let mut store = SelectionStore::new();
            for pre in &preselected {
                store.set_membership(&[Artwork::new(*pre, "pre")], true);
            }
            let before = store.is_selected(id);
            let art = Artwork::new(id, "target");

            store.toggle(&art);
            store.toggle(&art);

            prop_assert_eq!(store.is_selected(id), before);
        }

        #[test]
        fn prop_set_membership_applies_to_every_record(
            ids in proptest::collection::vec(0i64..50, 0..15),
            included in any::<bool>(),
        ) {
            let artworks: Vec<Artwork> = ids.iter().map(|id| Artwork::new(*id, "x")).collect();
            let mut store = SelectionStore::new();
            store.select_first_n(&artworks, artworks.len() / 2);

            store.set_membership(&artworks, included);

            for art in &artworks {
                prop_assert_eq!(store.is_selected(art.id), included);
            }
        }

        #[test]
        fn prop_select_first_n_takes_prefix_in_order(len in 0i64..12, n in 0usize..20) {
            let artworks: Vec<Artwork> = (1..=len).map(|id| Artwork::new(id, "x")).collect();
            let mut store = SelectionStore::new();

            store.select_first_n(&artworks, n);

            let expected: Vec<i64> = artworks.iter().take(n).map(|art| art.id).collect();
            prop_assert_eq!(selected_ids(&store), expected);
        }

        #[test]
        fn prop_remove_always_deselects(
            ids in proptest::collection::vec(0i64..20, 0..10),
            id in 0i64..20,
        ) {
            let artworks: Vec<Artwork> = ids.iter().map(|id| Artwork::new(*id, "x")).collect();
            let mut store = SelectionStore::new();
            store.set_membership(&artworks, true);

            store.remove(id);

            prop_assert!(!store.is_selected(id));
        }
    }
}
