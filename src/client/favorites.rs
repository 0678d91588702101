use crate::client::ListTab;
use crate::domain::service::coin_list_service::EMPTY_IDS_SENTINEL;

/// User-local set of favorited coin ids, created once at app start and
/// mutated by favorite/unfavorite calls. Never server-persisted. Insertion
/// order is kept so the wire value is stable across calls.
#[derive(Debug, Clone, Default)]
pub struct FavoriteStore {
    ids: Vec<String>,
}

impl FavoriteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn favorite(&mut self, id: &str) {
        if !self.is_favorite(id) {
            self.ids.push(id.to_string());
        }
    }

    pub fn unfavorite(&mut self, id: &str) {
        self.ids.retain(|existing| existing != id);
    }

    /// Flip the state of one id; returns whether it is now favorited.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.is_favorite(id) {
            self.unfavorite(id);
            false
        } else {
            self.favorite(id);
            true
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Wire value of the `ids` parameter for a tab: absent on the all-tab,
    /// the comma-joined set on the favorites tab, and the empty sentinel when
    /// the favorites tab has nothing in it.
    pub fn ids_param(&self, tab: ListTab) -> Option<String> {
        match tab {
            ListTab::All => None,
            ListTab::Favorites if self.ids.is_empty() => Some(EMPTY_IDS_SENTINEL.to_string()),
            ListTab::Favorites => Some(self.ids.join(",")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        let mut store = FavoriteStore::new();
        assert!(store.toggle("bitcoin"));
        assert!(store.is_favorite("bitcoin"));
        assert!(!store.toggle("bitcoin"));
        assert!(!store.is_favorite("bitcoin"));
    }

    #[test]
    fn favorite_is_idempotent() {
        let mut store = FavoriteStore::new();
        store.favorite("bitcoin");
        store.favorite("bitcoin");
        assert_eq!(store.ids(), ["bitcoin"]);
    }

    #[test]
    fn ids_param_matches_the_active_tab() {
        let mut store = FavoriteStore::new();
        assert_eq!(store.ids_param(ListTab::All), None);
        assert_eq!(store.ids_param(ListTab::Favorites), Some("__EMPTY__".to_string()));

        store.favorite("bitcoin");
        store.favorite("ethereum");
        assert_eq!(store.ids_param(ListTab::All), None);
        assert_eq!(store.ids_param(ListTab::Favorites), Some("bitcoin,ethereum".to_string()));
    }
}
