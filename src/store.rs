//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::group::Group;
use crate::models::Drink;
use crate::notice::{self, Notice, NoticeKind};
use crate::search::{RequestTracker, SearchView, Ticket};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Selected drink names
    pub group: Group,
    /// Results area
    pub results: SearchView,
    /// Last non-empty term submitted through the search bar
    pub last_term: Option<String>,
    /// Ticket counter for overlapping searches
    pub requests: RequestTracker,
    /// Toast currently shown
    pub notice: Option<Notice>,
    /// Last notice id handed out
    pub notice_seq: u32,
    /// Drink shown in the detail overlay
    pub detail: Option<Drink>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            group: Group::with_capacity(config.max_group_size),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show the loading state and take a ticket for the new request
pub fn store_begin_search(store: &AppStore) -> Ticket {
    store.results().set(SearchView::Loading);
    store.requests().write().issue()
}

/// Apply a finished search unless a newer one was started; returns whether applied
pub fn store_finish_search(store: &AppStore, ticket: Ticket, view: SearchView) -> bool {
    if !store.requests().with_untracked(|r| r.is_current(ticket)) {
        return false;
    }
    store.results().set(view);
    true
}

/// Result of a group mutation: the notice to show and whether the results
/// must be searched again
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupChange {
    pub kind: NoticeKind,
    pub message: String,
    pub refresh: bool,
}

/// Add `name`; rejected adds leave the results alone
pub fn store_add_to_group(store: &AppStore, name: &str) -> GroupChange {
    let outcome = store.group().write().add(name);
    let (kind, message) = notice::added(name, &outcome);
    GroupChange {
        kind,
        message,
        refresh: outcome.is_ok(),
    }
}

/// Remove `name`; the results are refreshed even when it was absent
pub fn store_remove_from_group(store: &AppStore, name: &str) -> GroupChange {
    let removed = store.group().write().remove(name);
    let (kind, message) = notice::removed(name, removed);
    GroupChange {
        kind,
        message,
        refresh: true,
    }
}

/// Replace the visible notice; returns its id
pub fn store_push_notice(store: &AppStore, kind: NoticeKind, message: String) -> u32 {
    let seq = store.notice_seq();
    seq.update(|n| *n += 1);
    let id = seq.get_untracked();
    store.notice().set(Some(Notice::new(id, kind, message)));
    id
}

/// Hide notice `id` if it is still the one shown
pub fn store_dismiss_notice(store: &AppStore, id: u32) {
    let showing = store
        .notice()
        .with_untracked(|n| n.as_ref().map(|n| n.id) == Some(id));
    if showing {
        store.notice().set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_store() -> (Owner, AppStore) {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::new(&AppConfig::default()));
        (owner, store)
    }

    #[test]
    fn test_superseded_search_is_not_applied() {
        let (_owner, store) = new_store();
        let first = store_begin_search(&store);
        let second = store_begin_search(&store);

        assert!(!store_finish_search(&store, first, SearchView::NotFound));
        assert_eq!(store.results().get_untracked(), SearchView::Loading);

        assert!(store_finish_search(&store, second, SearchView::Failed));
        assert_eq!(store.results().get_untracked(), SearchView::Failed);
    }

    #[test]
    fn test_add_refreshes_only_when_accepted() {
        let (_owner, store) = new_store();
        let change = store_add_to_group(&store, "Mojito");
        assert_eq!(change.kind, NoticeKind::Success);
        assert!(change.refresh);

        let change = store_add_to_group(&store, "Mojito");
        assert_eq!(change.kind, NoticeKind::Warning);
        assert!(!change.refresh);
        assert_eq!(store.group().read_untracked().len(), 1);
    }

    #[test]
    fn test_full_group_stays_full_after_changes() {
        let (_owner, store) = new_store();
        for i in 0..7 {
            assert!(store_add_to_group(&store, &format!("Drink {}", i)).refresh);
        }
        assert!(store_remove_from_group(&store, "Drink 3").refresh);
        assert!(store_add_to_group(&store, "Drink 7").refresh);

        let change = store_add_to_group(&store, "Drink 8");
        assert!(!change.refresh);
        assert_eq!(change.message, "You cannot add more than 7 drinks to the group!");
        let group = store.group().get_untracked();
        assert_eq!(group.len(), 7);
        assert!(!group.contains("Drink 8"));
    }

    #[test]
    fn test_remove_absent_still_refreshes() {
        let (_owner, store) = new_store();
        let change = store_remove_from_group(&store, "Missing");
        assert_eq!(change.kind, NoticeKind::Info);
        assert!(change.refresh);
        assert!(store.group().get_untracked().is_empty());
    }

    #[test]
    fn test_dismiss_only_hides_matching_notice() {
        let (_owner, store) = new_store();
        let first = store_push_notice(&store, NoticeKind::Success, "one".to_string());
        let second = store_push_notice(&store, NoticeKind::Warning, "two".to_string());
        assert_eq!(second, first + 1);

        store_dismiss_notice(&store, first);
        let shown = store.notice().get_untracked().map(|n| n.message);
        assert_eq!(shown.as_deref(), Some("two"));

        store_dismiss_notice(&store, second);
        assert_eq!(store.notice().get_untracked(), None);
    }
}
