//! Application Context
//!
//! Shared handle provided via Leptos Context API. Owns the wiring between the
//! search results, the group and the notices; components call into it.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::DrinkSource;
use crate::config::AppConfig;
use crate::detail;
use crate::notice::NoticeKind;
use crate::search::{self, normalize_term, refresh_term};
use crate::store::{
    store_add_to_group, store_begin_search, store_dismiss_notice, store_finish_search,
    store_push_notice, store_remove_from_group, AppStateStoreFields, AppStore, GroupChange,
};

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    pub config: StoredValue<AppConfig>,
    source: StoredValue<Arc<dyn DrinkSource>>,
}

impl AppContext {
    pub fn new(store: AppStore, source: Arc<dyn DrinkSource>, config: AppConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            source: StoredValue::new(source),
        }
    }

    /// Search for what the user typed; blank input is ignored
    pub fn submit_search(&self, input: &str) {
        if let Some(term) = normalize_term(input) {
            self.store.last_term().set(Some(term.clone()));
            self.search(term);
        }
    }

    /// Replace the results with a fresh search for `term`
    pub fn search(&self, term: String) {
        let store = self.store;
        let source = self.source.get_value();
        let ticket = store_begin_search(&store);

        spawn_local(async move {
            let view = search::run(source.as_ref(), &term).await;
            if !store_finish_search(&store, ticket, view) {
                log::debug!("dropping superseded results for {:?} (ticket {})", term, ticket);
            }
        });
    }

    /// Re-run the last search so "already added" badges follow the group
    pub fn refresh(&self) {
        let last = self.store.last_term().get_untracked();
        let term = self
            .config
            .with_value(|c| refresh_term(last.as_deref(), &c.default_term).to_string());
        self.search(term);
    }

    /// Term searched when the page opens
    pub fn default_term(&self) -> String {
        self.config.with_value(|c| c.default_term.clone())
    }

    pub fn add_to_group(&self, name: &str) {
        let change = store_add_to_group(&self.store, name);
        log::info!("add {:?} to group (accepted: {})", name, change.refresh);
        self.apply(change);
    }

    pub fn remove_from_group(&self, name: &str) {
        let change = store_remove_from_group(&self.store, name);
        log::info!("remove {:?} from group", name);
        self.apply(change);
    }

    fn apply(&self, change: GroupChange) {
        if change.refresh {
            self.refresh();
        }
        self.notify(change.kind, change.message);
    }

    /// Open the overlay for drink `id` once its record arrives
    pub fn show_detail(&self, id: String) {
        let store = self.store;
        let source = self.source.get_value();
        spawn_local(async move {
            if let Some(drink) = detail::load(source.as_ref(), &id).await {
                store.detail().set(Some(drink));
            }
        });
    }

    pub fn close_detail(&self) {
        self.store.detail().set(None);
    }

    /// Show a toast that hides itself after the configured delay
    pub fn notify(&self, kind: NoticeKind, message: String) {
        let store = self.store;
        let id = store_push_notice(&store, kind, message);
        let delay = self.config.with_value(|c| c.notice_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            store_dismiss_notice(&store, id);
        });
    }
}
