//! Cocktail Group App
//!
//! Main application component: search results on the left, the group on the
//! right, detail overlay and toast on top.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{CocktailDb, DrinkSource};
use crate::components::{DetailModal, DrinkGrid, GroupPanel, SearchBar, Toast};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    let store = Store::new(AppState::new(&config));
    let source: Arc<dyn DrinkSource> = Arc::new(CocktailDb::new(config.api_base.clone()));
    let ctx = AppContext::new(store, source, config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Initial results on mount
    Effect::new(move |_| {
        let term = ctx.default_term();
        log::info!("initial search for {:?}", term);
        ctx.search(term);
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Cocktail Group"</h1>
                <SearchBar />
                <DrinkGrid />
            </main>

            <GroupPanel />

            <DetailModal />
            <Toast />
        </div>
    }
}
