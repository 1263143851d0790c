//! Drink Grid Component
//!
//! Results area: loading spinner, error block, "not found" notice or one card
//! per drink.

use leptos::prelude::*;

use crate::components::DrinkCardView;
use crate::context::AppContext;
use crate::search::{self, SearchView};
use crate::store::AppStateStoreFields;

#[component]
pub fn DrinkGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;
    let excerpt_chars = ctx.config.with_value(|c| c.excerpt_chars);

    view! {
        <section class="drinks-container">
            {move || {
                let view = store.results().get();
                match &view {
                    SearchView::Idle => view! { <div></div> }.into_any(),
                    SearchView::Loading => view! {
                        <div class="loading"><span class="spinner"></span></div>
                    }.into_any(),
                    SearchView::Failed => view! {
                        <div class="alert alert-danger">"Error loading drinks. Please try again."</div>
                    }.into_any(),
                    SearchView::NotFound => view! {
                        <div class="not-found">"No drinks found. Try another search."</div>
                    }.into_any(),
                    SearchView::Results(_) => {
                        // Reading the group here re-renders the cards on every add/remove
                        let cards = search::cards(view.drinks(), &store.group().read(), excerpt_chars);
                        view! {
                            <div class="drink-grid">
                                {cards.into_iter().map(|card| view! { <DrinkCardView card=card /> }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }
            }}
        </section>
    }
}
