//! Detail Modal Component
//!
//! Overlay with the full record of one drink. Closed by the × button or a
//! click on the backdrop.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::detail;
use crate::models::Drink;
use crate::store::AppStateStoreFields;

#[component]
pub fn DetailModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    view! {
        {move || store.detail().get().map(|drink| view! {
            <div class="modal-backdrop" on:click=move |_| ctx.close_detail()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <DetailBody drink=drink />
                </div>
            </div>
        })}
    }
}

#[component]
fn DetailBody(drink: Drink) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let rows = detail::rows(&drink);
    let ingredients: Vec<String> = drink
        .ingredients
        .iter()
        .map(|i| detail::ingredient_line(&i.name, i.measure.as_deref()))
        .collect();

    view! {
        <div class="modal-header">
            <h3 class="modal-title">{drink.name.clone()}</h3>
            <button class="close-btn" on:click=move |_| ctx.close_detail()>"×"</button>
        </div>
        <img
            class="modal-image"
            src=drink.thumbnail.clone().unwrap_or_default()
            alt=drink.name.clone()
        />
        <dl class="detail-list">
            {rows.into_iter().map(|(label, value)| view! {
                <dt>{label}</dt>
                <dd>{value}</dd>
            }).collect_view()}
        </dl>
        {(!ingredients.is_empty()).then(|| view! {
            <h4>"Ingredients"</h4>
            <ul class="ingredient-list">
                {ingredients.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        })}
    }
}
