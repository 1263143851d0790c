//! Drink Card Component
//!
//! One search result with "Add to Group" and "Details" actions.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::DrinkCard;

#[component]
pub fn DrinkCardView(card: DrinkCard) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let DrinkCard { id, name, thumbnail, category, excerpt, in_group } = card;
    let add_name = name.clone();

    view! {
        <div class="drink-card">
            <img src=thumbnail class="card-img" alt=name.clone() />
            <span class="category-badge">{category}</span>
            <div class="card-body">
                <h5 class="card-title">{name}</h5>
                <p class="card-text">{excerpt}</p>
                <div class="card-actions">
                    <button
                        class=if in_group { "btn btn-secondary" } else { "btn btn-primary" }
                        disabled=in_group
                        on:click=move |_| ctx.add_to_group(&add_name)
                    >
                        {if in_group { "Already Added" } else { "Add to Group" }}
                    </button>
                    <button
                        class="btn btn-outline"
                        on:click=move |_| ctx.show_detail(id.clone())
                    >
                        "Details"
                    </button>
                </div>
            </div>
        </div>
    }
}
