//! Group Panel Component
//!
//! Sidebar listing the selected drinks with their count and remove buttons.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn GroupPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let names = move || store.group().read().names().to_vec();
    let is_empty = move || store.group().read().is_empty();

    view! {
        <aside class="group-panel">
            <h2 class="group-heading">
                "My Group "
                <span class="drink-count">{move || store.group().read().count_label()}</span>
            </h2>
            <ul class="group-list">
                <Show
                    when=move || !is_empty()
                    fallback=|| view! { <li class="group-item empty">"No drinks selected"</li> }
                >
                    <For
                        each=names
                        key=|name| name.clone()
                        children=move |name| {
                            let remove_name = name.clone();
                            view! {
                                <li class="group-item">
                                    <span>{name}</span>
                                    <button
                                        class="remove-btn"
                                        title="Remove from group"
                                        on:click=move |_| ctx.remove_from_group(&remove_name)
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        }
                    />
                </Show>
            </ul>
        </aside>
    }
}
