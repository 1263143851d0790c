//! Search Bar Component
//!
//! Free-text drink search. Submitting (button or Enter) searches the trimmed
//! input; blank input does nothing.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (input, set_input) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_search(&input.get());
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                type="text"
                placeholder="Search for a drink..."
                prop:value=move || input.get()
                on:input=move |ev| set_input.set(event_target_value(&ev))
            />
            <button type="submit">"Search"</button>
        </form>
    }
}
