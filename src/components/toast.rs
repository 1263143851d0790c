//! Toast Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Shows the current notice, if any
#[component]
pub fn Toast() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.notice().get().map(|notice| view! {
            <div class=notice.kind.class() role="status">
                <div class="toast-body">{notice.message}</div>
            </div>
        })}
    }
}
