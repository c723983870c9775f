//! Demo Tab Bar Component
//!
//! Switches between the kanban board and the hover reveal grid.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields, Demo};

#[component]
pub fn DemoTabBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="demo-tab-bar">
            {Demo::ALL.iter().map(|demo| {
                let demo = *demo;
                let tab_class = move || {
                    if store.demo().get() == demo { "demo-tab active" } else { "demo-tab" }
                };
                view! {
                    <button
                        class=tab_class
                        on:click=move |_| *store.demo().write() = demo
                    >
                        {demo.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
