//! Kanban UI App
//!
//! Loads the board once, provides it through context and switches between
//! the two demos.

use board_core::{BoardConfig, BoardState};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ActivityLog, DemoTabBar, KanbanBoard, RevealGrid};
use crate::context::BoardContext;
use crate::store::{open_browser_store, AppState, AppStateStoreFields, Demo};

#[component]
pub fn App() -> impl IntoView {
    // Initial load completes before anything can write
    let state = BoardState::open(open_browser_store(), &BoardConfig::default());
    let store = Store::new(AppState::new(state.board().clone()));

    provide_context(store);
    provide_context(BoardContext::new(store, state));

    view! {
        <div class="app-layout">
            <DemoTabBar />
            {move || match store.demo().get() {
                Demo::Board => view! { <KanbanBoard /> }.into_any(),
                Demo::Reveal => view! { <RevealGrid /> }.into_any(),
            }}
            <ActivityLog />
        </div>
    }
}
