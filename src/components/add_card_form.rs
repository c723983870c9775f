//! Add Card Form Component
//!
//! Collapsed "Add card" button that opens a draft form for one lane.

use board_core::{CardDraft, Lane};
use leptos::prelude::*;

use crate::context::use_board;

#[component]
pub fn AddCardForm(lane: Lane) -> impl IntoView {
    let ctx = use_board();
    let draft = RwSignal::new(CardDraft::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut next = draft.get_untracked();
        ctx.commit(|board| next.submit(board, lane));
        draft.set(next);
    };

    let is_open = move || draft.with(|d| d.is_open());

    view! {
        <Show
            when=is_open
            fallback=move || view! {
                <button class="add-card-btn" on:click=move |_| draft.update(|d| d.open())>
                    "Add card +"
                </button>
            }
        >
            <form class="add-card-form" on:submit=on_submit>
                <textarea
                    autofocus=true
                    placeholder="Add new task..."
                    prop:value=move || draft.with(|d| d.text().to_string())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        draft.update(|d| d.set_text(text));
                    }
                />
                <div class="add-card-actions">
                    <button type="button" class="close-btn" on:click=move |_| draft.update(|d| d.close())>
                        "Close"
                    </button>
                    <button type="submit" class="submit-btn">"Add +"</button>
                </div>
            </form>
        </Show>
    }
}
