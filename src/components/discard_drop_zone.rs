//! Discard Drop Zone Component
//!
//! Dropping a card here deletes it.

use board_core::{DiscardZone, PAYLOAD_FORMAT};
use leptos::prelude::*;
use leptos_dragdrop::read_payload;
use web_sys::DragEvent;

use crate::context::use_board;

#[component]
pub fn DiscardDropZone() -> impl IntoView {
    let ctx = use_board();
    let zone = StoredValue::new(DiscardZone::new());
    let (armed, set_armed) = signal(false);

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        zone.update_value(|z| z.drag_over());
        set_armed.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        zone.update_value(|z| z.drag_leave());
        set_armed.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let payload = read_payload(&ev, PAYLOAD_FORMAT);
        let mut discard = zone.get_value();
        if ctx.commit(|board| discard.drop(board, payload.as_deref())) {
            log::info!("card {:?} discarded", payload);
        }
        set_armed.set(discard.is_armed());
        zone.set_value(discard);
    };

    view! {
        <div
            class=move || if armed.get() { "discard-zone armed" } else { "discard-zone" }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <span class="discard-icon">{move || if armed.get() { "🔥" } else { "🗑" }}</span>
        </div>
    }
}
