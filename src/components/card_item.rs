//! Card Item Component

use board_core::{Card, PAYLOAD_FORMAT};
use leptos::prelude::*;
use leptos_dragdrop::write_payload;
use web_sys::DragEvent;

/// A draggable card; puts its id in the drag payload
#[component]
pub fn CardItem(card: Card) -> impl IntoView {
    let id = card.id.to_string();

    let on_dragstart = move |ev: DragEvent| {
        if !write_payload(&ev, PAYLOAD_FORMAT, &id) {
            log::warn!("could not attach card {} to the drag", id);
        }
    };

    view! {
        <div class="card" draggable="true" on:dragstart=on_dragstart>
            <p class="card-title">{card.title}</p>
        </div>
    }
}
