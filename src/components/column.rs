//! Column Component
//!
//! One lane of the board. Owns the lane's drag-over/leave/drop handling;
//! the indicator markers register with the lane's registry so the nearest
//! one can be measured at event time.

use board_core::{CardId, ColumnView, Lane, PAYLOAD_FORMAT};
use leptos::prelude::*;
use leptos_dragdrop::*;
use web_sys::DragEvent;

use crate::components::{AddCardForm, CardItem, DropIndicator};
use crate::context::use_board;

#[component]
pub fn Column(lane: Lane) -> impl IntoView {
    let ctx = use_board();

    let column = StoredValue::new(ColumnView::new(lane));
    let zone = create_zone_signals::<CardId>();
    let registry = IndicatorRegistry::<CardId>::new();

    // Anchors in slot order for the current snapshot
    let measure = move || {
        let slots = ctx.with_board(|board| column.with_value(|c| c.slots(board)));
        registry.anchors(&slots)
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        let anchors = measure();
        column.update_value(|c| {
            c.drag_over(&anchors, pointer_y(&ev));
            zone.sync(c.zone());
        });
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        column.update_value(|c| {
            c.drag_leave();
            zone.sync(c.zone());
        });
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let anchors = measure();
        let payload = read_payload(&ev, PAYLOAD_FORMAT);
        let y = pointer_y(&ev);

        let mut view_state = column.get_value();
        if ctx.commit(|board| view_state.drop(board, payload.as_deref(), &anchors, y)) {
            log::debug!("[DND] drop on {}: card={:?}", lane, payload);
        }
        zone.sync(view_state.zone());
        column.set_value(view_state);
    };

    let cards = move || ctx.with_board(|board| board.column(lane).cloned().collect::<Vec<_>>());
    let count = move || ctx.with_board(|board| board.column_len(lane));
    let body_class = move || {
        if zone.active.get() { "column-body active" } else { "column-body" }
    };

    view! {
        <div class="column">
            <div class="column-header">
                <h3 class=format!("column-title {}", lane.heading_class())>{lane.title()}</h3>
                <span class="column-count">{count}</span>
            </div>
            <div
                class=body_class
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <For
                    each=cards
                    key=|card| card.id.clone()
                    children=move |card| {
                        view! {
                            <DropIndicator
                                target=IndicatorSlot::Before(card.id.clone())
                                registry=registry
                                zone=zone
                            />
                            <CardItem card=card />
                        }
                    }
                />
                <DropIndicator target=IndicatorSlot::End registry=registry zone=zone />
                <AddCardForm lane=lane />
            </div>
        </div>
    }
}
