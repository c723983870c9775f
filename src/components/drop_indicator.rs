//! Drop Indicator Component
//!
//! Thin marker before a card (or at the end of a lane). Lit while it is the
//! nearest insertion point of an active drag.

use board_core::CardId;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_dragdrop::{IndicatorRegistry, IndicatorSlot, ZoneSignals};

#[component]
pub fn DropIndicator(
    /// Card this marker precedes, or the lane end
    target: IndicatorSlot<CardId>,
    registry: IndicatorRegistry<CardId>,
    zone: ZoneSignals<CardId>,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let token = registry.register(target.clone(), node_ref);
    on_cleanup(move || registry.unregister(token));

    let tag = target.to_string();
    let indicator_class = move || {
        if zone.is_highlighted(&target) { "drop-indicator active" } else { "drop-indicator" }
    };

    view! {
        <div node_ref=node_ref class=indicator_class data-before=tag />
    }
}
