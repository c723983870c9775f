//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop helpers for Leptos.
//! Drop zones render explicit indicator markers between items; the nearest
//! marker to the pointer decides where a dropped item lands.

mod indicator;
mod zone;

use leptos::html::Div;
use leptos::prelude::*;

pub use indicator::{nearest, Anchor, IndicatorSlot, END_TAG};
pub use zone::{DragZone, ZonePhase};

/// Reactive mirror of a [`DragZone`] for rendering
pub struct ZoneSignals<K: Send + Sync + 'static> {
    pub active: RwSignal<bool>,
    pub highlighted: RwSignal<Option<IndicatorSlot<K>>>,
}

impl<K: Send + Sync + 'static> Clone for ZoneSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static> Copy for ZoneSignals<K> {}

impl<K: Clone + PartialEq + Send + Sync + 'static> ZoneSignals<K> {
    /// Push the zone's current state into the signals
    pub fn sync(&self, zone: &DragZone<K>) {
        if self.active.get_untracked() != zone.is_active() {
            self.active.set(zone.is_active());
        }
        let next = zone.highlighted().cloned();
        if self.highlighted.get_untracked() != next {
            self.highlighted.set(next);
        }
    }

    /// Is this slot the highlighted one?
    pub fn is_highlighted(&self, slot: &IndicatorSlot<K>) -> bool {
        self.highlighted.with(|h| h.as_ref() == Some(slot))
    }
}

pub fn create_zone_signals<K: Send + Sync + 'static>() -> ZoneSignals<K> {
    ZoneSignals {
        active: RwSignal::new(false),
        highlighted: RwSignal::new(None),
    }
}

struct Registration<K> {
    token: u64,
    slot: IndicatorSlot<K>,
    node: NodeRef<Div>,
}

/// Indicator markers rendered inside one drop zone.
///
/// Markers register themselves when mounted; the zone measures them at
/// event time in the order given by its own slot list.
pub struct IndicatorRegistry<K: 'static> {
    entries: StoredValue<Vec<Registration<K>>, LocalStorage>,
    next_token: StoredValue<u64>,
}

impl<K: 'static> Clone for IndicatorRegistry<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: 'static> Copy for IndicatorRegistry<K> {}

impl<K: Clone + PartialEq + 'static> IndicatorRegistry<K> {
    pub fn new() -> Self {
        Self {
            entries: StoredValue::new_local(Vec::new()),
            next_token: StoredValue::new(0),
        }
    }

    /// Register a marker; returns the token to unregister it with
    pub fn register(&self, slot: IndicatorSlot<K>, node: NodeRef<Div>) -> u64 {
        let token = self.next_token.get_value();
        self.next_token.set_value(token + 1);
        self.entries.update_value(|entries| {
            entries.retain(|r| r.slot != slot);
            entries.push(Registration { token, slot, node });
        });
        token
    }

    /// Remove a marker; a newer registration for the same slot is kept
    pub fn unregister(&self, token: u64) {
        self.entries
            .try_update_value(|entries| entries.retain(|r| r.token != token));
    }

    /// Measure the markers for `slots`, in that order.
    ///
    /// Slots without a mounted marker are skipped.
    pub fn anchors(&self, slots: &[IndicatorSlot<K>]) -> Vec<Anchor<K>> {
        self.anchors_with(slots, |_, node| {
            node.get_untracked().map(|el| vertical_center(&el))
        })
    }

    /// Like [`anchors`](Self::anchors) with a custom measurement;
    /// `measure` returns `None` for markers that cannot be placed.
    pub fn anchors_with<F>(&self, slots: &[IndicatorSlot<K>], measure: F) -> Vec<Anchor<K>>
    where
        F: Fn(&IndicatorSlot<K>, &NodeRef<Div>) -> Option<f64>,
    {
        self.entries
            .try_with_value(|entries| {
                slots
                    .iter()
                    .filter_map(|slot| {
                        let reg = entries.iter().find(|r| &r.slot == slot)?;
                        let center_y = measure(slot, &reg.node)?;
                        Some(Anchor::new(slot.clone(), center_y))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl<K: Clone + PartialEq + 'static> Default for IndicatorRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Vertical center of an element in viewport coordinates
pub fn vertical_center(el: &web_sys::Element) -> f64 {
    let rect = el.get_bounding_client_rect();
    rect.top() + rect.height() / 2.0
}

/// Pointer y in viewport coordinates
pub fn pointer_y(ev: &web_sys::DragEvent) -> f64 {
    ev.client_y() as f64
}

/// Put `value` in the drag payload under `format`
pub fn write_payload(ev: &web_sys::DragEvent, format: &str, value: &str) -> bool {
    ev.data_transfer()
        .map(|dt| dt.set_data(format, value).is_ok())
        .unwrap_or(false)
}

/// Read the drag payload for `format`; empty payloads count as absent
pub fn read_payload(ev: &web_sys::DragEvent, format: &str) -> Option<String> {
    ev.data_transfer()
        .and_then(|dt| dt.get_data(format).ok())
        .filter(|value| !value.is_empty())
}
