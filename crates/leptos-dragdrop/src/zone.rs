//! Drop Zone State Machine
//!
//! Tracks whether a drag hovers a zone and which slot is highlighted.
//! Driven by plain method calls so it can be exercised without a DOM.

use crate::indicator::{nearest, Anchor, IndicatorSlot};

/// Visual phase of a drop zone
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZonePhase {
    #[default]
    Idle,
    DraggingOver,
}

/// Per-zone drag state
#[derive(Clone, Debug)]
pub struct DragZone<K> {
    phase: ZonePhase,
    highlighted: Option<IndicatorSlot<K>>,
}

impl<K> Default for DragZone<K> {
    fn default() -> Self {
        Self {
            phase: ZonePhase::Idle,
            highlighted: None,
        }
    }
}

impl<K: Clone> DragZone<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ZonePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == ZonePhase::DraggingOver
    }

    /// The one highlighted slot, if any
    pub fn highlighted(&self) -> Option<&IndicatorSlot<K>> {
        self.highlighted.as_ref()
    }

    /// Drag entered the zone; no slot tracking
    pub fn enter(&mut self) {
        self.phase = ZonePhase::DraggingOver;
    }

    /// Drag moved over the zone: re-pick the nearest slot
    pub fn drag_over(&mut self, anchors: &[Anchor<K>], pointer_y: f64) {
        self.enter();
        self.highlighted = nearest(anchors, pointer_y).map(|a| a.slot.clone());
    }

    /// Drag left the zone without dropping
    pub fn drag_leave(&mut self) {
        self.reset();
    }

    /// Drop happened: resolve the target slot and return to idle.
    ///
    /// A zone without anchors resolves to the end slot.
    pub fn drop(&mut self, anchors: &[Anchor<K>], pointer_y: f64) -> IndicatorSlot<K> {
        self.reset();
        nearest(anchors, pointer_y)
            .map(|a| a.slot.clone())
            .unwrap_or(IndicatorSlot::End)
    }

    /// Back to idle with no highlight
    pub fn reset(&mut self) {
        self.phase = ZonePhase::Idle;
        self.highlighted = None;
    }
}
