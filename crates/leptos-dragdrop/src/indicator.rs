//! Drop Indicators
//!
//! Insertion slots between draggable items and nearest-slot search.

use std::fmt;

/// Wire tag of the slot that sits after the last item of a zone
pub const END_TAG: &str = "-1";

/// Insertion point inside a drop zone
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndicatorSlot<K> {
    /// Insert immediately before the item with this key
    Before(K),
    /// Append after the last item
    End,
}

impl<K> IndicatorSlot<K> {
    pub fn is_end(&self) -> bool {
        matches!(self, IndicatorSlot::End)
    }

    /// Key of the item that follows this slot, if any
    pub fn before(&self) -> Option<&K> {
        match self {
            IndicatorSlot::Before(key) => Some(key),
            IndicatorSlot::End => None,
        }
    }
}

impl<K: From<String>> IndicatorSlot<K> {
    /// Parse a wire tag (`"-1"` = end)
    pub fn from_tag(tag: &str) -> Self {
        if tag == END_TAG {
            IndicatorSlot::End
        } else {
            IndicatorSlot::Before(K::from(tag.to_string()))
        }
    }
}

impl<K: fmt::Display> fmt::Display for IndicatorSlot<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorSlot::Before(key) => write!(f, "{}", key),
            IndicatorSlot::End => f.write_str(END_TAG),
        }
    }
}

/// A slot with the measured vertical center of its marker
#[derive(Clone, Debug, PartialEq)]
pub struct Anchor<K> {
    pub slot: IndicatorSlot<K>,
    pub center_y: f64,
}

impl<K> Anchor<K> {
    pub fn new(slot: IndicatorSlot<K>, center_y: f64) -> Self {
        Self { slot, center_y }
    }
}

/// Anchor whose center is closest to `pointer_y`.
///
/// Ties go to the anchor encountered first.
pub fn nearest<K>(anchors: &[Anchor<K>], pointer_y: f64) -> Option<&Anchor<K>> {
    let mut best: Option<(&Anchor<K>, f64)> = None;
    for anchor in anchors {
        let distance = (pointer_y - anchor.center_y).abs();
        match best {
            Some((_, min)) if distance >= min => {}
            _ => best = Some((anchor, distance)),
        }
    }
    best.map(|(anchor, _)| anchor)
}
