//! Reveal Geometry
//!
//! Edge detection and clip-path keyframes for the hover reveal tiles.

/// Full box, nothing clipped
pub const NO_CLIP: &str = "polygon(0 0, 100% 0, 100% 100%, 0% 100%)";
pub const BOTTOM_RIGHT_CLIP: &str = "polygon(0 0, 100% 0, 0 0, 0% 100%)";
pub const TOP_RIGHT_CLIP: &str = "polygon(0 0, 0 100%, 100% 100%, 0 100%)";
pub const BOTTOM_LEFT_CLIP: &str = "polygon(100% 100%, 100% 0, 100% 100%, 0 100%)";
pub const TOP_LEFT_CLIP: &str = "polygon(0 0, 100% 0, 100% 100%, 100% 0)";

/// Resting overlay: fully collapsed
pub const HIDDEN_CLIP: &str = BOTTOM_RIGHT_CLIP;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Viewport rectangle of a tile
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl From<&web_sys::DomRect> for Rect {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            right: rect.right(),
            bottom: rect.bottom(),
        }
    }
}

/// Edge of `rect` closest to the pointer; ties go left, right, top, bottom
pub fn nearest_side(rect: Rect, x: f64, y: f64) -> Side {
    let distances = [
        (Side::Left, (rect.left - x).abs()),
        (Side::Right, (rect.right - x).abs()),
        (Side::Top, (rect.top - y).abs()),
        (Side::Bottom, (rect.bottom - y).abs()),
    ];
    let mut best = distances[0];
    for candidate in &distances[1..] {
        if candidate.1 < best.1 {
            best = *candidate;
        }
    }
    best.0
}

/// `(from, to)` frames when the pointer enters through `side`
pub fn entrance(side: Side) -> (&'static str, &'static str) {
    match side {
        Side::Right => (TOP_LEFT_CLIP, NO_CLIP),
        Side::Left | Side::Top | Side::Bottom => (BOTTOM_RIGHT_CLIP, NO_CLIP),
    }
}

/// `(from, to)` frames when the pointer leaves through `side`
pub fn exit(side: Side) -> (&'static str, &'static str) {
    match side {
        Side::Right => (NO_CLIP, BOTTOM_LEFT_CLIP),
        Side::Left | Side::Top | Side::Bottom => (NO_CLIP, TOP_RIGHT_CLIP),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: Rect = Rect {
        left: 100.0,
        top: 50.0,
        right: 300.0,
        bottom: 150.0,
    };

    #[test]
    fn test_nearest_side() {
        assert_eq!(nearest_side(TILE, 101.0, 100.0), Side::Left);
        assert_eq!(nearest_side(TILE, 298.0, 100.0), Side::Right);
        assert_eq!(nearest_side(TILE, 200.0, 52.0), Side::Top);
        assert_eq!(nearest_side(TILE, 200.0, 149.0), Side::Bottom);
    }

    #[test]
    fn test_corner_tie_prefers_horizontal_edges() {
        // top-left corner: left and top are both 0 away
        assert_eq!(nearest_side(TILE, 100.0, 50.0), Side::Left);
        // bottom-right corner: right wins over bottom
        assert_eq!(nearest_side(TILE, 300.0, 150.0), Side::Right);
    }

    #[test]
    fn test_keyframes() {
        assert_eq!(entrance(Side::Left), (BOTTOM_RIGHT_CLIP, NO_CLIP));
        assert_eq!(entrance(Side::Right), (TOP_LEFT_CLIP, NO_CLIP));
        assert_eq!(exit(Side::Bottom), (NO_CLIP, TOP_RIGHT_CLIP));
        assert_eq!(exit(Side::Right), (NO_CLIP, BOTTOM_LEFT_CLIP));
    }
}
