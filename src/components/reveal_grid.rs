//! Reveal Grid Component
//!
//! Tiles whose inverted overlay wipes in from the edge the pointer entered
//! through and wipes out toward the edge it left by.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::reveal::{entrance, exit, nearest_side, Rect, Side, HIDDEN_CLIP};

/// Tiles per row
const ROWS: [usize; 3] = [2, 4, 3];

/// Delay between jumping to the first frame and animating to the second
const FRAME_MS: u32 = 16;

#[component]
pub fn RevealGrid() -> impl IntoView {
    view! {
        <div class="reveal-page">
            <div class="reveal-container">
                {ROWS.iter().map(|cols| view! {
                    <div class=format!("reveal-row cols-{}", cols)>
                        {(0..*cols).map(|_| view! { <RevealTile label="G" /> }).collect_view()}
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

/// Edge of the hovered tile nearest to the pointer
fn side_of(ev: &MouseEvent) -> Option<Side> {
    let tile = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = Rect::from(&tile.get_bounding_client_rect());
    Some(nearest_side(rect, ev.client_x() as f64, ev.client_y() as f64))
}

#[component]
fn RevealTile(#[prop(into)] label: String) -> impl IntoView {
    let (clip, set_clip) = signal(HIDDEN_CLIP);
    let (animating, set_animating) = signal(false);

    let play = move |(from, to): (&'static str, &'static str)| {
        set_animating.set(false);
        set_clip.set(from);
        Timeout::new(FRAME_MS, move || {
            set_animating.set(true);
            set_clip.set(to);
        })
        .forget();
    };

    let on_mouseenter = move |ev: MouseEvent| {
        if let Some(side) = side_of(&ev) {
            play(entrance(side));
        }
    };

    let on_mouseleave = move |ev: MouseEvent| {
        if let Some(side) = side_of(&ev) {
            play(exit(side));
        }
    };

    view! {
        <a class="reveal-tile" href="#" on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            <span class="reveal-label">{label.clone()}</span>
            <div
                class="reveal-overlay"
                style:clip-path=move || clip.get()
                style:transition=move || if animating.get() { "clip-path 0.3s ease" } else { "none" }
            >
                <span class="reveal-label">{label}</span>
            </div>
        </a>
    }
}
