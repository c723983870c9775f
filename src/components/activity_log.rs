//! Activity Log Component
//!
//! Newest log lines, refreshed whenever the board changes.

use leptos::prelude::*;

use crate::context::use_board;

const SHOWN_LINES: usize = 8;

#[component]
pub fn ActivityLog() -> impl IntoView {
    let ctx = use_board();
    let lines = move || {
        ctx.with_board(|_| ());
        rolling_logger::recent_lines(SHOWN_LINES)
    };

    view! {
        <details class="activity-log">
            <summary>"Activity"</summary>
            <ul>
                {move || lines().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        </details>
    }
}
