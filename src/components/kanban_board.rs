//! Kanban Board Component
//!
//! One column per lane plus the discard zone.

use board_core::{sample_board, Lane};
use leptos::prelude::*;

use crate::components::{Column, DiscardDropZone};
use crate::context::use_board;

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let ctx = use_board();
    let is_empty = move || ctx.with_board(|b| b.is_empty());

    view! {
        <div class="board">
            {Lane::ALL.iter().map(|lane| view! { <Column lane=*lane /> }).collect_view()}
            <DiscardDropZone />
        </div>
        <Show when=is_empty>
            <div class="board-empty">
                <button
                    class="sample-btn"
                    on:click=move |_| {
                        ctx.commit(|board| board.is_empty().then(sample_board));
                    }
                >
                    "Load sample cards"
                </button>
            </div>
        </Show>
    }
}
