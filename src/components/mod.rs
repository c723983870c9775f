//! UI Components
//!
//! Reusable Leptos components.

mod activity_log;
mod add_card_form;
mod card_item;
mod column;
mod demo_tab_bar;
mod discard_drop_zone;
mod drop_indicator;
mod kanban_board;
mod reveal_grid;

pub use activity_log::ActivityLog;
pub use add_card_form::AddCardForm;
pub use card_item::CardItem;
pub use column::Column;
pub use demo_tab_bar::DemoTabBar;
pub use discard_drop_zone::DiscardDropZone;
pub use drop_indicator::DropIndicator;
pub use kanban_board::KanbanBoard;
pub use reveal_grid::RevealGrid;
