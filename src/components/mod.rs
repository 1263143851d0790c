//! UI Components
//!
//! Leptos components for the search page.

mod search_bar;
mod drink_grid;
mod drink_card;
mod group_panel;
mod detail_modal;
mod toast;

pub use search_bar::SearchBar;
pub use drink_grid::DrinkGrid;
pub use drink_card::DrinkCardView;
pub use group_panel::GroupPanel;
pub use detail_modal::DetailModal;
pub use toast::Toast;
