pub mod badge;
pub mod filter_panel;
pub mod pagination_controls;
pub mod progress_bar;
pub mod stat_card;
