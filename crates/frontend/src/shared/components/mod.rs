pub mod confirm_dialog;
pub mod date_range_picker;
pub mod filter_panel;
pub mod pagination_controls;
pub mod status_badge;
