pub mod header;
pub mod status_bar;
pub mod terminal_pane;
