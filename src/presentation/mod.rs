// Presentation layer - HTTP surface and UI-local state
pub mod app_state;
pub mod handlers;
pub mod nav_panel;
