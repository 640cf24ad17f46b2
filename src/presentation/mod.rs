// Presentation layer - HTTP surface for the render bridge
pub mod app_state;
pub mod handlers;
