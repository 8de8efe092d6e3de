// Application layer - Use cases and ports
pub mod chart_renderer;
pub mod toggle_controller;
pub mod toggle_gateway;
