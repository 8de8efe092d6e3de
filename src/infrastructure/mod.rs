// Infrastructure layer - External dependencies and adapters
pub mod analytics_source;
pub mod config;
pub mod csrf;
pub mod http_toggle_gateway;
