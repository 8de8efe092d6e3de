// Domain layer - Dashboard data and view-models
pub mod chart;
pub mod metrics;
pub mod slot;
