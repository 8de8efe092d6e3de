// Application state for HTTP handlers
use crate::application::chart_renderer::{ChartRenderer, PageRegions};
use crate::application::toggle_controller::ToggleController;
use crate::domain::metrics::AnalyticsData;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub renderer: ChartRenderer,
    pub page: PageRegions,
    pub analytics: Arc<AnalyticsData>,
    pub controller: Arc<ToggleController>,
}
