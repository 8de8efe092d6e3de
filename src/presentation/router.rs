// Route table for the dashboard service
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    analytics_charts, change_slot, get_slot, health_check, list_slots,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/analytics/charts", get(analytics_charts))
        .route("/availability/slots", get(list_slots))
        .route("/availability/slots/:id", get(get_slot))
        .route("/availability/slots/:id/change", post(change_slot))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::chart_renderer::{ChartRenderer, PageRegions};
    use crate::application::toggle_controller::ToggleController;
    use crate::application::toggle_gateway::{CsrfTokenProvider, ToggleError, ToggleGateway};
    use crate::domain::metrics::{AnalyticsData, MetricSeries};
    use crate::domain::slot::{AvailabilitySlot, SlotId, ToggleResult};
    use crate::infrastructure::config::ChartRegions;
    use async_trait::async_trait;
    use serde_json::Value;

    /// Reports slot 1 as available and every other slot as unavailable.
    struct FixedGateway;

    #[async_trait]
    impl ToggleGateway for FixedGateway {
        async fn toggle(&self, slot_id: &SlotId, _csrf_token: &str) -> Result<ToggleResult, ToggleError> {
            Ok(ToggleResult {
                id: slot_id.clone(),
                available: slot_id.as_str() == "1",
            })
        }
    }

    struct NoToken;

    impl CsrfTokenProvider for NoToken {
        fn csrf_token(&self) -> String {
            String::new()
        }
    }

    async fn spawn_app() -> String {
        let analytics = AnalyticsData {
            status: MetricSeries::new(vec!["Pending".to_string()], vec![1.0]),
            ..Default::default()
        };
        let controller = ToggleController::new(
            Arc::new(FixedGateway),
            Arc::new(NoToken),
            vec![
                AvailabilitySlot::new(SlotId::new("1"), false),
                AvailabilitySlot::new(SlotId::new("2"), true),
            ],
        );
        let regions = ChartRegions::default();
        let state = Arc::new(AppState {
            page: PageRegions::new(regions.all()),
            renderer: ChartRenderer::new(regions),
            analytics: Arc::new(analytics),
            controller: Arc::new(controller),
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, build_router(state)).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_health() {
        let base = spawn_app().await;
        let body = reqwest::get(format!("{}/healthz", base)).await.unwrap().text().await.unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_charts_endpoint_renders_non_empty_series() {
        let base = spawn_app().await;
        let page: Value = reqwest::get(format!("{}/analytics/charts", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        let charts = page["charts"].as_array().unwrap();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0]["region"], "statusChart");
        assert_eq!(charts[0]["tooltipLabels"][0], "Pending: 1 (100.0%)");
        assert_eq!(page["defaults"]["color"], "#1a252f");
    }

    #[tokio::test]
    async fn test_change_applies_and_lists() {
        let base = spawn_app().await;
        let client = reqwest::Client::new();

        let outcome: Value = client
            .post(format!("{}/availability/slots/2/change", base))
            .json(&serde_json::json!({ "checked": false }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(outcome["outcome"], "applied");
        assert_eq!(outcome["slot"]["badge_text"], "Not Available");

        let slots: Value = reqwest::get(format!("{}/availability/slots", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(slots[1]["slot_id"], "2");
        assert_eq!(slots[1]["disabled"], true);
        assert_eq!(slots[0]["checkbox_checked"], false);
    }

    #[tokio::test]
    async fn test_get_single_slot() {
        let base = spawn_app().await;

        let slot: Value = reqwest::get(format!("{}/availability/slots/2", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(slot["badge_text"], "Available");
        assert_eq!(slot["checkbox_checked"], true);

        let missing = reqwest::get(format!("{}/availability/slots/999", base)).await.unwrap();
        assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
    }
}
