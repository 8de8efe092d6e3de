// HTTP request handlers
use crate::application::toggle_controller::ToggleOutcome;
use crate::domain::chart::RenderedPage;
use crate::domain::slot::{AvailabilitySlot, ChangeEvent, SlotId};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ChangeRequest {
    pub checked: bool,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Chart configurations for every chart the analytics page can mount
pub async fn analytics_charts(State(state): State<Arc<AppState>>) -> Json<RenderedPage> {
    Json(state.renderer.render(&state.analytics, &state.page))
}

pub async fn list_slots(State(state): State<Arc<AppState>>) -> Json<Vec<AvailabilitySlot>> {
    Json(state.controller.slots().await)
}

pub async fn get_slot(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<AvailabilitySlot>, StatusCode> {
    state
        .controller
        .slot(&SlotId::new(id))
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// A checkbox change on a slot row; `checked` is the widget state after the flip
pub async fn change_slot(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChangeRequest>,
) -> Result<Json<ToggleOutcome>, StatusCode> {
    let handle = state
        .controller
        .spawn_change(ChangeEvent::new(Some(id), request.checked));

    match handle.await {
        Ok(outcome) => Ok(Json(outcome)),
        Err(e) => {
            tracing::error!("Toggle task failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
