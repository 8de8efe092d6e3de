// Availability toggle controller - Reconciles slot view-models with the toggle endpoint
use crate::application::toggle_gateway::{CsrfTokenProvider, ToggleGateway};
use crate::domain::slot::{AvailabilitySlot, ChangeEvent, SlotId};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// The control carried no slot id; nothing was sent.
    Skipped,
    /// The server state was applied to the matching view-model.
    Applied { slot: AvailabilitySlot },
    /// The response named a slot that is not on the page.
    Ignored { id: SlotId },
    /// The request failed and the checkbox was flipped back.
    Reverted { slot_id: SlotId, error: String },
}

pub struct ToggleController {
    gateway: Arc<dyn ToggleGateway>,
    csrf: Arc<dyn CsrfTokenProvider>,
    slots: Mutex<HashMap<SlotId, AvailabilitySlot>>,
    // One lock per registered slot so requests for the same control run one after another
    in_flight: HashMap<SlotId, Arc<Mutex<()>>>,
}

impl ToggleController {
    pub fn new(
        gateway: Arc<dyn ToggleGateway>,
        csrf: Arc<dyn CsrfTokenProvider>,
        slots: impl IntoIterator<Item = AvailabilitySlot>,
    ) -> Self {
        let slots: HashMap<SlotId, AvailabilitySlot> = slots
            .into_iter()
            .map(|slot| (slot.slot_id.clone(), slot))
            .collect();
        let in_flight = slots
            .keys()
            .map(|id| (id.clone(), Arc::new(Mutex::new(()))))
            .collect();

        Self {
            gateway,
            csrf,
            slots: Mutex::new(slots),
            in_flight,
        }
    }

    /// Handle a change on a background task and return immediately.
    pub fn spawn_change(self: &Arc<Self>, event: ChangeEvent) -> JoinHandle<ToggleOutcome> {
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.handle_change(event).await })
    }

    pub async fn handle_change(&self, event: ChangeEvent) -> ToggleOutcome {
        let Some(slot_id) = event.slot_id() else {
            tracing::debug!("Change event without slot id, ignoring");
            return ToggleOutcome::Skipped;
        };

        // The widget has already flipped by the time the handler runs
        self.set_checkbox(&slot_id, event.checked).await;

        // Ids missing from the page have no view-model to protect
        let _guard = match self.in_flight.get(&slot_id) {
            Some(lock) => Some(lock.lock().await),
            None => None,
        };

        let token = self.csrf.csrf_token();
        if token.is_empty() {
            tracing::warn!("No CSRF token available for slot {}", slot_id);
        }

        match self.gateway.toggle(&slot_id, &token).await {
            Ok(result) => {
                let mut slots = self.slots.lock().await;
                match slots.get_mut(&result.id) {
                    Some(slot) => {
                        slot.apply(&result);
                        tracing::info!("Slot {} is now {}", result.id, slot.badge_text);
                        ToggleOutcome::Applied { slot: slot.clone() }
                    }
                    None => {
                        tracing::warn!("Toggle response for unknown slot {}", result.id);
                        ToggleOutcome::Ignored { id: result.id }
                    }
                }
            }
            Err(e) => {
                tracing::error!("Toggle error for slot {}: {}", slot_id, e);
                if let Some(slot) = self.slots.lock().await.get_mut(&slot_id) {
                    slot.revert_checkbox();
                }
                ToggleOutcome::Reverted {
                    slot_id,
                    error: e.to_string(),
                }
            }
        }
    }

    pub async fn slot(&self, slot_id: &SlotId) -> Option<AvailabilitySlot> {
        self.slots.lock().await.get(slot_id).cloned()
    }

    /// Snapshot of every slot, ordered by id.
    pub async fn slots(&self) -> Vec<AvailabilitySlot> {
        let mut slots: Vec<AvailabilitySlot> = self.slots.lock().await.values().cloned().collect();
        slots.sort_by(|a, b| a.slot_id.as_str().cmp(b.slot_id.as_str()));
        slots
    }

    async fn set_checkbox(&self, slot_id: &SlotId, checked: bool) {
        if let Some(slot) = self.slots.lock().await.get_mut(slot_id) {
            slot.checkbox_checked = checked;
        }
    }
}
