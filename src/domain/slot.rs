// Timeslot availability view-models
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const BADGE_AVAILABLE: &str = "Available";
pub const BADGE_UNAVAILABLE: &str = "Not Available";

/// Opaque slot identifier. The backend may send it as a string or an integer key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SlotId(String);

impl SlotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SlotId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => SlotId(s),
            RawId::Int(n) => SlotId(n.to_string()),
        })
    }
}

/// The toggle endpoint's answer: the slot's state after the flip.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ToggleResult {
    pub id: SlotId,
    pub available: bool,
}

/// The rendered state of one slot row: badge, wrapper class and checkbox.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilitySlot {
    pub slot_id: SlotId,
    /// Last state confirmed by the server
    pub available: bool,
    pub badge_text: String,
    /// `red` colour class on the badge
    pub badge_red: bool,
    /// `disabled` class on the slot wrapper
    pub disabled: bool,
    pub checkbox_checked: bool,
}

impl AvailabilitySlot {
    pub fn new(slot_id: SlotId, available: bool) -> Self {
        let mut slot = Self {
            slot_id,
            available,
            badge_text: String::new(),
            badge_red: false,
            disabled: false,
            checkbox_checked: false,
        };
        slot.set_available(available);
        slot
    }

    /// Reconcile every visual field with a confirmed server state.
    pub fn apply(&mut self, result: &ToggleResult) {
        self.set_available(result.available);
    }

    /// Undo an unconfirmed checkbox flip.
    pub fn revert_checkbox(&mut self) {
        self.checkbox_checked = self.available;
    }

    fn set_available(&mut self, available: bool) {
        self.available = available;
        self.badge_text = if available {
            BADGE_AVAILABLE
        } else {
            BADGE_UNAVAILABLE
        }
        .to_string();
        self.badge_red = !available;
        self.disabled = !available;
        self.checkbox_checked = available;
    }
}

/// A checkbox change as seen by the handler: the widget has already flipped to `checked`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    pub slot_id: Option<String>,
    pub checked: bool,
}

impl ChangeEvent {
    pub fn new(slot_id: Option<String>, checked: bool) -> Self {
        Self { slot_id, checked }
    }

    pub fn slot_id(&self) -> Option<SlotId> {
        self.slot_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(SlotId::new)
    }
}
