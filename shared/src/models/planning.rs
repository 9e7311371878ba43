//! Pasture transfer planning models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled or completed relocation of a lot between pastures
///
/// Lifecycle: created in the scheduled state, or directly completed for
/// immediate moves. The only transition is scheduled → completed; it is
/// irreversible and it is the transition, not creation, that stamps
/// `completed_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasturePlanning {
    pub lot_id: Uuid,
    pub from_pasture_id: Option<Uuid>,
    pub to_pasture_id: Uuid,
    pub scheduled_date: NaiveDate,
    pub completed: bool,
    pub completed_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl PasturePlanning {
    /// Create a planning entry in the scheduled state
    pub fn scheduled(
        lot_id: Uuid,
        from_pasture_id: Option<Uuid>,
        to_pasture_id: Uuid,
        scheduled_date: NaiveDate,
    ) -> Self {
        Self {
            lot_id,
            from_pasture_id,
            to_pasture_id,
            scheduled_date,
            completed: false,
            completed_date: None,
            notes: None,
        }
    }

    /// Create a planning entry for a move executed immediately
    pub fn immediate(
        lot_id: Uuid,
        from_pasture_id: Option<Uuid>,
        to_pasture_id: Uuid,
        moved_on: NaiveDate,
    ) -> Self {
        Self {
            lot_id,
            from_pasture_id,
            to_pasture_id,
            scheduled_date: moved_on,
            completed: true,
            completed_date: Some(moved_on),
            notes: None,
        }
    }

    /// Mark the transfer as executed, producing a new value
    ///
    /// A no-op on an already-completed entry; the original completion date
    /// is never overwritten.
    pub fn complete(self, completed_on: NaiveDate) -> Self {
        if self.completed {
            return self;
        }
        Self {
            completed: true,
            completed_date: Some(completed_on),
            ..self
        }
    }

    /// Date the transfer took effect, falling back to the scheduled date
    /// for entries recorded without one
    pub fn effective_date(&self) -> NaiveDate {
        self.completed_date.unwrap_or(self.scheduled_date)
    }
}
