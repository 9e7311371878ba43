//! Weighing record models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dated measurement of a lot's average animal weight and head count
///
/// Immutable once created; owned by the global record collection and only
/// ever referenced by the analytics core. `number_of_animals` is the count
/// at measurement time, which may differ from the lot's current count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeighingRecord {
    pub id: Uuid,
    pub lot_id: Uuid,
    /// Full timestamp of the measurement; analytics collapse to calendar days
    pub date: DateTime<Utc>,
    pub average_weight_kg: Decimal,
    pub number_of_animals: i32,
    /// When set and different from `lot_id`, this weighing doubles as a
    /// transfer of the weighed animals to the destination lot
    pub destination_lot_id: Option<Uuid>,
}

impl WeighingRecord {
    /// Whether this record denotes a lot-to-lot transfer
    pub fn is_transfer(&self) -> bool {
        matches!(self.destination_lot_id, Some(dest) if dest != self.lot_id)
    }

    /// Total weight of the weighed animals at measurement time
    pub fn total_weight_kg(&self) -> Decimal {
        self.average_weight_kg * Decimal::from(self.number_of_animals)
    }
}
