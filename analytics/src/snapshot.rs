//! Read-only data snapshot handed to the analytics core
//!
//! The store collaborator owns the collections and their invalidation; the
//! analytics core only ever sees an immutable snapshot of them. The
//! convenience methods here resolve a lot's sub-collections and feed them
//! to the pure computations.

use chrono::NaiveDate;
use uuid::Uuid;

use shared::{Lot, Pasture, TimeRange, WeighingRecord};

use crate::breed::{parse_breed_composition, BreedComposition, KNOWN_BREEDS};
use crate::growth::{
    aggregate_daily_gain, animal_count_evolution, per_animal_daily_gain, total_weight_projection,
    weight_distribution, CountEvolution, GainSeries, WeightProjection, WeightRangeBucket,
};
use crate::ledger::{
    lot_transfers, pasture_history, scheduled_transfers, LedgerView, LotTransferLedger,
    PastureMove,
};

/// Immutable view over the store's record collections
#[derive(Debug, Clone, Copy)]
pub struct HerdSnapshot<'a> {
    pub weighings: &'a [WeighingRecord],
    pub lots: &'a [Lot],
    pub pastures: &'a [Pasture],
}

impl<'a> HerdSnapshot<'a> {
    pub fn new(
        weighings: &'a [WeighingRecord],
        lots: &'a [Lot],
        pastures: &'a [Pasture],
    ) -> Self {
        Self {
            weighings,
            lots,
            pastures,
        }
    }

    pub fn lot(&self, id: Uuid) -> Option<&'a Lot> {
        self.lots.iter().find(|l| l.id == id)
    }

    pub fn pasture(&self, id: Uuid) -> Option<&'a Pasture> {
        self.pastures.iter().find(|p| p.id == id)
    }

    /// Weighings owned by a lot, in stored order
    pub fn lot_weighings(&self, lot_id: Uuid) -> Vec<WeighingRecord> {
        self.weighings
            .iter()
            .filter(|w| w.lot_id == lot_id)
            .cloned()
            .collect()
    }

    pub fn animal_count_evolution(
        &self,
        lot_id: Uuid,
        range: TimeRange,
        today: NaiveDate,
    ) -> CountEvolution {
        animal_count_evolution(self.lot(lot_id), &self.lot_weighings(lot_id), range, today)
    }

    pub fn total_weight_projection(
        &self,
        lot_id: Uuid,
        range: TimeRange,
        today: NaiveDate,
    ) -> WeightProjection {
        total_weight_projection(self.lot(lot_id), &self.lot_weighings(lot_id), range, today)
    }

    pub fn aggregate_daily_gain(
        &self,
        lot_id: Uuid,
        range: TimeRange,
        today: NaiveDate,
    ) -> GainSeries {
        aggregate_daily_gain(self.lot(lot_id), &self.lot_weighings(lot_id), range, today)
    }

    pub fn per_animal_daily_gain(
        &self,
        lot_id: Uuid,
        range: TimeRange,
        today: NaiveDate,
    ) -> GainSeries {
        per_animal_daily_gain(&self.lot_weighings(lot_id), range, today)
    }

    pub fn lot_transfers(&self, lot_id: Uuid, view: LedgerView) -> LotTransferLedger {
        lot_transfers(lot_id, self.weighings, self.lots, view)
    }

    /// Completed pasture moves of a lot; empty when the lot is unknown
    pub fn pasture_history(&self, lot_id: Uuid) -> Vec<PastureMove> {
        self.lot(lot_id)
            .map(|lot| pasture_history(lot, self.pastures))
            .unwrap_or_default()
    }

    /// Pending pasture moves of a lot; empty when the lot is unknown
    pub fn scheduled_transfers(&self, lot_id: Uuid) -> Vec<PastureMove> {
        self.lot(lot_id)
            .map(|lot| scheduled_transfers(lot, self.pastures))
            .unwrap_or_default()
    }

    /// Breed composition of a lot using the default recognized breeds
    pub fn breed_composition(&self, lot_id: Uuid) -> Option<BreedComposition> {
        self.lot(lot_id)
            .map(|lot| parse_breed_composition(lot, KNOWN_BREEDS))
    }

    pub fn weight_distribution(&self) -> Vec<WeightRangeBucket> {
        weight_distribution(self.lots, self.weighings)
    }
}
