//! Transfer ledger: lot-to-lot movements and pasture history
//!
//! Movements come from two sources. Weighing records whose destination lot
//! differs from their origin lot are lot-to-lot transfers; a lot's planned
//! transfers record pasture-to-pasture moves, scheduled or completed.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use shared::{Lot, Pasture, PasturePlanning, WeighingRecord};

use crate::UNKNOWN_LABEL;

/// How many entries a summary ledger view shows before folding the rest
/// into the remainder count
const SUMMARY_CAP: usize = 3;

/// Direction of a lot-to-lot transfer relative to the lot under view
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransferDirection {
    Incoming,
    Outgoing,
}

/// Requested ledger depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedgerView {
    /// The three most recent transfers plus a remainder count
    Summary,
    #[default]
    FullHistory,
}

/// One lot-to-lot transfer as seen from a specific lot
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LotTransfer {
    pub record_id: Uuid,
    pub date: DateTime<Utc>,
    pub direction: TransferDirection,
    pub counterparty_lot_id: Uuid,
    /// Resolved lot name, or "Unknown" when the reference does not resolve
    pub counterparty_name: String,
    pub number_of_animals: i32,
    pub average_weight_kg: Decimal,
}

/// Lot-to-lot transfer ledger for one lot
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LotTransferLedger {
    /// Descending by date
    pub entries: Vec<LotTransfer>,
    /// Transfers beyond the summary cap; 0 for full-history views
    pub remainder: usize,
}

/// One pasture-to-pasture move of a lot
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PastureMove {
    pub from_pasture_id: Option<Uuid>,
    /// Resolved origin name: `None` for a first move with no origin,
    /// "Unknown" when a reference exists but does not resolve
    pub from_pasture_name: Option<String>,
    pub to_pasture_id: Uuid,
    pub to_pasture_name: String,
    pub scheduled_date: NaiveDate,
    pub completed_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Lot-to-lot transfers touching `lot_id`, classified by direction
///
/// Outgoing: the record belongs to the lot and names a different
/// destination. Incoming: the record names the lot as destination from a
/// different origin. A record never counts as both for one lot, and lots
/// a record does not touch never see it.
pub fn lot_transfers(
    lot_id: Uuid,
    weighings: &[WeighingRecord],
    lots: &[Lot],
    view: LedgerView,
) -> LotTransferLedger {
    let mut entries: Vec<LotTransfer> = weighings
        .iter()
        .filter_map(|w| {
            let direction = transfer_direction(lot_id, w)?;
            let counterparty = match direction {
                TransferDirection::Outgoing => w.destination_lot_id?,
                TransferDirection::Incoming => w.lot_id,
            };
            Some(LotTransfer {
                record_id: w.id,
                date: w.date,
                direction,
                counterparty_lot_id: counterparty,
                counterparty_name: resolve_lot_name(counterparty, lots),
                number_of_animals: w.number_of_animals,
                average_weight_kg: w.average_weight_kg,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.date.cmp(&a.date));

    let remainder = match view {
        LedgerView::Summary if entries.len() > SUMMARY_CAP => {
            let remainder = entries.len() - SUMMARY_CAP;
            entries.truncate(SUMMARY_CAP);
            remainder
        }
        _ => 0,
    };

    LotTransferLedger { entries, remainder }
}

/// Direction of `record` relative to `lot_id`, or `None` when the record
/// is not a transfer touching that lot
pub fn transfer_direction(lot_id: Uuid, record: &WeighingRecord) -> Option<TransferDirection> {
    match record.destination_lot_id {
        Some(dest) if record.lot_id == lot_id && dest != lot_id => {
            Some(TransferDirection::Outgoing)
        }
        Some(dest) if dest == lot_id && record.lot_id != lot_id => {
            Some(TransferDirection::Incoming)
        }
        _ => None,
    }
}

/// Completed pasture-to-pasture moves of a lot, most recent first
///
/// Ordered descending by completion date, falling back to the scheduled
/// date. Unresolvable pasture references render as "Unknown"; they never
/// abort the rest of the history.
pub fn pasture_history(lot: &Lot, pastures: &[Pasture]) -> Vec<PastureMove> {
    let mut moves: Vec<&PasturePlanning> = lot
        .planned_transfers
        .iter()
        .filter(|p| p.completed)
        .collect();
    moves.sort_by(|a, b| b.effective_date().cmp(&a.effective_date()));

    moves
        .into_iter()
        .map(|p| to_pasture_move(p, pastures))
        .collect()
}

/// Pending pasture moves of a lot, soonest first
pub fn scheduled_transfers(lot: &Lot, pastures: &[Pasture]) -> Vec<PastureMove> {
    let mut moves: Vec<&PasturePlanning> = lot
        .planned_transfers
        .iter()
        .filter(|p| !p.completed)
        .collect();
    moves.sort_by_key(|p| p.scheduled_date);

    moves
        .into_iter()
        .map(|p| to_pasture_move(p, pastures))
        .collect()
}

fn to_pasture_move(planning: &PasturePlanning, pastures: &[Pasture]) -> PastureMove {
    PastureMove {
        from_pasture_id: planning.from_pasture_id,
        from_pasture_name: planning
            .from_pasture_id
            .map(|id| resolve_pasture_name(id, pastures)),
        to_pasture_id: planning.to_pasture_id,
        to_pasture_name: resolve_pasture_name(planning.to_pasture_id, pastures),
        scheduled_date: planning.scheduled_date,
        completed_date: planning.completed_date,
        notes: planning.notes.clone(),
    }
}

fn resolve_lot_name(id: Uuid, lots: &[Lot]) -> String {
    match lots.iter().find(|l| l.id == id) {
        Some(lot) => lot.name.clone(),
        None => {
            tracing::warn!(%id, "unresolvable lot reference in transfer ledger");
            UNKNOWN_LABEL.to_string()
        }
    }
}

fn resolve_pasture_name(id: Uuid, pastures: &[Pasture]) -> String {
    match pastures.iter().find(|p| p.id == id) {
        Some(pasture) => pasture.name.clone(),
        None => {
            tracing::warn!(%id, "unresolvable pasture reference in transfer ledger");
            UNKNOWN_LABEL.to_string()
        }
    }
}
