//! Lot models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PasturePlanning;

/// A managed group of animals tracked as a unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lot {
    pub id: Uuid,
    pub name: String,
    pub status: LotStatus,
    /// Current authoritative head count; weighing records carry their own
    /// snapshot at measurement time
    pub number_of_animals: i32,
    pub current_pasture_id: Option<Uuid>,
    pub breed: Option<String>,
    pub notes: Option<String>,
    pub planned_transfers: Vec<PasturePlanning>,
}

/// Status of a lot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LotStatus {
    Active,
    Sold,
    Treatment,
}

impl LotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LotStatus::Active => "active",
            LotStatus::Sold => "sold",
            LotStatus::Treatment => "treatment",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(LotStatus::Active),
            "sold" => Some(LotStatus::Sold),
            "treatment" => Some(LotStatus::Treatment),
            _ => None,
        }
    }
}

impl std::fmt::Display for LotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LotStatus::Active => write!(f, "Active"),
            LotStatus::Sold => write!(f, "Sold"),
            LotStatus::Treatment => write!(f, "Treatment"),
        }
    }
}

impl Lot {
    /// Append a planned transfer, producing a new lot value
    ///
    /// Collection updates are modeled as immutable transforms so derived
    /// views can be cached on value identity.
    pub fn with_planned_transfer(mut self, planning: PasturePlanning) -> Self {
        self.planned_transfers.push(planning);
        self
    }
}
