//! Internal-consistency validation for livestock records
//!
//! Guards record construction at the boundary. Business rules such as
//! pasture capacity are deliberately not enforced here.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Lot, PasturePlanning, WeighingRecord};

/// Record-level consistency errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("average weight must be positive")]
    NonPositiveWeight,

    #[error("animal count cannot be negative")]
    NegativeAnimalCount,

    #[error("lot name cannot be empty")]
    EmptyLotName,

    #[error("transfer destination must differ from the origin lot")]
    SelfTransfer,

    #[error("completed planning entry is missing its completion date")]
    MissingCompletionDate,

    #[error("planning entry moves a lot onto the pasture it already occupies")]
    SelfMove,
}

/// Validate a weighing record's internal consistency
pub fn validate_weighing(record: &WeighingRecord) -> Result<(), ValidationError> {
    if record.average_weight_kg <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveWeight);
    }
    if record.number_of_animals < 0 {
        return Err(ValidationError::NegativeAnimalCount);
    }
    if record.destination_lot_id == Some(record.lot_id) {
        return Err(ValidationError::SelfTransfer);
    }
    Ok(())
}

/// Validate a lot's internal consistency
pub fn validate_lot(lot: &Lot) -> Result<(), ValidationError> {
    if lot.name.trim().is_empty() {
        return Err(ValidationError::EmptyLotName);
    }
    if lot.number_of_animals < 0 {
        return Err(ValidationError::NegativeAnimalCount);
    }
    Ok(())
}

/// Validate a planning entry's internal consistency
pub fn validate_planning(planning: &PasturePlanning) -> Result<(), ValidationError> {
    if planning.completed && planning.completed_date.is_none() {
        return Err(ValidationError::MissingCompletionDate);
    }
    if planning.from_pasture_id == Some(planning.to_pasture_id) {
        return Err(ValidationError::SelfMove);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LotStatus;
    use chrono::{NaiveDate, TimeZone, Utc};
    use uuid::Uuid;

    fn weighing() -> WeighingRecord {
        WeighingRecord {
            id: Uuid::new_v4(),
            lot_id: Uuid::new_v4(),
            date: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
            average_weight_kg: Decimal::from(250),
            number_of_animals: 40,
            destination_lot_id: None,
        }
    }

    fn lot() -> Lot {
        Lot {
            id: Uuid::new_v4(),
            name: "Lot 7".to_string(),
            status: LotStatus::Active,
            number_of_animals: 40,
            current_pasture_id: None,
            breed: None,
            notes: None,
            planned_transfers: vec![],
        }
    }

    #[test]
    fn test_valid_weighing() {
        assert!(validate_weighing(&weighing()).is_ok());
    }

    #[test]
    fn test_weighing_rejects_non_positive_weight() {
        let mut w = weighing();
        w.average_weight_kg = Decimal::ZERO;
        assert_eq!(
            validate_weighing(&w),
            Err(ValidationError::NonPositiveWeight)
        );
        w.average_weight_kg = Decimal::from(-10);
        assert!(validate_weighing(&w).is_err());
    }

    #[test]
    fn test_weighing_rejects_negative_count() {
        let mut w = weighing();
        w.number_of_animals = -1;
        assert_eq!(
            validate_weighing(&w),
            Err(ValidationError::NegativeAnimalCount)
        );
    }

    #[test]
    fn test_weighing_rejects_transfer_to_itself() {
        let mut w = weighing();
        w.destination_lot_id = Some(w.lot_id);
        assert_eq!(validate_weighing(&w), Err(ValidationError::SelfTransfer));
    }

    #[test]
    fn test_zero_animals_is_allowed() {
        let mut w = weighing();
        w.number_of_animals = 0;
        assert!(validate_weighing(&w).is_ok());
    }

    #[test]
    fn test_lot_rejects_blank_name() {
        let mut l = lot();
        l.name = "   ".to_string();
        assert_eq!(validate_lot(&l), Err(ValidationError::EmptyLotName));
    }

    #[test]
    fn test_planning_completed_needs_date() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut p = PasturePlanning::scheduled(Uuid::new_v4(), None, Uuid::new_v4(), day);
        p.completed = true;
        assert_eq!(
            validate_planning(&p),
            Err(ValidationError::MissingCompletionDate)
        );
        let fresh = PasturePlanning::scheduled(Uuid::new_v4(), None, Uuid::new_v4(), day)
            .complete(day);
        assert!(validate_planning(&fresh).is_ok());
    }

    #[test]
    fn test_planning_rejects_same_pasture_move() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let pasture = Uuid::new_v4();
        let p = PasturePlanning::scheduled(Uuid::new_v4(), Some(pasture), pasture, day);
        assert_eq!(validate_planning(&p), Err(ValidationError::SelfMove));
    }
}
