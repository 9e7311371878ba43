//! Growth metrics derived from a lot's weighing series
//!
//! All views run on the deduplicated, ascending series for one lot and
//! take `today` explicitly so results stay reproducible. The time-range
//! filter is a display window applied after computation; it never changes
//! the numbers, only which points are retained.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use shared::{Lot, TimeRange, WeighingRecord};

use crate::series::{dedup_by_day, Dated};

/// Width of a weight-distribution bucket in kg
const WEIGHT_BUCKET_KG: i64 = 50;

/// One canonical day of a lot's series, with the projected herd weight
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    /// Head count snapshot carried by the weighing record
    pub animals: i32,
    /// Average weight times the lot's current authoritative count
    pub total_weight_kg: Decimal,
}

/// Current/delta/percent summary of the animal-count evolution
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CountSummary {
    pub current: i32,
    pub delta: i32,
    pub percent_change: Decimal,
}

/// Current/delta/percent summary of the total-weight projection
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WeightSummary {
    pub current_kg: Decimal,
    pub delta_kg: Decimal,
    pub percent_change: Decimal,
}

/// Animal-count evolution view
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountEvolution {
    pub points: Vec<DailyPoint>,
    pub summary: CountSummary,
}

/// Total-weight projection view
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeightProjection {
    pub points: Vec<DailyPoint>,
    pub summary: WeightSummary,
}

/// Daily weight gain over one interval between consecutive weighings
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GainPoint {
    /// End date of the interval
    pub date: NaiveDate,
    pub daily_gain_kg: Decimal,
    pub period_days: i64,
    /// Head-count change over the interval; only set by the per-animal view
    pub animals_diff: Option<i32>,
}

/// A daily-gain view with its mean over the displayed window
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GainSeries {
    pub points: Vec<GainPoint>,
    pub mean_daily_gain_kg: Decimal,
}

/// Histogram bucket of lots by latest average weight
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WeightRangeBucket {
    pub lower_kg: Decimal,
    pub upper_kg: Decimal,
    pub count: u32,
}

impl GainSeries {
    fn empty() -> Self {
        Self {
            points: Vec::new(),
            mean_daily_gain_kg: Decimal::ZERO,
        }
    }
}

/// Percent change of `current` against `first`, defaulting to 0 when the
/// starting value is 0
fn percent_change(first: Decimal, current: Decimal) -> Decimal {
    if first == Decimal::ZERO {
        return Decimal::ZERO;
    }
    ((current - first) / first * Decimal::from(100)).round_dp(2)
}

/// Deduplicate a lot's series and project each day with the lot's current
/// head count
///
/// Projecting historical weighings with the current count rather than each
/// record's own snapshot matches the established product behavior; the
/// per-animal gain view is the one that uses per-record snapshots.
fn projected_points(lot: &Lot, weighings: &[WeighingRecord]) -> Vec<DailyPoint> {
    let current_count = Decimal::from(lot.number_of_animals);
    dedup_by_day(weighings)
        .into_iter()
        .map(|w| DailyPoint {
            date: w.day(),
            animals: w.number_of_animals,
            total_weight_kg: (w.average_weight_kg * current_count).round(),
        })
        .collect()
}

/// Animal-count evolution: one point per canonical day, with a
/// current/delta/percent summary over the displayed window
pub fn animal_count_evolution(
    lot: Option<&Lot>,
    weighings: &[WeighingRecord],
    range: TimeRange,
    today: NaiveDate,
) -> CountEvolution {
    let points: Vec<DailyPoint> = lot
        .map(|l| projected_points(l, weighings))
        .unwrap_or_default()
        .into_iter()
        .filter(|p| range.contains(p.date, today))
        .collect();

    let summary = match (points.first(), points.last()) {
        (Some(first), Some(last)) => CountSummary {
            current: last.animals,
            delta: last.animals - first.animals,
            percent_change: percent_change(
                Decimal::from(first.animals),
                Decimal::from(last.animals),
            ),
        },
        _ => CountSummary {
            current: 0,
            delta: 0,
            percent_change: Decimal::ZERO,
        },
    };

    CountEvolution { points, summary }
}

/// Total-weight projection: average weight times the lot's current count,
/// rounded to whole kg, with a current/delta/percent summary
pub fn total_weight_projection(
    lot: Option<&Lot>,
    weighings: &[WeighingRecord],
    range: TimeRange,
    today: NaiveDate,
) -> WeightProjection {
    let points: Vec<DailyPoint> = lot
        .map(|l| projected_points(l, weighings))
        .unwrap_or_default()
        .into_iter()
        .filter(|p| range.contains(p.date, today))
        .collect();

    let summary = match (points.first(), points.last()) {
        (Some(first), Some(last)) => WeightSummary {
            current_kg: last.total_weight_kg,
            delta_kg: last.total_weight_kg - first.total_weight_kg,
            percent_change: percent_change(first.total_weight_kg, last.total_weight_kg),
        },
        _ => WeightSummary {
            current_kg: Decimal::ZERO,
            delta_kg: Decimal::ZERO,
            percent_change: Decimal::ZERO,
        },
    };

    WeightProjection { points, summary }
}

/// Aggregate daily weight gain between consecutive weighings, projected
/// with the lot's current head count
///
/// Intervals whose day span is not positive are skipped, not zero-filled;
/// deduplication should already have removed same-day pairs.
pub fn aggregate_daily_gain(
    lot: Option<&Lot>,
    weighings: &[WeighingRecord],
    range: TimeRange,
    today: NaiveDate,
) -> GainSeries {
    let Some(lot) = lot else {
        return GainSeries::empty();
    };
    let current_count = Decimal::from(lot.number_of_animals);
    let series = dedup_by_day(weighings);

    let points = series
        .windows(2)
        .filter_map(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let days = (next.day() - prev.day()).num_days();
            if days <= 0 {
                tracing::debug!(lot_id = %lot.id, end = %next.day(), "skipping non-positive gain interval");
                return None;
            }
            let total_diff =
                next.average_weight_kg * current_count - prev.average_weight_kg * current_count;
            Some(GainPoint {
                date: next.day(),
                daily_gain_kg: (total_diff / Decimal::from(days)).round_dp(2),
                period_days: days,
                animals_diff: None,
            })
        })
        .filter(|p| range.contains(p.date, today))
        .collect();

    with_mean(points)
}

/// Daily weight gain per animal, using each record's own head-count
/// snapshot and the mean head count of the interval as the divisor
///
/// Also reports the head-count change per interval so population moves can
/// be shown alongside the gain.
pub fn per_animal_daily_gain(
    weighings: &[WeighingRecord],
    range: TimeRange,
    today: NaiveDate,
) -> GainSeries {
    let series = dedup_by_day(weighings);

    let points = series
        .windows(2)
        .filter_map(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let days = (next.day() - prev.day()).num_days();
            if days <= 0 {
                tracing::debug!(end = %next.day(), "skipping non-positive gain interval");
                return None;
            }
            let total_diff = next.total_weight_kg() - prev.total_weight_kg();
            let mean_animals = (Decimal::from(prev.number_of_animals)
                + Decimal::from(next.number_of_animals))
                / Decimal::from(2);
            let daily_gain_kg = if mean_animals == Decimal::ZERO {
                Decimal::ZERO
            } else {
                (total_diff / Decimal::from(days) / mean_animals).round_dp(2)
            };
            Some(GainPoint {
                date: next.day(),
                daily_gain_kg,
                period_days: days,
                animals_diff: Some(next.number_of_animals - prev.number_of_animals),
            })
        })
        .filter(|p| range.contains(p.date, today))
        .collect();

    with_mean(points)
}

fn with_mean(points: Vec<GainPoint>) -> GainSeries {
    if points.is_empty() {
        return GainSeries::empty();
    }
    let sum: Decimal = points.iter().map(|p| p.daily_gain_kg).sum();
    let mean = (sum / Decimal::from(points.len() as i64)).round_dp(2);
    GainSeries {
        points,
        mean_daily_gain_kg: mean,
    }
}

/// Distribution of lots by their latest average weight, in fixed 50 kg
/// buckets ascending by lower bound
///
/// Lots without any weighing are skipped.
pub fn weight_distribution(lots: &[Lot], weighings: &[WeighingRecord]) -> Vec<WeightRangeBucket> {
    let mut counts: BTreeMap<i64, u32> = BTreeMap::new();
    for lot in lots {
        let series: Vec<WeighingRecord> = weighings
            .iter()
            .filter(|w| w.lot_id == lot.id)
            .cloned()
            .collect();
        let Some(latest) = dedup_by_day(&series).into_iter().last() else {
            continue;
        };
        let bucket = (latest.average_weight_kg / Decimal::from(WEIGHT_BUCKET_KG))
            .floor()
            .to_i64()
            .unwrap_or(0);
        *counts.entry(bucket).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(bucket, count)| WeightRangeBucket {
            lower_kg: Decimal::from(bucket * WEIGHT_BUCKET_KG),
            upper_kg: Decimal::from((bucket + 1) * WEIGHT_BUCKET_KG),
            count,
        })
        .collect()
}
