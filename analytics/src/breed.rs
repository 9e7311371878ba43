//! Best-effort breed composition parsing from free-text lot notes
//!
//! Notes sometimes carry counts per breed ("30 nelore 20 anelorada") with
//! no structured field to back them. The parser extracts every
//! `<integer> <breed-keyword>` pair it recognizes and tags the result with
//! the source it came from, so callers can tell a real parse from the
//! fallback.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use shared::Lot;

static COUNT_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s+(\p{L}+)").unwrap());

/// Breeds recognized by default; callers may pass their own set
pub const KNOWN_BREEDS: &[&str] = &[
    "nelore",
    "anelorada",
    "angus",
    "brahman",
    "brangus",
    "gir",
    "girolando",
    "guzera",
    "senepol",
    "tabapua",
];

/// One count-per-breed entry
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BreedCount {
    pub count: i32,
    pub breed: String,
}

/// Where a breed composition came from
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompositionSource {
    /// Parsed out of the lot's free-text notes
    Notes,
    /// No note matched; synthesized from the lot's structured breed field
    BreedField,
    /// Nothing to go on
    Empty,
}

/// Breed composition with the source it was derived from
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BreedComposition {
    pub entries: Vec<BreedCount>,
    pub source: CompositionSource,
}

/// Extract a lot's breed composition from its notes, falling back to the
/// structured breed field
///
/// Matches `<integer> <breed-keyword>` case-insensitively against
/// `known_breeds`, preserving first-match order. When nothing matches and
/// the lot carries a structured breed, a single entry with the lot's
/// current head count is synthesized. A heuristic, not a guaranteed parse.
pub fn parse_breed_composition(lot: &Lot, known_breeds: &[&str]) -> BreedComposition {
    let entries = lot
        .notes
        .as_deref()
        .map(|notes| extract_pairs(notes, known_breeds))
        .unwrap_or_default();

    if !entries.is_empty() {
        return BreedComposition {
            entries,
            source: CompositionSource::Notes,
        };
    }

    if let Some(breed) = lot.breed.as_deref().filter(|b| !b.trim().is_empty()) {
        tracing::debug!(lot_id = %lot.id, "breed notes unparsed, using structured breed field");
        return BreedComposition {
            entries: vec![BreedCount {
                count: lot.number_of_animals,
                breed: breed.trim().to_lowercase(),
            }],
            source: CompositionSource::BreedField,
        };
    }

    BreedComposition {
        entries: Vec::new(),
        source: CompositionSource::Empty,
    }
}

fn extract_pairs(notes: &str, known_breeds: &[&str]) -> Vec<BreedCount> {
    COUNT_WORD_RE
        .captures_iter(notes)
        .filter_map(|caps| {
            let word = caps[2].to_lowercase();
            if !known_breeds.iter().any(|b| b.to_lowercase() == word) {
                return None;
            }
            let count: i32 = caps[1].parse().ok()?;
            Some(BreedCount { count, breed: word })
        })
        .collect()
}
