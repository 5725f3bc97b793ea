//! Synthetic candidate generation.
//!
//! All randomness comes from the caller's `Rng`, so a seeded `StdRng`
//! reproduces the same candidate set.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::catalog::data::{occupied_titles, open_titles};
use crate::models::candidate::{Candidate, ReviewStatus, WISH_SLOTS};
use crate::models::position::Position;

#[derive(Debug, Error, PartialEq)]
pub enum GenerationError {
    #[error("insufficient candidate pool: {requested} wishes requested, {available} open positions")]
    InsufficientPool { requested: usize, available: usize },

    #[error("catalog has no occupied position to assign as current position")]
    NoOccupiedPositions,

    #[error("duplicate candidate name '{0}'")]
    DuplicateName(String),

    #[error("interview date out of range: {start} + {offset} days")]
    DateOutOfRange { start: NaiveDate, offset: u32 },
}

#[derive(Debug, Clone)]
pub struct GenerationSettings {
    /// The first N names always get all three wishes; the rest get 1 or 2.
    pub full_wish_candidates: usize,
    pub interview_start: NaiveDate,
    /// Inclusive upper bound of the interview day offset.
    pub interview_window_days: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        GenerationSettings {
            full_wish_candidates: 15,
            interview_start: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap_or_default(),
            interview_window_days: 17,
        }
    }
}

pub fn generate_candidates<R: Rng + ?Sized>(
    catalog: &[Position],
    names: &[&str],
    settings: &GenerationSettings,
    rng: &mut R,
) -> Result<Vec<Candidate>, GenerationError> {
    let open = open_titles(catalog);
    let occupied = occupied_titles(catalog);

    let mut seen = HashSet::new();
    let mut candidates = Vec::with_capacity(names.len());

    for (index, name) in names.iter().enumerate() {
        if !seen.insert(*name) {
            return Err(GenerationError::DuplicateName(name.to_string()));
        }

        let wish_count = if index < settings.full_wish_candidates {
            WISH_SLOTS
        } else {
            rng.gen_range(1..=2)
        };
        if wish_count > open.len() {
            return Err(GenerationError::InsufficientPool {
                requested: wish_count,
                available: open.len(),
            });
        }

        let mut wishes: [Option<String>; WISH_SLOTS] = Default::default();
        for (slot, title) in open.choose_multiple(rng, wish_count).enumerate() {
            wishes[slot] = Some(title.to_string());
        }

        let current_position = occupied
            .choose(rng)
            .ok_or(GenerationError::NoOccupiedPositions)?
            .to_string();

        let offset = rng.gen_range(0..=settings.interview_window_days);
        let interview_date = settings
            .interview_start
            .checked_add_days(Days::new(u64::from(offset)))
            .ok_or(GenerationError::DateOutOfRange {
                start: settings.interview_start,
                offset,
            })?;

        let id = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();

        candidates.push(Candidate {
            id,
            name: name.to_string(),
            current_position,
            wishes,
            interview_date,
            review_status: ReviewStatus::Pending,
            notes: String::new(),
        });
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::names::CANDIDATE_NAMES;
    use crate::catalog::data::{find_position, load_catalog};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate(seed: u64) -> Vec<Candidate> {
        let catalog = load_catalog();
        let mut rng = StdRng::seed_from_u64(seed);
        generate_candidates(&catalog, CANDIDATE_NAMES, &GenerationSettings::default(), &mut rng)
            .unwrap()
    }

    #[test]
    fn test_wishes_reference_open_and_current_references_occupied() {
        let catalog = load_catalog();
        for seed in 0..20 {
            for c in generate(seed) {
                let current = find_position(&catalog, &c.current_position).unwrap();
                assert!(!current.is_open(), "{} sits on an open position", c.name);
                for (_, title) in c.ranked_wishes() {
                    assert!(find_position(&catalog, title).unwrap().is_open());
                }
            }
        }
    }

    #[test]
    fn test_wish_counts_and_padding() {
        let candidates = generate(7);
        assert_eq!(candidates.len(), 20);
        for (i, c) in candidates.iter().enumerate() {
            if i < 15 {
                assert_eq!(c.wish_count(), 3);
            } else {
                assert!((1..=2).contains(&c.wish_count()));
                assert!(c.wishes[2].is_none());
            }
            // filled slots come first
            assert!(c.wishes[0].is_some());
            if c.wishes[1].is_none() {
                assert!(c.wishes[2].is_none());
            }
        }
    }

    #[test]
    fn test_wishes_are_distinct_per_candidate() {
        for c in generate(42) {
            let titles: Vec<_> = c.ranked_wishes().map(|(_, t)| t).collect();
            let unique: HashSet<_> = titles.iter().collect();
            assert_eq!(unique.len(), titles.len());
        }
    }

    #[test]
    fn test_scenario_total_wishes_in_bounds() {
        let total: usize = generate(3).iter().map(Candidate::wish_count).sum();
        assert!((20..=55).contains(&total), "total wishes {total}");
    }

    #[test]
    fn test_same_seed_same_candidates() {
        assert_eq!(generate(11), generate(11));
    }

    #[test]
    fn test_initial_review_state_and_dates() {
        let settings = GenerationSettings::default();
        let last = settings
            .interview_start
            .checked_add_days(Days::new(17))
            .unwrap();
        for c in generate(5) {
            assert_eq!(c.review_status, ReviewStatus::Pending);
            assert!(c.notes.is_empty());
            assert!(c.interview_date >= settings.interview_start && c.interview_date <= last);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let candidates = generate(9);
        let ids: HashSet<_> = candidates.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), candidates.len());
    }

    #[test]
    fn test_insufficient_pool_fails() {
        let catalog = vec![
            Position::new("RH", "Ouvert A", true),
            Position::new("RH", "Ouvert B", true),
            Position::new("RH", "Occupé", false),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_candidates(&catalog, &["Ana"], &GenerationSettings::default(), &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::InsufficientPool {
                requested: 3,
                available: 2
            }
        );
    }

    #[test]
    fn test_no_occupied_positions_fails() {
        let catalog: Vec<_> = ["A", "B", "C"]
            .iter()
            .map(|t| Position::new("RH", t, true))
            .collect();
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_candidates(&catalog, &["Ana"], &GenerationSettings::default(), &mut rng)
            .unwrap_err();
        assert_eq!(err, GenerationError::NoOccupiedPositions);
    }

    #[test]
    fn test_duplicate_name_fails() {
        let catalog = load_catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_candidates(
            &catalog,
            &["Ana", "Ana"],
            &GenerationSettings::default(),
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err, GenerationError::DuplicateName("Ana".to_string()));
    }
}
