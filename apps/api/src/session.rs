//! In-memory mobility session: the catalog, the generated candidates and
//! the reviewer's decisions on them.

use rand::Rng;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::candidates::generator::{generate_candidates, GenerationError, GenerationSettings};
use crate::candidates::names::CANDIDATE_NAMES;
use crate::catalog::data::load_catalog;
use crate::models::candidate::{Candidate, ReviewStatus};
use crate::models::position::Position;

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("candidate {0} not found")]
    UnknownCandidate(Uuid),
}

#[derive(Debug, Clone)]
pub struct MobilitySession {
    catalog: Vec<Position>,
    candidates: Vec<Candidate>,
}

impl MobilitySession {
    pub fn new(catalog: Vec<Position>, candidates: Vec<Candidate>) -> Self {
        info!(
            "Mobility session created: {} positions, {} candidates",
            catalog.len(),
            candidates.len()
        );
        MobilitySession {
            catalog,
            candidates,
        }
    }

    /// Loads the reference catalog and generates the candidate set.
    pub fn generate<R: Rng + ?Sized>(
        settings: &GenerationSettings,
        rng: &mut R,
    ) -> Result<Self, GenerationError> {
        let catalog = load_catalog();
        let candidates = generate_candidates(&catalog, CANDIDATE_NAMES, settings, rng)?;
        Ok(Self::new(catalog, candidates))
    }

    pub fn catalog(&self) -> &[Position] {
        &self.catalog
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn candidate(&self, id: Uuid) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn candidate_by_name(&self, name: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.name == name)
    }

    /// Overwrites the candidate's decision and notes. Last write wins.
    pub fn set_review(
        &mut self,
        id: Uuid,
        status: ReviewStatus,
        notes: String,
    ) -> Result<&Candidate, SessionError> {
        let candidate = self
            .candidates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(SessionError::UnknownCandidate(id))?;

        candidate.review_status = status;
        candidate.notes = notes;
        info!("Review saved for {}: {:?}", candidate.name, status);
        Ok(candidate)
    }
}
