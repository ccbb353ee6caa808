#![forbid(unsafe_code)]
//! # primerpair
//!
//! Design a **forward** and **reverse** PCR primer pair for the coding region
//! of a single-sequence FASTA file.
//!
//! ## Pipeline
//! 1. [`seqio`] reads the first FASTA record (header dropped, lines joined).
//! 2. [`frame`] extracts the region from the first `ATG` to the nearest stop codon.
//! 3. [`candidates`] takes 20–23 nt windows from both ends and synthesizes the
//!    forward primer (identity) and reverse primer (reverse complement).
//! 4. [`tm`] scores each primer with `2 * (A + T) + 4 * (G + C)`.
//! 5. [`pairing`] keeps primers scoring 55–62 °C and returns the first
//!    forward/reverse pair within 4 °C of each other.
//!
//! Every step returns a [`DesignError`] on failure; nothing is retried.
//!
//! ## Examples
//! ```rust
//! let seq = format!("ATG{}{}TAG", "GCATGCATGCATGCATGCAT", "ATGCATGCATGCATGCATGC");
//! let pair = primerpair::design_primers(&seq).unwrap();
//! assert_eq!(pair.forward.sequence, "ATGGCATGCATGCATGCATG");
//! assert_eq!(pair.forward.temperature, 60);
//! ```

pub mod error;
pub mod primer;
pub mod seqio;
pub mod frame;
pub mod candidates;
pub mod tm;
pub mod pairing;
pub mod report;

use std::path::Path;

use tracing::{debug, info};

pub use error::DesignError;
pub use frame::CodingRegion;
pub use pairing::PrimerPool;
pub use primer::{Candidate, DesignParams, Primer, PrimerPair, Strand};

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Coding region and the unfiltered primer pools built from it.
///
/// Kept separate from pair selection so callers can report every candidate
/// even when selection fails.
#[derive(Clone, Debug)]
pub struct CandidateSet {
    pub region: CodingRegion,
    pub forward: PrimerPool,
    pub reverse: PrimerPool,
    pub params: DesignParams,
}

impl CandidateSet {
    /// Forward pool after temperature filtering.
    pub fn forward_in_range(&self) -> PrimerPool { self.forward.filtered(&self.params) }

    /// Reverse pool after temperature filtering.
    pub fn reverse_in_range(&self) -> PrimerPool { self.reverse.filtered(&self.params) }

    /// Filter both pools and pick the first compatible pair.
    pub fn select(&self) -> Result<PrimerPair, DesignError> {
        let fwd = self.forward_in_range();
        let rev = self.reverse_in_range();
        debug!(forward = fwd.len(), reverse = rev.len(), "primers within temperature window");
        let pair = pairing::select_pair(&fwd, &rev, &self.params)?;
        info!(
            forward = %pair.forward.sequence, forward_temp = pair.forward.temperature,
            reverse = %pair.reverse.sequence, reverse_temp = pair.reverse.temperature,
            "selected primer pair"
        );
        Ok(pair)
    }
}

/// Extract the coding region of `seq` and build both primer pools.
pub fn plan_candidates(seq: &str) -> Result<CandidateSet, DesignError> {
    let params = DesignParams::default();
    let region = frame::extract_with(seq, &params)?;
    debug!(start = region.start, stop = region.stop, len = region.sequence.len(), codon = region.stop_codon, "coding region");

    let forward = pairing::build_pool(&candidates::forward_candidates_with(&region.sequence, params.lengths));
    let reverse = pairing::build_pool(&candidates::reverse_candidates_with(&region.sequence, params.lengths));
    debug!(forward = forward.len(), reverse = reverse.len(), "primer pools built");
    Ok(CandidateSet { region, forward, reverse, params })
}

/// Run the full pipeline on a bare nucleotide sequence.
pub fn design_primers(seq: &str) -> Result<PrimerPair, DesignError> {
    plan_candidates(seq)?.select()
}

/// Run the full pipeline on in-memory FASTA text.
pub fn design_from_fasta_str(text: &str) -> Result<PrimerPair, DesignError> {
    let fasta = seqio::parse_fasta_str(text)?;
    design_primers(&fasta.seq)
}

/// Run the full pipeline on a `.fa`/`.fasta` file.
pub fn design_from_fasta<P: AsRef<Path>>(path: P) -> Result<PrimerPair, DesignError> {
    let fasta = seqio::load_fasta(path)?;
    design_primers(&fasta.seq)
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    #[test]
    fn candidate_set_keeps_out_of_range_primers() {
        // All-T body: every primer scores well below 55.
        let seq = format!("ATG{}TAA", "T".repeat(17));
        let set = plan_candidates(&seq).unwrap();
        assert_eq!(set.region.sequence.len(), 23);
        assert!(!set.forward.is_empty());
        assert!(set.forward_in_range().is_empty());
        assert!(matches!(set.select(), Err(DesignError::NoForwardPrimerInRange)));
    }

    #[test]
    fn atg_followed_by_a_reads_tga_immediately() {
        // "ATGA..." contains TGA at index 1, so the region is just "ATGA".
        let seq = format!("ATG{}TGA", "A".repeat(17));
        assert!(matches!(plan_candidates(&seq), Err(DesignError::RegionTooShort { len: 4 })));
    }

    #[test]
    fn truncated_candidates_collapse_in_pools() {
        let seq = format!("ATG{}TAG", "GC".repeat(7)); // 20 nt region
        let set = plan_candidates(&seq).unwrap();
        assert_eq!(set.forward.len(), 1);
        assert_eq!(set.reverse.len(), 1);
    }
}
