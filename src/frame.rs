//! Reading-frame extraction.
//!
//! The coding region runs from the first `ATG` up to and including the nearest
//! stop codon found after it. Stop codons are located by their **first**
//! occurrence in the whole sequence; an occurrence at or before the start codon
//! disqualifies that codon entirely, even if it appears again further
//! downstream. Frames are not checked (`ATGA` yields a region ending in `TGA`).
//!
//! # Examples
//! ```
//! use primerpair::frame::extract_coding_region;
//! let r = extract_coding_region("CCATGCCCGGGTTTCCCGGGAAATAGCC").unwrap();
//! assert_eq!(r.start, 2);
//! assert_eq!(r.sequence, "ATGCCCGGGTTTCCCGGGAAATAG");
//! ```
use crate::error::DesignError;
use crate::primer::DesignParams;

/// Start codon.
pub const START_CODON: &str = "ATG";
/// Stop codons, in lookup order.
pub const STOP_CODONS: &[&str] = &["TGA", "TAG", "TAA"];

/// The extracted coding region and where it was found.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CodingRegion {
    /// 0-based index of the start codon.
    pub start: usize,
    /// 0-based index of the terminating stop codon.
    pub stop: usize,
    /// The stop codon that terminated the region.
    pub stop_codon: &'static str,
    /// Region sequence, start and stop codon included.
    pub sequence: String,
}

/// Extract the coding region with the default minimum length of 20.
pub fn extract_coding_region(seq: &str) -> Result<CodingRegion, DesignError> {
    extract_with(seq, &DesignParams::default())
}

/// Extract the coding region, failing if it is shorter than `params.min_region_len`.
pub fn extract_with(seq: &str, params: &DesignParams) -> Result<CodingRegion, DesignError> {
    let start = seq.find(START_CODON).ok_or(DesignError::NoStartCodon)?;

    let (stop, stop_codon) = STOP_CODONS
        .iter()
        .filter_map(|codon| seq.find(codon).map(|i| (i, *codon)))
        .filter(|(i, _)| *i > start)
        .min_by_key(|(i, _)| *i)
        .ok_or(DesignError::NoStopCodonFound)?;

    let sequence = seq[start..stop + 3].to_string();
    if sequence.len() < params.min_region_len {
        return Err(DesignError::RegionTooShort { len: sequence.len() });
    }
    Ok(CodingRegion { start, stop, stop_codon, sequence })
}
