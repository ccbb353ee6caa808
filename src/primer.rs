//! Core types for **candidates**, **primers** and **design parameters**.
//!
//! This module holds the data model shared across the crate. Everything here is
//! derived from one input sequence and lives only for the duration of a run.
use core::fmt;

/// Which end of the coding region a primer anneals to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strand {
    /// Leading edge; the primer is an identity copy of the window.
    Forward,
    /// Trailing edge; the primer is the reverse complement of the window.
    Reverse,
}

impl Strand {
    /// Stable lowercase label used in tabular reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strand::Forward => "forward",
            Strand::Reverse => "reverse",
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// A window of the coding region taken from one of its edges.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate<'a> {
    /// Edge the window was taken from.
    pub strand: Strand,
    /// Length that was asked for (20..=23).
    pub requested_len: usize,
    /// The window itself. Shorter than `requested_len` when the region is.
    pub window: &'a str,
}

impl Candidate<'_> {
    /// `true` when the region was too short to honour `requested_len`.
    pub fn is_truncated(&self) -> bool { self.window.len() < self.requested_len }
}

/// A synthesized primer with its annealing temperature.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Primer {
    pub strand: Strand,
    /// Requested length of the candidate this primer was first synthesized from.
    pub requested_len: usize,
    /// Primer sequence, 5' to 3'.
    pub sequence: String,
    /// Additive annealing temperature score in °C.
    pub temperature: u32,
}

/// The selected forward/reverse pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimerPair {
    pub forward: Primer,
    pub reverse: Primer,
}

impl PrimerPair {
    /// Absolute temperature difference between the two primers.
    pub fn temperature_difference(&self) -> u32 {
        self.forward.temperature.abs_diff(self.reverse.temperature)
    }
}

/// Fixed thresholds of the design run.
///
/// These are not user-configurable; [`DesignParams::default`] is what the
/// pipeline uses.
#[derive(Clone, Debug)]
pub struct DesignParams {
    /// Candidate lengths, in the order they are generated and paired.
    pub lengths: &'static [usize],
    /// Shortest usable coding region.
    pub min_region_len: usize,
    /// Lowest accepted annealing temperature (inclusive).
    pub min_temp: u32,
    /// Highest accepted annealing temperature (inclusive).
    pub max_temp: u32,
    /// Largest accepted forward/reverse temperature difference (inclusive).
    pub max_temp_diff: u32,
}

/// Candidate lengths taken from each edge of the coding region.
pub const PRIMER_LENGTHS: &[usize] = &[20, 21, 22, 23];

impl Default for DesignParams {
    fn default() -> Self {
        Self { lengths: PRIMER_LENGTHS, min_region_len: 20, min_temp: 55, max_temp: 62, max_temp_diff: 4 }
    }
}

impl DesignParams {
    /// `true` if `temperature` lies inside `[min_temp, max_temp]`.
    #[inline]
    pub fn in_range(&self, temperature: u32) -> bool {
        (self.min_temp..=self.max_temp).contains(&temperature)
    }
}
