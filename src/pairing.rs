//! Primer pools, temperature filtering and pair selection.
//!
//! A [`PrimerPool`] maps primer strings to temperatures while remembering
//! insertion order. Two candidates that synthesize to the same string share one
//! entry (the first one keeps its position). Pair selection is first-match: the
//! forward pool is walked in order, and for each forward primer the reverse pool
//! is walked in order; the first combination within the allowed temperature
//! difference is returned, with no search for a closer match.
use tracing::debug;

use crate::candidates::synthesize;
use crate::error::DesignError;
use crate::primer::{Candidate, DesignParams, Primer, PrimerPair};
use crate::tm::annealing_temperature;

/// Insertion-ordered, string-keyed set of primers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrimerPool {
    primers: Vec<Primer>,
}

impl PrimerPool {
    pub fn new() -> Self { Self::default() }

    /// Insert `primer`. Returns `false` if a primer with the same sequence is
    /// already pooled, in which case the pool is unchanged.
    pub fn insert(&mut self, primer: Primer) -> bool {
        if self.contains(&primer.sequence) { return false; }
        self.primers.push(primer);
        true
    }

    pub fn contains(&self, sequence: &str) -> bool {
        self.primers.iter().any(|p| p.sequence == sequence)
    }

    pub fn len(&self) -> usize { self.primers.len() }
    pub fn is_empty(&self) -> bool { self.primers.is_empty() }

    /// Primers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Primer> { self.primers.iter() }

    /// Keep only primers with `min <= temperature <= max`.
    pub fn retain_in_range(&mut self, min: u32, max: u32) {
        self.primers.retain(|p| (min..=max).contains(&p.temperature));
    }

    /// Copy of the pool restricted to the temperature window of `params`.
    pub fn filtered(&self, params: &DesignParams) -> PrimerPool {
        let mut out = self.clone();
        out.retain_in_range(params.min_temp, params.max_temp);
        out
    }
}

/// Synthesize and score each candidate, pooling them in candidate order.
pub fn build_pool(candidates: &[Candidate<'_>]) -> PrimerPool {
    let mut pool = PrimerPool::new();
    for c in candidates {
        let sequence = synthesize(c);
        let temperature = annealing_temperature(&sequence);
        let inserted = pool.insert(Primer { strand: c.strand, requested_len: c.requested_len, sequence, temperature });
        if !inserted {
            debug!(strand = %c.strand, len = c.requested_len, "duplicate primer collapsed in pool");
        }
    }
    pool
}

/// Pick the first forward/reverse combination whose temperatures differ by at
/// most `params.max_temp_diff`. Both pools are expected to be filtered already.
pub fn select_pair(forward: &PrimerPool, reverse: &PrimerPool, params: &DesignParams) -> Result<PrimerPair, DesignError> {
    if forward.is_empty() { return Err(DesignError::NoForwardPrimerInRange); }
    if reverse.is_empty() { return Err(DesignError::NoReversePrimerInRange); }

    for f in forward.iter() {
        for r in reverse.iter() {
            if f.temperature.abs_diff(r.temperature) <= params.max_temp_diff {
                return Ok(PrimerPair { forward: f.clone(), reverse: r.clone() });
            }
        }
    }
    Err(DesignError::NoCompatiblePairFound)
}

#[cfg(test)]
mod pairing_tests {
    use super::*;
    use crate::primer::Strand;

    fn primer(strand: Strand, len: usize, temperature: u32) -> Primer {
        Primer { strand, requested_len: len, sequence: format!("{strand}-{len}"), temperature }
    }

    fn pool(strand: Strand, temps: &[(usize, u32)]) -> PrimerPool {
        let mut p = PrimerPool::new();
        for &(len, t) in temps { p.insert(primer(strand, len, t)); }
        p
    }

    #[test]
    fn duplicate_sequences_collapse_keeping_first_position() {
        let mut p = PrimerPool::new();
        assert!(p.insert(Primer { strand: Strand::Forward, requested_len: 20, sequence: "ACGT".into(), temperature: 12 }));
        assert!(p.insert(Primer { strand: Strand::Forward, requested_len: 21, sequence: "ACGTA".into(), temperature: 14 }));
        assert!(!p.insert(Primer { strand: Strand::Forward, requested_len: 22, sequence: "ACGT".into(), temperature: 12 }));
        assert_eq!(p.len(), 2);
        assert_eq!(p.iter().next().unwrap().requested_len, 20);
        let temps: Vec<u32> = p.iter().map(|x| x.temperature).collect();
        assert_eq!(temps, vec![12, 14]);
    }

    #[test]
    fn range_filter_is_inclusive() {
        let mut p = pool(Strand::Forward, &[(20, 54), (21, 55), (22, 62), (23, 63)]);
        p.retain_in_range(55, 62);
        let temps: Vec<u32> = p.iter().map(|x| x.temperature).collect();
        assert_eq!(temps, vec![55, 62]);
    }

    #[test]
    fn empty_forward_reported_before_empty_reverse() {
        let params = DesignParams::default();
        let e = select_pair(&PrimerPool::new(), &PrimerPool::new(), &params).unwrap_err();
        assert!(matches!(e, DesignError::NoForwardPrimerInRange));
        let f = pool(Strand::Forward, &[(20, 58)]);
        let e = select_pair(&f, &PrimerPool::new(), &params).unwrap_err();
        assert!(matches!(e, DesignError::NoReversePrimerInRange));
    }

    #[test]
    fn first_match_not_best_match() {
        let params = DesignParams::default();
        let f = pool(Strand::Forward, &[(20, 55), (21, 60)]);
        let r = pool(Strand::Reverse, &[(20, 59), (21, 60)]);
        let pair = select_pair(&f, &r, &params).unwrap();
        // (55, 59) differs by 4 and comes first even though (60, 60) is exact.
        assert_eq!(pair.forward.requested_len, 20);
        assert_eq!(pair.reverse.requested_len, 20);
        assert_eq!(pair.temperature_difference(), 4);
    }

    #[test]
    fn search_covers_all_combinations() {
        let params = DesignParams::default();
        let f = pool(Strand::Forward, &[(20, 55), (23, 62)]);
        let r = pool(Strand::Reverse, &[(20, 61), (21, 60)]);
        let pair = select_pair(&f, &r, &params).unwrap();
        assert_eq!((pair.forward.requested_len, pair.reverse.requested_len), (23, 20));
    }

    #[test]
    fn no_pair_within_difference() {
        let params = DesignParams::default();
        let f = pool(Strand::Forward, &[(20, 55)]);
        let r = pool(Strand::Reverse, &[(20, 60), (21, 62)]);
        assert!(matches!(select_pair(&f, &r, &params), Err(DesignError::NoCompatiblePairFound)));
    }
}
