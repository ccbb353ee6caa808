//! Primer candidate generation and strand synthesis.
//!
//! Candidates are windows of the coding region: prefixes for the forward
//! primer and suffixes for the reverse primer, one per entry of
//! [`PRIMER_LENGTHS`]. A request longer than the region returns the whole
//! region; in that case two lengths can yield the same window, and the primer
//! pool later collapses them into one entry.
//!
//! # Examples
//! ```
//! use primerpair::candidates::{synthesize_forward, synthesize_reverse};
//! assert_eq!(synthesize_forward("ATxGC"), "ATGC");
//! assert_eq!(synthesize_reverse("AACGT"), "ACGTT");
//! ```
use crate::primer::{Candidate, Strand, PRIMER_LENGTHS};

/// First `n` characters of `s`, or all of `s` if it is shorter.
fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// Last `n` characters of `s`, or all of `s` if it is shorter.
fn suffix(s: &str, n: usize) -> &str {
    if n == 0 { return &s[s.len()..]; }
    match s.char_indices().rev().nth(n - 1) {
        Some((i, _)) => &s[i..],
        None => s,
    }
}

/// Forward candidates: prefixes of `region` of each length in `lengths`.
pub fn forward_candidates_with<'a>(region: &'a str, lengths: &[usize]) -> Vec<Candidate<'a>> {
    lengths
        .iter()
        .map(|&n| Candidate { strand: Strand::Forward, requested_len: n, window: prefix(region, n) })
        .collect()
}

/// Reverse candidates: suffixes of `region` of each length in `lengths`.
pub fn reverse_candidates_with<'a>(region: &'a str, lengths: &[usize]) -> Vec<Candidate<'a>> {
    lengths
        .iter()
        .map(|&n| Candidate { strand: Strand::Reverse, requested_len: n, window: suffix(region, n) })
        .collect()
}

/// The four forward candidates (lengths 20, 21, 22, 23).
pub fn forward_candidates(region: &str) -> Vec<Candidate<'_>> { forward_candidates_with(region, PRIMER_LENGTHS) }

/// The four reverse candidates (lengths 20, 21, 22, 23).
pub fn reverse_candidates(region: &str) -> Vec<Candidate<'_>> { reverse_candidates_with(region, PRIMER_LENGTHS) }

/// Identity copy of `window`, keeping only `A`, `T`, `G` and `C`.
pub fn synthesize_forward(window: &str) -> String {
    window.chars().filter(|c| matches!(c, 'A' | 'T' | 'G' | 'C')).collect()
}

#[inline]
fn complement(c: char) -> Option<char> {
    match c {
        'A' => Some('T'),
        'T' => Some('A'),
        'G' => Some('C'),
        'C' => Some('G'),
        _ => None,
    }
}

/// Reverse complement of `window`; characters outside `ATGC` are dropped.
pub fn synthesize_reverse(window: &str) -> String {
    window.chars().rev().filter_map(complement).collect()
}

/// Synthesize the primer for a candidate according to its strand.
pub fn synthesize(candidate: &Candidate<'_>) -> String {
    match candidate.strand {
        Strand::Forward => synthesize_forward(candidate.window),
        Strand::Reverse => synthesize_reverse(candidate.window),
    }
}

#[cfg(test)]
mod candidates_tests {
    use super::*;

    const REGION: &str = "ATGCCCGGGAAATTTCCCGGGAAATTTCCCTAG"; // 33 nt

    #[test]
    fn forward_candidates_are_growing_prefixes() {
        let c = forward_candidates(REGION);
        assert_eq!(c.len(), 4);
        for (cand, n) in c.iter().zip(PRIMER_LENGTHS) {
            assert_eq!(cand.window.len(), *n);
            assert!(REGION.starts_with(cand.window));
            assert_eq!(cand.strand, Strand::Forward);
        }
    }

    #[test]
    fn reverse_candidates_are_growing_suffixes() {
        let c = reverse_candidates(REGION);
        assert_eq!(c.len(), 4);
        for (cand, n) in c.iter().zip(PRIMER_LENGTHS) {
            assert_eq!(cand.window.len(), *n);
            assert!(REGION.ends_with(cand.window));
        }
    }

    #[test]
    fn over_length_requests_return_whole_region() {
        let region = "ATGCCCGGGAAATTTCCTAG"; // 20 nt
        let f = forward_candidates(region);
        let r = reverse_candidates(region);
        assert!(f.iter().all(|c| c.window == region));
        assert!(r.iter().all(|c| c.window == region));
        assert!(!f[0].is_truncated());
        assert!(f[3].is_truncated());
    }

    #[test]
    fn forward_drops_unknown_characters() {
        assert_eq!(synthesize_forward("ATGNNcGC-"), "ATGGC");
    }

    #[test]
    fn reverse_complements_back_to_front() {
        assert_eq!(synthesize_reverse("ATGC"), "GCAT");
        assert_eq!(synthesize_reverse("AAAGN"), "CTTT");
    }

    #[test]
    fn synthesize_dispatches_on_strand() {
        let f = Candidate { strand: Strand::Forward, requested_len: 4, window: "AACG" };
        let r = Candidate { strand: Strand::Reverse, requested_len: 4, window: "AACG" };
        assert_eq!(synthesize(&f), "AACG");
        assert_eq!(synthesize(&r), "CGTT");
    }
}
