//! Annealing temperature estimate.
//!
//! Uses the additive rule of thumb `2 °C` per A/T and `4 °C` per G/C. This is a
//! score for ranking short primers, not a calibrated melting temperature.
//!
//! # Examples
//! ```
//! assert_eq!(primerpair::tm::annealing_temperature("AATTGGCC"), 24);
//! ```

/// `2 * (A + T) + 4 * (G + C)`; other characters contribute nothing.
pub fn annealing_temperature(primer: &str) -> u32 {
    primer.bytes().fold(0u32, |acc, b| match b {
        b'A' | b'T' => acc + 2,
        b'G' | b'C' => acc + 4,
        _ => acc,
    })
}

/// Fraction of G/C among the `ATGC` letters of `primer` (0.0 when there are none).
pub fn gc_content(primer: &str) -> f64 {
    let (gc, total) = primer.bytes().fold((0usize, 0usize), |(gc, total), b| match b {
        b'G' | b'C' => (gc + 1, total + 1),
        b'A' | b'T' => (gc, total + 1),
        _ => (gc, total),
    });
    if total == 0 { 0.0 } else { gc as f64 / total as f64 }
}
