//! Result and candidate reports (text, JSON, CSV, table).
//!
//! The text form prints one line per primer with its annealing temperature.
//! The tabular forms list **every** candidate, including those collapsed into
//! an existing pool entry or rejected by the temperature filter.
use std::io::Write;

use polars::prelude::*;
use serde::Serialize;

use crate::candidates::{forward_candidates_with, reverse_candidates_with, synthesize};
use crate::primer::{Candidate, PrimerPair};
use crate::tm::{annealing_temperature, gc_content};
use crate::CandidateSet;

/// Flat success record, as written by `--json`.
#[derive(Debug, Serialize)]
pub struct PairReport<'a> {
    pub forward_primer: &'a str,
    pub forward_temp: u32,
    pub reverse_primer: &'a str,
    pub reverse_temp: u32,
    /// 0-based start of the coding region.
    pub region_start: usize,
    /// 0-based end (exclusive) of the coding region.
    pub region_end: usize,
}

impl<'a> PairReport<'a> {
    pub fn new(pair: &'a PrimerPair, set: &CandidateSet) -> Self {
        Self {
            forward_primer: &pair.forward.sequence,
            forward_temp: pair.forward.temperature,
            reverse_primer: &pair.reverse.sequence,
            reverse_temp: pair.reverse.temperature,
            region_start: set.region.start,
            region_end: set.region.stop + 3,
        }
    }
}

/// Two-line human-readable report of the selected pair.
pub fn pair_text(pair: &PrimerPair) -> String {
    format!(
        "Forward primer: {} | Annealing temperature: {}°C\nReverse primer: {} | Annealing temperature: {}°C",
        pair.forward.sequence, pair.forward.temperature, pair.reverse.sequence, pair.reverse.temperature
    )
}

/// Write the pair as pretty JSON.
pub fn write_json<W: Write>(w: W, report: &PairReport<'_>) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(w, report)?;
    Ok(())
}

/// One candidate as listed by `--csv` and `--candidates`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CandidateRow {
    pub strand: &'static str,
    pub requested_len: usize,
    pub window_len: usize,
    pub primer: String,
    pub temperature: u32,
    pub gc: f64,
    /// `false` when an earlier candidate already produced the same primer.
    pub pooled: bool,
    pub in_range: bool,
    pub selected: bool,
}

/// Build one row per candidate (forward first, then reverse, by length).
pub fn candidate_rows(set: &CandidateSet, pair: Option<&PrimerPair>) -> Vec<CandidateRow> {
    let region = set.region.sequence.as_str();
    let fwd = forward_candidates_with(region, set.params.lengths);
    let rev = reverse_candidates_with(region, set.params.lengths);

    let mut rows = Vec::with_capacity(fwd.len() + rev.len());
    for (cands, chosen) in [(&fwd, pair.map(|p| &p.forward)), (&rev, pair.map(|p| &p.reverse))] {
        let mut seen: Vec<String> = Vec::new();
        for c in cands.iter() {
            rows.push(row_for(c, &mut seen, set, chosen));
        }
    }
    rows
}

fn row_for(c: &Candidate<'_>, seen: &mut Vec<String>, set: &CandidateSet, chosen: Option<&crate::Primer>) -> CandidateRow {
    let primer = synthesize(c);
    let temperature = annealing_temperature(&primer);
    let pooled = !seen.contains(&primer);
    if pooled { seen.push(primer.clone()); }
    let selected = pooled && chosen.map_or(false, |p| p.sequence == primer);
    CandidateRow {
        strand: c.strand.as_str(),
        requested_len: c.requested_len,
        window_len: c.window.chars().count(),
        gc: gc_content(&primer),
        in_range: set.params.in_range(temperature),
        primer,
        temperature,
        pooled,
        selected,
    }
}

/// Write candidate rows as CSV with a header line.
pub fn write_csv<W: Write>(w: W, rows: &[CandidateRow]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Candidate rows as a DataFrame for pretty printing.
pub fn candidates_dataframe(rows: &[CandidateRow]) -> PolarsResult<DataFrame> {
    df!(
        "strand"    => rows.iter().map(|r| r.strand.to_string()).collect::<Vec<_>>(),
        "length"    => rows.iter().map(|r| r.requested_len as u32).collect::<Vec<_>>(),
        "window"    => rows.iter().map(|r| r.window_len as u32).collect::<Vec<_>>(),
        "primer"    => rows.iter().map(|r| r.primer.clone()).collect::<Vec<_>>(),
        "tm"        => rows.iter().map(|r| r.temperature).collect::<Vec<_>>(),
        "gc"        => rows.iter().map(|r| r.gc).collect::<Vec<_>>(),
        "pooled"    => rows.iter().map(|r| r.pooled).collect::<Vec<_>>(),
        "in_range"  => rows.iter().map(|r| r.in_range).collect::<Vec<_>>(),
        "selected"  => rows.iter().map(|r| r.selected).collect::<Vec<_>>(),
    )
}

/// Print the candidate table to stdout without truncating primer strings.
pub fn print_candidates_table(rows: &[CandidateRow]) -> PolarsResult<()> {
    let df = candidates_dataframe(rows)?;
    // Read by Polars' pretty-printer.
    std::env::set_var("POLARS_FMT_TABLE_FORMATTING", "UTF8_FULL");
    std::env::set_var("POLARS_FMT_MAX_ROWS", "1000");
    std::env::set_var("POLARS_FMT_STR_LEN", "1000");
    println!("{}", df);
    Ok(())
}

#[cfg(test)]
mod report_tests {
    use super::*;
    use crate::plan_candidates;

    fn gc_rich_set() -> CandidateSet {
        let seq = format!("ATG{}{}TAG", "GCATGCATGCATGCATGCAT", "ATGCATGCATGCATGCATGC");
        plan_candidates(&seq).unwrap()
    }

    #[test]
    fn text_report_has_both_primers() {
        let set = gc_rich_set();
        let pair = set.select().unwrap();
        let text = pair_text(&pair);
        assert!(text.starts_with("Forward primer: ATGGCATGCATGCATGCATG | Annealing temperature: 60°C"));
        assert!(text.contains("\nReverse primer: CTAGCATGCATGCATGCATG | Annealing temperature: 60°C"));
    }

    #[test]
    fn rows_cover_all_eight_candidates() {
        let set = gc_rich_set();
        let pair = set.select().unwrap();
        let rows = candidate_rows(&set, Some(&pair));
        assert_eq!(rows.len(), 8);
        assert_eq!(rows.iter().filter(|r| r.selected).count(), 2);
        assert!(rows[0].selected && rows[4].selected);
        assert_eq!(rows.iter().filter(|r| r.in_range).count(), 2);
    }

    #[test]
    fn csv_has_header_and_rows() {
        let set = gc_rich_set();
        let rows = candidate_rows(&set, None);
        let mut buf = Vec::new();
        write_csv(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "strand,requested_len,window_len,primer,temperature,gc,pooled,in_range,selected"
        );
        assert_eq!(lines.count(), 8);
    }

    #[test]
    fn json_uses_flat_field_names() {
        let set = gc_rich_set();
        let pair = set.select().unwrap();
        let mut buf = Vec::new();
        write_json(&mut buf, &PairReport::new(&pair, &set)).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["forward_temp"], 60);
        assert_eq!(v["reverse_primer"], "CTAGCATGCATGCATGCATG");
        assert_eq!(v["region_end"], 46);
    }

    #[test]
    fn dataframe_has_one_row_per_candidate() {
        let set = gc_rich_set();
        let rows = candidate_rows(&set, None);
        let df = candidates_dataframe(&rows).unwrap();
        assert_eq!(df.height(), 8);
        assert_eq!(df.width(), 9);
    }
}
