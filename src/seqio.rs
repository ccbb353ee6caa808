//! FASTA input for the design pipeline.
//!
//! ### Design
//! - Parsing is done with `needletail`, which joins wrapped sequence lines and
//!   drops line endings.
//! - Only the **first** record is used; extra records are logged and ignored.
//! - A first line that does not start with `>` is still taken as the header:
//!   it is dropped and every following line is joined into the sequence.
//!   needletail is bypassed for such input, since it would reject it or (for
//!   `@`) read it as FASTQ.
//! - Sequence letters are passed through untouched (no case folding, no
//!   alphabet validation). Unknown letters are dropped later by the strand
//!   synthesizer.
//!
//! ### Example
//! ```no_run
//! let fasta = primerpair::seqio::load_fasta("gene.fasta").unwrap();
//! println!("{}: {} nt", fasta.id, fasta.seq.len());
//! ```
use std::io::Cursor;
use std::path::Path;

use needletail::parse_fastx_reader;
use tracing::{debug, warn};

use crate::error::DesignError;

/// Extensions accepted as FASTA input.
pub const FASTA_EXTENSIONS: &[&str] = &["fa", "fasta"];

/// One FASTA record with its header and line-joined sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaSequence {
    /// Header line without the leading `>`.
    pub id: String,
    /// Sequence with all line breaks removed.
    pub seq: String,
}

/// `true` if the path ends in `.fa` or `.fasta`.
pub fn is_fasta_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map_or(false, |ext| FASTA_EXTENSIONS.contains(&ext))
}

/// Read the first record of a FASTA file.
pub fn load_fasta<P: AsRef<Path>>(path: P) -> Result<FastaSequence, DesignError> {
    let p = path.as_ref();
    if !is_fasta_path(p) {
        return Err(DesignError::NotFasta(p.to_path_buf()));
    }
    let bytes = std::fs::read(p)?;
    debug!(path = %p.display(), bytes = bytes.len(), "read FASTA file");
    parse_fasta_bytes(bytes)
}

/// Parse the first record from in-memory FASTA text.
pub fn parse_fasta_str(text: &str) -> Result<FastaSequence, DesignError> {
    parse_fasta_bytes(text.as_bytes().to_vec())
}

fn parse_fasta_bytes(bytes: Vec<u8>) -> Result<FastaSequence, DesignError> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(DesignError::EmptyInput);
    }
    if bytes.first() != Some(&b'>') {
        return Ok(split_bare_header(&bytes));
    }
    let mut reader = parse_fastx_reader(Cursor::new(bytes)).map_err(|e| DesignError::Parse(e.to_string()))?;

    let first = match reader.next() {
        Some(record) => {
            let rec = record.map_err(|e| DesignError::Parse(e.to_string()))?;
            FastaSequence {
                id: String::from_utf8_lossy(rec.id()).to_string(),
                seq: String::from_utf8_lossy(&rec.seq()).to_string(),
            }
        }
        None => return Err(DesignError::EmptyInput),
    };

    let mut extra = 0usize;
    while let Some(record) = reader.next() {
        if record.is_ok() { extra += 1; }
    }
    if extra > 0 {
        warn!(ignored = extra, "multi-record FASTA: only the first record `{}` is used", first.id);
    }
    Ok(first)
}

/// Drop the first line as header and join the remaining lines.
fn split_bare_header(bytes: &[u8]) -> FastaSequence {
    let text = String::from_utf8_lossy(bytes);
    let mut lines = text.lines();
    let id = lines.next().unwrap_or("").trim().to_string();
    let seq: String = lines.map(|l| l.trim_end_matches('\r')).collect();
    debug!(header = %id, len = seq.len(), "first line taken as header without '>'");
    FastaSequence { id, seq }
}
