//! Error taxonomy for primer design.
//!
//! Every variant is terminal: the pipeline stops at the first failure and the
//! caller reports the message. The `Display` strings are the user-facing
//! messages printed by the `primerpair` binary.
use std::path::PathBuf;

/// Errors returned by the loader and the design pipeline.
#[derive(thiserror::Error, Debug)]
pub enum DesignError {
    /// The sequence contains no `ATG`.
    #[error("No start codon (ATG) was found. Please enter a file containing a complete reading frame.")]
    NoStartCodon,
    /// No stop codon occurs after the start codon.
    #[error("No Stop codon was found. Please enter a file containing a complete reading frame.")]
    NoStopCodonFound,
    /// The coding region is shorter than the shortest primer.
    #[error("The coding region is shorter than 20 nucleotides and no primer design is possible.")]
    RegionTooShort { len: usize },
    /// Every forward candidate falls outside the temperature window.
    #[error("No forward primer sequences with annealing temperatures between 55°C and 62 °C exist for this file")]
    NoForwardPrimerInRange,
    /// Every reverse candidate falls outside the temperature window.
    #[error("No reverse primer sequences with annealing temperatures between 55°C and 62 °C exist for this file")]
    NoReversePrimerInRange,
    /// No forward/reverse combination is within the allowed temperature difference.
    #[error("The determined primer sequences diverge more than 4°C from each other")]
    NoCompatiblePairFound,

    /// Input path does not end in `.fa` or `.fasta`.
    #[error("Please give a fasta-file as input ({}).", .0.display())]
    NotFasta(PathBuf),
    /// The input holds no FASTA record.
    #[error("The input file contains no FASTA record.")]
    EmptyInput,
    /// The FASTA parser rejected the input.
    #[error("Could not parse FASTA input: {0}")]
    Parse(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DesignError {
    /// `true` for failures raised by the design pipeline itself rather than by
    /// loading the input.
    pub fn is_design_failure(&self) -> bool {
        !matches!(self, Self::NotFasta(_) | Self::EmptyInput | Self::Parse(_) | Self::Io(_))
    }
}
