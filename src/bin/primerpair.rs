use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use primerpair::report::{self, PairReport};
use primerpair::seqio;

/// primerpair CLI
#[derive(Parser)]
#[command(name = "primerpair")]
#[command(version)]
#[command(about = "Design a forward/reverse PCR primer pair for a FASTA coding region", long_about = None)]
struct Cli {
    /// FASTA file (.fa/.fasta). Prompted for when omitted.
    file: Option<PathBuf>,
    /// Emit the selected pair as JSON
    #[arg(long, conflicts_with = "csv")]
    json: bool,
    /// Emit every candidate as CSV to stdout
    #[arg(long)]
    csv: bool,
    /// Print a table of every candidate before the result
    #[arg(long)]
    candidates: bool,
    /// Verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            // Input problems exit 2, design failures 1.
            match e.downcast_ref::<primerpair::DesignError>() {
                Some(de) if !de.is_design_failure() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let path = match cli.file {
        Some(p) => p,
        None => prompt_for_fasta(io::stdin().lock(), io::stdout())?,
    };
    debug!(path = %path.display(), "input");

    let fasta = seqio::load_fasta(&path)?;
    let set = primerpair::plan_candidates(&fasta.seq)?;
    let selection = set.select();

    if cli.candidates {
        let rows = report::candidate_rows(&set, selection.as_ref().ok());
        report::print_candidates_table(&rows)?;
    }
    let pair = selection?;

    let stdout = io::stdout();
    if cli.json {
        let mut out = stdout.lock();
        report::write_json(&mut out, &PairReport::new(&pair, &set))?;
        writeln!(out)?;
    } else if cli.csv {
        report::write_csv(stdout.lock(), &report::candidate_rows(&set, Some(&pair)))?;
    } else {
        println!("{}", report::pair_text(&pair));
    }
    Ok(())
}

/// Ask for a path until one with a FASTA extension is given.
fn prompt_for_fasta<R: BufRead, W: Write>(mut input: R, mut out: W) -> anyhow::Result<PathBuf> {
    loop {
        write!(out, "Please type the file path of your fasta file: ")?;
        out.flush()?;
        let mut line = String::new();
        let n = input.read_line(&mut line).context("reading file path from stdin")?;
        if n == 0 {
            anyhow::bail!("no FASTA file path given");
        }
        let candidate = PathBuf::from(line.trim_end_matches(['\n', '\r']));
        if seqio::is_fasta_path(&candidate) {
            return Ok(candidate);
        }
        writeln!(out, "Please give a fasta-file as input.")?;
    }
}

#[cfg(test)]
mod prompt_tests {
    use super::*;

    #[test]
    fn reprompts_until_fasta_extension() {
        let input = b"notes.txt\ngene.fq\ngene.fasta\n";
        let mut out = Vec::new();
        let p = prompt_for_fasta(&input[..], &mut out).unwrap();
        assert_eq!(p, PathBuf::from("gene.fasta"));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Please give a fasta-file as input.").count(), 2);
    }

    #[test]
    fn eof_aborts() {
        let mut out = Vec::new();
        assert!(prompt_for_fasta(&b""[..], &mut out).is_err());
    }
}
