//! citenet - extract a citation-authorship network from paper text
//!
//! Thin driver over citenet-core: reads a plain-text file (the output of
//! whatever extracted the paper from PDF), runs the pipeline once, prints
//! a summary, and writes the requested artifacts.
//!
//! ```bash
//! citenet paper.txt --graph paper.net --report paper.json
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use citenet_core::{analyze, write_pajek};

#[derive(Parser)]
#[command(
    name = "citenet",
    version,
    about = "Extract a citation-authorship network from academic paper text"
)]
struct Cli {
    /// Plain-text file of the paper, PDF extraction already done
    input: PathBuf,

    /// Write the co-authorship graph as a Pajek .net file
    #[arg(long, value_name = "FILE")]
    graph: Option<PathBuf>,

    /// Write the full analysis as a JSON report
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Write the normalized text the pipeline ran on
    #[arg(long, value_name = "FILE")]
    normalized_text: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(&cli.input)?;
    let analysis = analyze(&text)?;

    for warning in &analysis.warnings {
        eprintln!("warning: {warning}");
    }

    println!(
        "{} references, {} authors, {} clusters, {} sentences ({} citing)",
        analysis.references.len(),
        analysis.authors.len(),
        analysis.clusters.len(),
        analysis.sentences.len(),
        analysis.sentence_metadata.len(),
    );
    for (id, cluster) in analysis.clusters.iter().enumerate() {
        let citing = analysis.cluster_sentences.get(&id).map_or(0, Vec::len);
        println!(
            "cluster {id}: {} authors, cited by {citing} sentences",
            cluster.len()
        );
    }

    if let Some(path) = &cli.graph {
        fs::write(path, write_pajek(&analysis.graph))?;
    }
    if let Some(path) = &cli.report {
        fs::write(path, serde_json::to_string_pretty(&analysis.report())?)?;
    }
    if let Some(path) = &cli.normalized_text {
        fs::write(path, &analysis.normalized_text)?;
    }
    Ok(())
}
