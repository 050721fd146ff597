//! gdpo-check command-line interface
//!
//! Loads the ontology and instance graphs, merges them, runs the validation
//! sequence, and writes the report plus the materialized graph.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use indexmap::IndexMap;

use gdpo_check::{parser, validate, Store, ValidateConfig};
use gdpo_check::writer;

#[derive(Parser)]
#[command(name = "gdpo-check")]
#[command(version)]
#[command(about = "Rule-based materialization and closed-world validation for GDPO graphs", long_about = None)]
struct Cli {
    /// Ontology file (Turtle)
    #[arg(long, value_name = "FILE")]
    ontology: PathBuf,

    /// Instance data file(s) (Turtle)
    #[arg(long = "instances", value_name = "FILE")]
    instances: Vec<PathBuf>,

    /// Negative-test data file; hygiene and disjointness flags become expected
    #[arg(long, value_name = "FILE")]
    negative: Option<PathBuf>,

    /// Write the report to this file as well as stdout
    #[arg(long = "out-report", value_name = "FILE")]
    out_report: Option<PathBuf>,

    /// Write the materialized graph (Turtle) to this file
    #[arg(long = "out-inferred", value_name = "FILE")]
    out_inferred: Option<PathBuf>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Skip the contrast demonstrations
    #[arg(long = "no-demos")]
    no_demos: bool,

    /// Suppress stdout output
    #[arg(short, long)]
    quiet: bool,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Load one Turtle file into a fresh store, folding its prefixes into the
/// shared map for output serialization.
fn load_graph(path: &Path, prefixes: &mut IndexMap<String, String>) -> Result<Store> {
    let parsed = parser::load_file(path)
        .with_context(|| format!("Failed to load graph: {}", path.display()))?;

    prefixes.extend(parsed.prefixes);

    let mut store = Store::new();
    store.add_all(parsed.triples);
    Ok(store)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut prefixes: IndexMap<String, String> = IndexMap::new();

    let ontology = load_graph(&cli.ontology, &mut prefixes)?;
    if cli.verbose && !cli.quiet {
        eprintln!("Loaded ontology: {} triples", ontology.len());
    }

    let mut merged = ontology.clone();
    for path in &cli.instances {
        let instances = load_graph(path, &mut prefixes)?;
        let added = merged.merge(&instances);
        if cli.verbose && !cli.quiet {
            eprintln!("Loaded {}: {} new triples", path.display(), added);
        }
    }
    if let Some(path) = &cli.negative {
        let negative = load_graph(path, &mut prefixes)?;
        let added = merged.merge(&negative);
        if cli.verbose && !cli.quiet {
            eprintln!("Loaded negative tests {}: {} new triples", path.display(), added);
        }
    }

    let config = ValidateConfig {
        negative: cli.negative.is_some(),
        range_contrast: !cli.no_demos,
        existential_demo: !cli.no_demos,
        ..ValidateConfig::default()
    };

    let report = validate::run(&mut merged, &ontology, &config);

    let rendered = if cli.json {
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?
    } else {
        report.to_text()
    };

    if !cli.quiet {
        print!("{}", rendered);
        if cli.json {
            println!();
        }
    }

    if let Some(path) = &cli.out_report {
        fs::write(path, &rendered)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
    }
    if let Some(path) = &cli.out_inferred {
        fs::write(path, writer::format_turtle(&merged, &prefixes))
            .with_context(|| format!("Failed to write inferred graph: {}", path.display()))?;
    }

    if cli.verbose && !cli.quiet {
        eprintln!(
            "Final graph: {} triples ({} FAIL finding(s))",
            merged.len(),
            report
                .results
                .iter()
                .filter(|r| r.severity == gdpo_check::Severity::Fail)
                .count()
        );
    }

    Ok(())
}
