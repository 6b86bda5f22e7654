//! docxtext CLI - plain text extraction from Word documents
//!
//! `docxtext input_file.docx output_file.txt` writes the document's
//! paragraph and table text to the output file.

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};
use colored::*;
use docxtext::{ExtractOptions, MergedCells, TableOrder};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: docxtext input_file.docx output_file.txt";

/// Extract plain text from a Word document
#[derive(Parser)]
#[command(
    name = "docxtext",
    version,
    about = "Extract plain text from a Word document",
    long_about = "docxtext - plain text extraction from Word (.docx) documents.\n\n\
                  Writes every top-level paragraph, then every table cell paragraph,\n\
                  one per line, to the output file."
)]
struct Cli {
    /// Input .docx file
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// Output text file (overwritten if it exists)
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,

    /// Place table text at the table's position instead of after all paragraphs
    #[arg(long)]
    interleave_tables: bool,

    /// How merged table cells contribute text
    #[arg(long, value_enum, default_value = "repeat")]
    merged_cells: MergedMode,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Merged cell mode
#[derive(Clone, ValueEnum)]
enum MergedMode {
    /// Repeat a merged cell's text for every grid position it covers
    Repeat,
    /// Emit a merged cell's text once
    Once,
}

impl From<MergedMode> for MergedCells {
    fn from(mode: MergedMode) -> Self {
        match mode {
            MergedMode::Repeat => MergedCells::Repeat,
            MergedMode::Once => MergedCells::Once,
        }
    }
}

impl Cli {
    fn extract_options(&self) -> ExtractOptions {
        let order = if self.interleave_tables {
            TableOrder::Interleaved
        } else {
            TableOrder::AfterParagraphs
        };
        ExtractOptions::new()
            .with_table_order(order)
            .with_merged_cells(self.merged_cells.clone().into())
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{}", USAGE);
            std::process::exit(1);
        }
    };

    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        tracing::debug!(error = ?e, "extraction failed");
        println!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }

    println!(
        "Text successfully extracted from {} to {}",
        cli.input.display(),
        cli.output.display()
    );
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let doc = docxtext::load_file(&cli.input)?;
    tracing::info!(
        paragraphs = doc.paragraphs.len(),
        tables = doc.tables.len(),
        "loaded {}",
        cli.input.display()
    );

    let text = docxtext::extract::extract_text_with_options(&doc, &cli.extract_options());

    fs::write(&cli.output, &text)?;
    tracing::info!(bytes = text.len(), "wrote {}", cli.output.display());

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
