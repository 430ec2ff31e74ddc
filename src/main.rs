use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::warn;

use resume_extract::{parse, ExtractionResult};

#[derive(Parser)]
#[command(name = "resume_extract", about = "Heuristic resume text extractor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one plain-text resume and print the extraction as JSON
    Parse {
        /// Plain-text file (already extracted from its source document)
        file: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Parse every .txt file in a directory and write JSON Lines
    Batch {
        /// Directory of plain-text resumes
        dir: PathBuf,
        /// Output JSONL path
        #[arg(short, long, default_value = "extracted.jsonl")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, pretty } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let result = parse(&text)?;
            let json = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{json}");
            Ok(())
        }
        Commands::Batch { dir, out } => {
            let mut files: Vec<PathBuf> = fs::read_dir(&dir)
                .with_context(|| format!("reading {}", dir.display()))?
                .filter_map(|e| e.ok().map(|e| e.path()))
                .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
                .collect();
            files.sort();
            if files.is_empty() {
                println!("No .txt files in {}", dir.display());
                return Ok(());
            }

            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")?
                    .progress_chars("=> "),
            );

            let results: Vec<Option<ExtractionResult>> = files
                .par_iter()
                .map(|path| {
                    let parsed = fs::read_to_string(path)
                        .map_err(anyhow::Error::from)
                        .and_then(|text| parse(&text).map_err(Into::into));
                    pb.inc(1);
                    match parsed {
                        Ok(result) => Some(result),
                        Err(e) => {
                            warn!("skipping {}: {}", path.display(), e);
                            None
                        }
                    }
                })
                .collect();
            pb.finish_and_clear();

            let mut counts = BatchCounts::default();
            let mut writer = std::io::BufWriter::new(
                fs::File::create(&out).with_context(|| format!("creating {}", out.display()))?,
            );
            for result in results.iter() {
                match result {
                    Some(result) => {
                        counts.tally(result);
                        writeln!(writer, "{}", serde_json::to_string(result)?)?;
                    }
                    None => counts.skipped += 1,
                }
            }
            writer.flush()?;

            counts.print();
            println!("Wrote {}", out.display());
            Ok(())
        }
    }
}

#[derive(Default)]
struct BatchCounts {
    parsed: usize,
    skipped: usize,
    with_email: usize,
    experiences: usize,
    education: usize,
}

impl BatchCounts {
    fn tally(&mut self, result: &ExtractionResult) {
        self.parsed += 1;
        if result.personal.email.is_some() {
            self.with_email += 1;
        }
        self.experiences += result.experiences.len();
        self.education += result.education.len();
    }

    fn print(&self) {
        println!(
            "Parsed {} resumes ({} skipped): {} with email, {} experience entries, {} education entries.",
            self.parsed, self.skipped, self.with_email, self.experiences, self.education,
        );
    }
}
