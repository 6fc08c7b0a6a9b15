use clap::{Parser, Subcommand};
use std::path::Path;

use crate::batch::{self, BatchError};
use crate::output;
use crate::{enumerate_labelings, LabelingError};

/// Salix - Canonical Labeling Generator for Free Trees
#[derive(Parser)]
#[command(name = "salix")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate the labelings of a single tree
    Enumerate {
        /// Pre-order depth sequence of the tree, e.g. "0 1 1 2" or "0,1,1,2"
        #[arg(value_name = "SEQUENCE")]
        sequence: String,

        /// Alphabet size; labels come from 0..MAX_LABEL
        #[arg(short, long, default_value_t = 2)]
        max_label: u32,

        /// Label the tree's edges instead of its vertices
        #[arg(short, long)]
        edges: bool,

        /// Print only the number of labelings
        #[arg(long)]
        count_only: bool,
    },

    /// Run every job declared in the TOML files under a directory
    Batch {
        /// Directory to scan for job files (default: current directory)
        #[arg(value_name = "DIR", default_value = ".")]
        dir: String,

        /// Output directory for the report files
        #[arg(short, long, default_value = "labelings")]
        output: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        match self.command {
            Commands::Enumerate {
                sequence,
                max_label,
                edges,
                count_only,
            } => enumerate(&sequence, max_label, edges, count_only),
            Commands::Batch { dir, output } => run_batch(Path::new(&dir), Path::new(&output)),
        }
    }
}

fn enumerate(
    sequence: &str,
    max_label: u32,
    edges: bool,
    count_only: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let sequence = parse_sequence(sequence)?;
    let labelings = enumerate_labelings(&sequence, max_label, edges)?;

    println!("sequence: {}", output::join(labelings.balanced()));

    let mut count = 0usize;
    for labeling in labelings {
        if !count_only {
            println!("{}", output::join(&labeling));
        }
        count += 1;
    }

    println!("Count of possible labelings: {}", count);
    Ok(())
}

fn run_batch(dir: &Path, output_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let job_files = batch::find_job_files(dir);
    if job_files.is_empty() {
        println!("No job files found in {:?}", dir);
        return Ok(());
    }

    println!("Found {} job files", job_files.len());
    let mut total_reports = 0;

    for file_path in job_files {
        let jobs = match batch::load_jobs(&file_path) {
            Ok(jobs) => jobs,
            Err(e) => {
                eprintln!("Warning: Failed to parse {:?}: {}", file_path, e);
                continue;
            }
        };

        for (i, job) in jobs.iter().enumerate() {
            let stem = job.file_stem(i);
            let labelings = enumerate_labelings(&job.sequence, job.max_label, job.edges)
                .map_err(|e| BatchError::InvalidJob(stem.clone(), e))?;

            let output_path = output_dir.join(format!("{}.labels", stem));
            output::write_report(labelings, &output_path)?;
            println!("  -> {:?}", output_path);
            total_reports += 1;
        }
    }

    println!("Generated {} reports total", total_reports);
    Ok(())
}

/// Parse a whitespace- or comma-separated depth sequence.
fn parse_sequence(input: &str) -> Result<Vec<u32>, LabelingError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<u32>().map_err(|_| {
                LabelingError::InvalidTreeDescription(format!(
                    "'{}' is not a non-negative integer",
                    token
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sequence() {
        assert_eq!(parse_sequence("0 1 1 2").unwrap(), vec![0, 1, 1, 2]);
        assert_eq!(parse_sequence("0,1,1,2").unwrap(), vec![0, 1, 1, 2]);
        assert_eq!(parse_sequence(" 0, 1  2 ").unwrap(), vec![0, 1, 2]);
        assert!(parse_sequence("0 1 x").is_err());
        assert!(parse_sequence("0 -1").is_err());
    }
}
