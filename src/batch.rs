//! Batch job discovery and configuration

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::LabelingError;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Failed to read job file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse job file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Job '{0}': {1}")]
    InvalidJob(String, LabelingError),
}

fn default_max_label() -> u32 {
    2
}

/// One enumeration job declared in a `[[tree]]` table of a job file.
#[derive(Debug, Deserialize)]
pub struct Job {
    pub name: Option<String>,
    pub sequence: Vec<u32>,
    #[serde(default = "default_max_label", rename = "max-label")]
    pub max_label: u32,
    #[serde(default)]
    pub edges: bool,
}

impl Job {
    /// File stem for the job's report, falling back to its position in the
    /// job file when no name was given.
    pub fn file_stem(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("tree_{}", index),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct JobFile {
    #[serde(default)]
    tree: Vec<Job>,
}

/// Find all TOML job files under a directory.
pub fn find_job_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            if let Some(ext) = entry.path().extension() {
                if ext == "toml" {
                    files.push(entry.path().to_path_buf());
                }
            }
        }
    }

    files.sort();
    files
}

/// Load the jobs declared in a single job file.
pub fn load_jobs(path: &Path) -> Result<Vec<Job>, BatchError> {
    let content = fs::read_to_string(path)?;
    parse_jobs(&content)
}

fn parse_jobs(content: &str) -> Result<Vec<Job>, BatchError> {
    let file: JobFile = toml::from_str(content)?;
    Ok(file.tree)
}
