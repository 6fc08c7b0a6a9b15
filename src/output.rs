//! Labeling report rendering

use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::Labelings;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Render a full enumeration run and write it to a file.
pub fn write_report(labelings: Labelings, output_path: &Path) -> Result<(), OutputError> {
    let content = render_to_string(labelings);

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(output_path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}

/// Render a full enumeration run to a string: the balanced sequence, one
/// labeling per line, and the final count.
pub fn render_to_string(labelings: Labelings) -> String {
    let mut output = String::new();
    output.push_str("sequence: ");
    output.push_str(&join(labelings.balanced()));
    output.push('\n');

    let mut count = 0usize;
    for labeling in labelings {
        output.push_str(&join(&labeling));
        output.push('\n');
        count += 1;
    }

    output.push_str(&format!("count: {}\n", count));
    output
}

/// Space-separated rendering of a label or depth vector.
pub fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
