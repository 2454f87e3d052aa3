use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Dataset, Record, SourceId};

// ---------------------------------------------------------------------------
// File layout
// ---------------------------------------------------------------------------

/// Extension of measurement files picked up by [`scan_dir`].
pub const DEFAULT_EXTENSION: &str = "fv";

/// Fixed framing of a measurement file around its data lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileLayout {
    pub header_lines: usize,
    pub trailer_lines: usize,
}

impl Default for FileLayout {
    fn default() -> Self {
        Self {
            header_lines: 23,
            trailer_lines: 5,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{source_id}, line {line}: {reason} ({content:?})")]
    MalformedRow {
        source_id: SourceId,
        line: usize,
        content: String,
        reason: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// List the measurement files directly inside `dir` (no recursion), sorted by
/// path so the load order is deterministic.
pub fn scan_dir(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, LoadError> {
    let io_err = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load one measurement file. The record source is the bare file name.
pub fn load_file(path: &Path, layout: FileLayout) -> Result<Vec<Record>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let source_id = SourceId::new(
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
    );
    parse_measurements(&text, &source_id, layout)
}

/// Load every matching file in `dir` into one frequency-sorted [`Dataset`].
///
/// Fails on the first unreadable file or malformed row.
pub fn load_dir(dir: &Path, extension: &str, layout: FileLayout) -> Result<Dataset, LoadError> {
    let files = scan_dir(dir, extension)?;
    if files.is_empty() {
        log::warn!("No *.{extension} files found in {}", dir.display());
    }

    let mut records = Vec::new();
    for path in &files {
        let recs = load_file(path, layout)?;
        log::info!("Loaded {} records from {}", recs.len(), path.display());
        records.extend(recs);
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Text parser
// ---------------------------------------------------------------------------

/// Parse the body of a measurement file.
///
/// Skips `layout.header_lines` leading and `layout.trailer_lines` trailing
/// lines, then reads `<frequency> <velocity>` pairs. Blank lines are ignored.
pub fn parse_measurements(
    text: &str,
    source_id: &SourceId,
    layout: FileLayout,
) -> Result<Vec<Record>, LoadError> {
    let lines: Vec<&str> = text.lines().collect();
    let framing = layout.header_lines + layout.trailer_lines;
    if lines.len() < framing {
        log::warn!(
            "{source_id}: only {} lines, expected at least {framing}; no data read",
            lines.len()
        );
        return Ok(Vec::new());
    }

    let body = &lines[layout.header_lines..lines.len() - layout.trailer_lines];
    let mut records = Vec::with_capacity(body.len());

    for (offset, line) in body.iter().enumerate() {
        let line_no = layout.header_lines + offset + 1;
        let malformed = |reason| LoadError::MalformedRow {
            source_id: source_id.clone(),
            line: line_no,
            content: line.to_string(),
            reason,
        };

        let mut fields = line.split_whitespace();
        let (freq, vel) = match (fields.next(), fields.next(), fields.next()) {
            (None, _, _) => continue,
            (Some(f), Some(v), None) => (f, v),
            _ => return Err(malformed("expected two columns")),
        };

        let frequency: f64 = freq.parse().map_err(|_| malformed("frequency is not a number"))?;
        let velocity: f64 = vel.parse().map_err(|_| malformed("velocity is not a number"))?;
        if !frequency.is_finite() || !velocity.is_finite() {
            return Err(malformed("non-finite value"));
        }

        records.push(Record::new(frequency, velocity, source_id.clone()));
    }

    Ok(records)
}
