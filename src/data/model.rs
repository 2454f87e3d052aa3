use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SourceId – the file a record came from
// ---------------------------------------------------------------------------

/// Identifier of the measurement file a record was read from (its file name).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(name: impl Into<String>) -> Self {
        SourceId(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SourceId {
    fn from(s: &str) -> Self {
        SourceId(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Record – one measurement point
// ---------------------------------------------------------------------------

/// A single (frequency, velocity) point tagged with its source file.
///
/// `source` is fixed at construction; `visible` can only be cleared through
/// [`crate::data::toggle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub frequency: f64,
    pub velocity: f64,
    source: SourceId,
    visible: bool,
}

impl Record {
    /// New record, visible by default.
    pub fn new(frequency: f64, velocity: f64, source: SourceId) -> Self {
        Record {
            frequency,
            velocity,
            source,
            visible: true,
        }
    }

    pub fn source(&self) -> &SourceId {
        &self.source
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
    }
}

// ---------------------------------------------------------------------------
// Dataset – every record of the session, sorted by frequency
// ---------------------------------------------------------------------------

/// All loaded records, kept in ascending frequency order.
///
/// Records are never removed; hiding a source only clears their `visible` flag,
/// so the ordering established here survives every update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset, sorting by frequency. Ties keep their load order.
    pub fn from_records(mut records: Vec<Record>) -> Self {
        records.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));
        Dataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    /// Number of records, hidden ones included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Visible records in frequency order.
    pub fn visible(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| r.visible)
    }

    pub fn visible_len(&self) -> usize {
        self.visible().count()
    }

    /// Distinct sources in the order they are first met while scanning by
    /// ascending frequency.
    pub fn sources(&self) -> Vec<SourceId> {
        distinct_sources(self.records.iter())
    }

    /// Same as [`Dataset::sources`], restricted to visible records.
    pub fn visible_sources(&self) -> Vec<SourceId> {
        distinct_sources(self.visible())
    }

    /// Whether any record of `source` is still visible.
    pub fn is_source_visible(&self, source: &SourceId) -> bool {
        self.visible().any(|r| &r.source == source)
    }

    /// Serialize to the JSON interchange form used for the debug snapshot.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse the JSON interchange form. Order is re-established on the way in.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let ds: Dataset = serde_json::from_str(text)?;
        Ok(Dataset::from_records(ds.records))
    }
}

fn distinct_sources<'a>(records: impl Iterator<Item = &'a Record>) -> Vec<SourceId> {
    let mut seen: Vec<SourceId> = Vec::new();
    for r in records {
        if !seen.contains(&r.source) {
            seen.push(r.source.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(f: f64, v: f64, s: &str) -> Record {
        Record::new(f, v, SourceId::from(s))
    }

    #[test]
    fn from_records_sorts_by_frequency_and_keeps_ties_stable() {
        let ds = Dataset::from_records(vec![
            rec(3.0, 0.0, "a"),
            rec(1.0, 1.0, "b"),
            rec(1.0, 2.0, "a"),
            rec(2.0, 3.0, "c"),
        ]);
        let freqs: Vec<f64> = ds.records().iter().map(|r| r.frequency).collect();
        assert_eq!(freqs, vec![1.0, 1.0, 2.0, 3.0]);
        assert_eq!(ds.records()[0].source().as_str(), "b");
        assert_eq!(ds.records()[1].source().as_str(), "a");
    }

    #[test]
    fn sources_follow_frequency_scan_order() {
        let ds = Dataset::from_records(vec![
            rec(5.0, 0.0, "late.fv"),
            rec(1.0, 0.0, "early.fv"),
            rec(2.0, 0.0, "late.fv"),
        ]);
        assert_eq!(
            ds.sources(),
            vec![SourceId::from("early.fv"), SourceId::from("late.fv")]
        );
    }

    #[test]
    fn new_records_are_visible() {
        let r = rec(1.0, 2.0, "x");
        assert!(r.is_visible());
        let ds = Dataset::from_records(vec![r]);
        assert_eq!(ds.visible_len(), 1);
        assert!(ds.is_source_visible(&SourceId::from("x")));
    }

    #[test]
    fn json_snapshot_restores_order_and_flags() {
        let mut ds = Dataset::from_records(vec![rec(2.0, 1.0, "a"), rec(1.0, 4.0, "b")]);
        ds.records_mut()[0].hide();
        let text = ds.to_json().unwrap();
        let back = Dataset::from_json(&text).unwrap();
        assert_eq!(back, ds);
        assert!(!back.records()[0].is_visible());
    }
}
