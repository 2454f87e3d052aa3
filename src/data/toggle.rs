use std::collections::BTreeMap;

use super::model::{Dataset, SourceId};

// ---------------------------------------------------------------------------
// Actions dispatched by the table buttons
// ---------------------------------------------------------------------------

/// A user action on the dataset. Hiding is one-way: there is no "show".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hide every record read from this source.
    HideSource(SourceId),
}

/// Apply one action and return the updated dataset.
///
/// Hiding a source that is unknown or already hidden leaves the dataset as is.
pub fn apply(mut dataset: Dataset, action: &Action) -> Dataset {
    match action {
        Action::HideSource(target) => {
            let mut hidden = 0usize;
            for rec in dataset.records_mut() {
                if rec.source() == target && rec.is_visible() {
                    rec.hide();
                    hidden += 1;
                }
            }
            if hidden > 0 {
                log::info!("Hid {hidden} records from {target}");
            }
        }
    }
    dataset
}

/// Apply every action as a single update.
pub fn apply_all<'a>(dataset: Dataset, actions: impl IntoIterator<Item = &'a Action>) -> Dataset {
    actions.into_iter().fold(dataset, apply)
}

// ---------------------------------------------------------------------------
// Button click counters
// ---------------------------------------------------------------------------

/// Accumulated click count per source button.
///
/// Counts only ever grow; a nonzero count means "hide this source". Sources
/// that were never clicked are absent.
#[derive(Debug, Clone, Default)]
pub struct ClickCounts {
    counts: BTreeMap<SourceId, u32>,
}

impl ClickCounts {
    /// Record one activation of the button for `source`.
    pub fn register(&mut self, source: &SourceId) {
        *self.counts.entry(source.clone()).or_default() += 1;
    }

    pub fn count(&self, source: &SourceId) -> u32 {
        self.counts.get(source).copied().unwrap_or(0)
    }

    /// Whether any button has ever been activated.
    pub fn any(&self) -> bool {
        self.counts.values().any(|&c| c > 0)
    }

    /// One hide action for every source whose button has been activated.
    pub fn pending_actions(&self) -> Vec<Action> {
        self.counts
            .iter()
            .filter(|(_, &c)| c > 0)
            .map(|(s, _)| Action::HideSource(s.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            Record::new(1.0, 2.0, "a.fv".into()),
            Record::new(1.0, 4.0, "b.fv".into()),
            Record::new(2.0, 10.0, "a.fv".into()),
            Record::new(3.0, 7.0, "c.fv".into()),
        ])
    }

    fn hide(s: &str) -> Action {
        Action::HideSource(s.into())
    }

    #[test]
    fn hides_exactly_the_target_source() {
        let before = dataset();
        let after = apply(before.clone(), &hide("a.fv"));
        for (b, a) in before.records().iter().zip(after.records()) {
            let expected = b.is_visible() && b.source().as_str() != "a.fv";
            assert_eq!(a.is_visible(), expected);
            assert_eq!(a.frequency, b.frequency);
            assert_eq!(a.source(), b.source());
        }
    }

    #[test]
    fn hiding_twice_is_idempotent() {
        let once = apply(dataset(), &hide("b.fv"));
        let twice = apply(once.clone(), &hide("b.fv"));
        assert_eq!(once, twice);
    }

    #[test]
    fn previously_hidden_records_stay_hidden() {
        let ds = apply(dataset(), &hide("c.fv"));
        let ds = apply(ds, &hide("a.fv"));
        assert_eq!(ds.visible_sources(), vec![SourceId::from("b.fv")]);
    }

    #[test]
    fn unknown_source_is_a_no_op() {
        let ds = dataset();
        assert_eq!(apply(ds.clone(), &hide("missing.fv")), ds);
    }

    #[test]
    fn no_clicks_passes_dataset_through() {
        let clicks = ClickCounts::default();
        assert!(!clicks.any());
        let ds = dataset();
        assert_eq!(apply_all(ds.clone(), &clicks.pending_actions()), ds);
    }

    #[test]
    fn simultaneous_clicks_hide_all_in_one_update() {
        let mut clicks = ClickCounts::default();
        clicks.register(&"a.fv".into());
        clicks.register(&"c.fv".into());
        let ds = apply_all(dataset(), &clicks.pending_actions());
        assert_eq!(ds.visible_sources(), vec![SourceId::from("b.fv")]);
    }

    #[test]
    fn counts_are_monotonic() {
        let mut clicks = ClickCounts::default();
        let a = SourceId::from("a.fv");
        clicks.register(&a);
        clicks.register(&a);
        assert_eq!(clicks.count(&a), 2);
        assert_eq!(clicks.pending_actions(), vec![Action::HideSource(a)]);
    }

    #[test]
    fn toggle_preserves_frequency_order() {
        let ds = apply(dataset(), &hide("b.fv"));
        assert!(ds
            .records()
            .windows(2)
            .all(|w| w[0].frequency <= w[1].frequency));
    }
}
