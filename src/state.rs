use crate::data::aggregate::{mean_velocity_by_frequency, FrequencyMean};
use crate::data::model::{Dataset, SourceId};
use crate::data::toggle::{self, Action, ClickCounts};
use crate::view::chart::ChartModel;
use crate::view::table::TableModel;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// `dataset` is the only authoritative data; everything else is derived from
/// it in [`AppState::refresh_views`] after each update.
pub struct AppState {
    pub dataset: Dataset,

    /// Accumulated clicks per "Remove File Data" button.
    pub clicks: ClickCounts,

    /// Mean velocity per frequency over visible records (cached).
    pub means: Vec<FrequencyMean>,

    pub table: TableModel,
    pub chart: ChartModel,

    /// Debug mode shows the dataset snapshot window.
    pub debug: bool,
    pub show_snapshot: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(Dataset::default(), false)
    }
}

impl AppState {
    /// Initial state: every record visible.
    pub fn new(dataset: Dataset, debug: bool) -> Self {
        let mut state = Self {
            dataset,
            clicks: ClickCounts::default(),
            means: Vec::new(),
            table: TableModel::default(),
            chart: ChartModel::default(),
            debug,
            show_snapshot: debug,
            status_message: None,
        };
        state.refresh_views();
        state
    }

    /// Rebuild the table and chart from the current dataset.
    pub fn refresh_views(&mut self) {
        self.means = mean_velocity_by_frequency(&self.dataset);
        self.chart = ChartModel::build(&self.means);
        self.table = TableModel::build(&self.dataset);
        log::debug!(
            "Views rebuilt: {} visible records, {} sources, {} points",
            self.dataset.visible_len(),
            self.table.rows.len(),
            self.chart.points.len()
        );
        if self.table.is_empty() && !self.dataset.is_empty() {
            self.status_message = Some("All files removed".to_string());
        }
    }

    /// Apply actions as one update and refresh the views.
    pub fn dispatch(&mut self, actions: &[Action]) {
        if actions.is_empty() {
            return;
        }
        let dataset = std::mem::take(&mut self.dataset);
        self.dataset = toggle::apply_all(dataset, actions);
        self.refresh_views();
    }

    /// Handle the buttons clicked during one frame.
    ///
    /// Every button with a nonzero click count is replayed, so several clicks
    /// in the same frame hide all their sources in one update.
    pub fn handle_clicks(&mut self, clicked: &[SourceId]) {
        if clicked.is_empty() {
            return;
        }
        for source in clicked {
            self.clicks.register(source);
        }
        let actions = self.clicks.pending_actions();
        self.dispatch(&actions);
    }

    /// JSON interchange form of the current dataset.
    pub fn snapshot_json(&self) -> String {
        self.dataset
            .to_json()
            .unwrap_or_else(|e| format!("<snapshot failed: {e}>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn state() -> AppState {
        AppState::new(
            Dataset::from_records(vec![
                Record::new(1.0, 2.0, "A.fv".into()),
                Record::new(2.0, 6.0, "A.fv".into()),
                Record::new(1.0, 4.0, "B.fv".into()),
            ]),
            false,
        )
    }

    #[test]
    fn initial_views_show_everything() {
        let st = state();
        assert_eq!(st.table.rows.len(), 2);
        assert_eq!(st.chart.points, vec![[3.0, 1.0], [6.0, 2.0]]);
        assert!(st.status_message.is_none());
    }

    #[test]
    fn click_hides_source_and_rebuilds_views() {
        let mut st = state();
        st.handle_clicks(&["A.fv".into()]);
        assert_eq!(st.table.rows.len(), 1);
        assert_eq!(st.table.rows[0].source.as_str(), "B.fv");
        assert_eq!(st.chart.points, vec![[4.0, 1.0]]);
    }

    #[test]
    fn no_clicks_leave_state_untouched() {
        let mut st = state();
        let before = st.dataset.clone();
        st.handle_clicks(&[]);
        assert_eq!(st.dataset, before);
    }

    #[test]
    fn repeated_clicks_replay_harmlessly() {
        let mut st = state();
        st.handle_clicks(&["A.fv".into()]);
        let after_first = st.dataset.clone();
        st.handle_clicks(&["A.fv".into()]);
        assert_eq!(st.dataset, after_first);
        assert_eq!(st.clicks.count(&"A.fv".into()), 2);
    }

    #[test]
    fn removing_everything_sets_status() {
        let mut st = state();
        st.handle_clicks(&["A.fv".into(), "B.fv".into()]);
        assert!(st.table.is_empty());
        assert!(st.chart.is_empty());
        assert!(st.means.is_empty());
        assert_eq!(st.status_message.as_deref(), Some("All files removed"));
    }

    #[test]
    fn snapshot_is_valid_json() {
        let st = state();
        let back = Dataset::from_json(&st.snapshot_json()).unwrap();
        assert_eq!(back, st.dataset);
    }
}
