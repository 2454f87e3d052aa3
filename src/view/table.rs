use eframe::egui::Color32;

use crate::color::generate_gradient;
use crate::data::model::{Dataset, SourceId};
use crate::data::toggle::Action;

pub const HEADER: [&str; 2] = ["Filename", ""];
pub const REMOVE_LABEL: &str = "Remove File Data";

/// One row of the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub source: SourceId,
    pub color: Color32,
    /// Dispatched when the row's button is clicked.
    pub action: Action,
}

/// Display-ready source table: one row per visible source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableModel {
    pub rows: Vec<TableRow>,
}

impl TableModel {
    /// Rows follow the order sources are first met in the frequency-sorted
    /// dataset. Hidden sources get no row.
    pub fn build(dataset: &Dataset) -> Self {
        let sources = dataset.visible_sources();
        let colors = generate_gradient(sources.len());
        let rows = sources
            .into_iter()
            .zip(colors)
            .map(|(source, color)| TableRow {
                color,
                action: Action::HideSource(source.clone()),
                source,
            })
            .collect();
        TableModel { rows }
    }

    pub fn header(&self) -> [&'static str; 2] {
        HEADER
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
