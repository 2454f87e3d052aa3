//! Display models derived from the dataset. Pure data, no egui drawing.

pub mod chart;
pub mod table;
