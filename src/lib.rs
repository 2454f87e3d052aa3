//! Frequency/velocity measurement viewer.
//!
//! Loads every `*.fv` file in a directory, plots mean velocity per frequency and
//! lets the user remove individual files from the table and the plot.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;
pub mod view;
