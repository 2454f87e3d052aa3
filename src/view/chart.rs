use crate::data::aggregate::FrequencyMean;

pub const X_LABEL: &str = "Velocity";
pub const Y_LABEL: &str = "Frequency";

/// Scatter series: velocity on x, frequency on y.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartModel {
    /// `[velocity, frequency]` in ascending frequency order.
    pub points: Vec<[f64; 2]>,
    /// Records behind each point, parallel to `points`.
    pub counts: Vec<usize>,
}

impl ChartModel {
    pub fn build(means: &[FrequencyMean]) -> Self {
        ChartModel {
            points: means
                .iter()
                .map(|m| [m.mean_velocity, m.frequency])
                .collect(),
            counts: means.iter().map(|m| m.count).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
