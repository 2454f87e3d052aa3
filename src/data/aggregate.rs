use serde::Serialize;

use super::model::Dataset;

/// Mean velocity of all visible records sharing one frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyMean {
    pub frequency: f64,
    pub mean_velocity: f64,
    /// Number of records averaged into this point.
    pub count: usize,
}

/// Group visible records by exact frequency and average their velocities.
///
/// The dataset is already frequency-sorted, so equal frequencies are adjacent
/// and a single pass is enough. Output is ascending by frequency; an empty
/// visible set gives an empty vector.
pub fn mean_velocity_by_frequency(dataset: &Dataset) -> Vec<FrequencyMean> {
    let mut out: Vec<FrequencyMean> = Vec::new();
    let mut sum = 0.0;

    for rec in dataset.visible() {
        match out.last_mut() {
            Some(group) if group.frequency == rec.frequency => {
                sum += rec.velocity;
                group.count += 1;
                group.mean_velocity = sum / group.count as f64;
            }
            _ => {
                sum = rec.velocity;
                out.push(FrequencyMean {
                    frequency: rec.frequency,
                    mean_velocity: rec.velocity,
                    count: 1,
                });
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;
    use crate::data::toggle::{apply, Action};

    #[test]
    fn averages_per_frequency() {
        let ds = Dataset::from_records(vec![
            Record::new(2.0, 10.0, "a.fv".into()),
            Record::new(1.0, 2.0, "a.fv".into()),
            Record::new(1.0, 4.0, "b.fv".into()),
        ]);
        let pairs: Vec<(f64, f64)> = mean_velocity_by_frequency(&ds)
            .iter()
            .map(|m| (m.frequency, m.mean_velocity))
            .collect();
        assert_eq!(pairs, vec![(1.0, 3.0), (2.0, 10.0)]);
    }

    #[test]
    fn hidden_records_do_not_contribute() {
        let ds = Dataset::from_records(vec![
            Record::new(1.0, 2.0, "a.fv".into()),
            Record::new(1.0, 4.0, "b.fv".into()),
            Record::new(1.0, 9.0, "a.fv".into()),
        ]);
        let ds = apply(ds, &Action::HideSource("a.fv".into()));
        let means = mean_velocity_by_frequency(&ds);
        assert_eq!(means.len(), 1);
        assert_eq!(means[0].mean_velocity, 4.0);
        assert_eq!(means[0].count, 1);
    }

    #[test]
    fn empty_visible_set_gives_empty_output() {
        let ds = Dataset::from_records(vec![Record::new(1.0, 2.0, "a.fv".into())]);
        let ds = apply(ds, &Action::HideSource("a.fv".into()));
        assert!(mean_velocity_by_frequency(&ds).is_empty());
        assert!(mean_velocity_by_frequency(&Dataset::default()).is_empty());
    }
}
