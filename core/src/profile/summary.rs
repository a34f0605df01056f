use crate::prelude::{Action, ProfileResult};
use serde::{Deserialize, Serialize};

/// Aggregate earthwork figures for a computed profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileSummary {
    pub point_count: usize,
    pub excavate_count: usize,
    pub fill_count: usize,
    /// Largest positive depth, zero when nothing needs excavating.
    pub max_cut: f64,
    /// Largest fill height as a positive number.
    pub max_fill: f64,
    pub slope: f64,
}

impl ProfileSummary {
    pub fn from_results(results: &[ProfileResult], slope: f64) -> Self {
        let mut summary = Self {
            point_count: results.len(),
            slope,
            ..Default::default()
        };
        for result in results {
            match result.action {
                Action::Excavate => {
                    summary.excavate_count += 1;
                    summary.max_cut = summary.max_cut.max(result.depth);
                }
                Action::Fill => {
                    summary.fill_count += 1;
                    summary.max_fill = summary.max_fill.max(-result.depth);
                }
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(depth: f64) -> ProfileResult {
        ProfileResult {
            distance: 0.0,
            surface_elevation: depth,
            trench_base_elevation: 0.0,
            depth,
            action: Action::for_depth(depth),
        }
    }

    #[test]
    fn summary_splits_cut_and_fill() {
        let results = vec![result(0.4), result(-1.5), result(0.0), result(1.25)];
        let summary = ProfileSummary::from_results(&results, -0.02);
        assert_eq!(summary.point_count, 4);
        assert_eq!(summary.excavate_count, 2);
        assert_eq!(summary.fill_count, 2);
        assert_eq!(summary.max_cut, 1.25);
        assert_eq!(summary.max_fill, 1.5);
        assert_eq!(summary.slope, -0.02);
    }

    #[test]
    fn empty_profile_has_zero_summary() {
        let summary = ProfileSummary::from_results(&[], 0.0);
        assert_eq!(summary, ProfileSummary::default());
    }
}
