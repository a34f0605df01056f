use crate::prelude::{Action, CalcResult, Direction, ProfileResult, SamplePoint, TrenchConfig};
use crate::profile::slope::resolve_slope;
use crate::profile::summary::ProfileSummary;
use crate::telemetry::log::LogManager;

/// Evaluates the trench base line for one configuration.
///
/// Holds only values derived from the configuration, so a calculator can be
/// reused across any number of point lists.
#[derive(Debug, Clone)]
pub struct ProfileCalculator {
    config: TrenchConfig,
    slope: f64,
}

impl ProfileCalculator {
    pub fn new(config: &TrenchConfig) -> CalcResult<Self> {
        let slope = resolve_slope(config)?;
        Ok(Self {
            config: config.clone(),
            slope,
        })
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn config(&self) -> &TrenchConfig {
        &self.config
    }

    /// Elevation of the trench floor at `distance` from the chosen reference point.
    pub fn base_elevation(&self, distance: f64) -> f64 {
        match self.config.direction {
            Direction::FromA => self.config.height_a + distance * self.slope,
            Direction::FromB => {
                self.config.height_b + (self.config.total_distance - distance) * self.slope
            }
        }
    }

    pub fn evaluate(&self, point: &SamplePoint) -> ProfileResult {
        let trench_base_elevation = self.base_elevation(point.distance);
        let depth = point.surface_elevation - trench_base_elevation;
        ProfileResult {
            distance: point.distance,
            surface_elevation: point.surface_elevation,
            trench_base_elevation,
            depth,
            action: Action::for_depth(depth),
        }
    }

    pub fn compute(&self, points: &[SamplePoint]) -> Vec<ProfileResult> {
        let results = points.iter().map(|p| self.evaluate(p)).collect::<Vec<_>>();
        let summary = ProfileSummary::from_results(&results, self.slope);
        LogManager::new("profile").record(&format!(
            "Profile computed: {} points, {} excavate, {} fill, slope {:.6}",
            results.len(),
            summary.excavate_count,
            summary.fill_count,
            self.slope
        ));
        results
    }
}

/// Maps each sample point to its trench base, depth and required action,
/// preserving input order.
pub fn compute_profile(
    config: &TrenchConfig,
    points: &[SamplePoint],
) -> CalcResult<Vec<ProfileResult>> {
    Ok(ProfileCalculator::new(config)?.compute(points))
}
