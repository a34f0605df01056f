use crate::generator::terrain::build_surface;
use crate::workflow::config::JobConfig;
use anyhow::{bail, Context};
use log::warn;
use trenchcore::{
    apply_surface_elevations, generate_sample_points, ProfileCalculator, ProfileReport,
    ProfileResult, SamplePoint,
};

#[derive(Debug)]
pub struct WorkflowResult {
    pub points: Vec<SamplePoint>,
    pub results: Vec<ProfileResult>,
    pub report: ProfileReport,
}

#[derive(Clone)]
pub struct Runner {
    job: JobConfig,
}

impl Runner {
    pub fn new(job: JobConfig) -> Self {
        Self { job }
    }

    /// Lays out the control points without attaching any surface.
    pub fn plan(&self) -> anyhow::Result<Vec<SamplePoint>> {
        generate_sample_points(&self.job.trench).context("generating control points")
    }

    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let config = self.job.to_trench_config();
        let calculator = ProfileCalculator::new(&config).context("resolving trench base line")?;
        let mut points = self.plan()?;

        if !self.job.surface.is_empty() {
            if self.job.surface.len() != points.len() {
                bail!(
                    "expected {} surface elevations for the control points, got {}",
                    points.len(),
                    self.job.surface.len()
                );
            }
            apply_surface_elevations(&mut points, &self.job.surface);
        } else if let Some(terrain) = &self.job.terrain {
            let surface = build_surface(terrain, &calculator, &points)
                .context("generating synthetic surface")?;
            apply_surface_elevations(&mut points, &surface);
        } else {
            warn!(
                "no surface measurements given; {} control points keep a zero elevation",
                points.len()
            );
        }

        let results = calculator.compute(&points);
        let report = ProfileReport::new(
            self.job.name.clone(),
            &config,
            results.clone(),
            calculator.slope(),
        );

        Ok(WorkflowResult {
            points,
            results,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::terrain::TerrainConfig;
    use trenchcore::{Action, Direction, TrenchConfig};

    #[test]
    fn runner_executes_measured_job() {
        let job = JobConfig {
            surface: vec![3.0, 2.9, 2.0, 1.5, 1.9, 1.8, 1.0, 2.2],
            ..Default::default()
        };
        let result = Runner::new(job).execute().unwrap();
        assert_eq!(result.points.len(), 8);
        assert_eq!(result.results.len(), 8);
        assert_eq!(result.results[0].action, Action::Excavate);
        assert_eq!(result.report.rows.len(), 8);
        assert_eq!(
            result.report.summary.excavate_count + result.report.summary.fill_count,
            8
        );
    }

    #[test]
    fn runner_rejects_surface_count_mismatch() {
        let job = JobConfig {
            surface: vec![3.0, 2.9],
            ..Default::default()
        };
        let err = Runner::new(job).execute().unwrap_err();
        assert!(err.to_string().contains("expected 8 surface elevations"));
    }

    #[test]
    fn runner_uses_synthetic_terrain_when_unmeasured() {
        let job = JobConfig {
            terrain: Some(TerrainConfig {
                cover: 1.0,
                undulation: 0.0,
                noise: 0.0,
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = Runner::new(job).execute().unwrap();
        assert!(result.results.iter().all(|r| r.action == Action::Excavate));
    }

    #[test]
    fn runner_keeps_placeholders_without_surface() {
        let job = JobConfig {
            trench: TrenchConfig {
                direction: Direction::FromB,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = Runner::new(job).execute().unwrap();
        assert_eq!(result.points[0].distance, 21.0);
        assert!(result.results.iter().all(|r| r.action == Action::Fill));
    }

    #[test]
    fn runner_surfaces_invalid_configuration() {
        let job = JobConfig {
            trench: TrenchConfig {
                step: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = Runner::new(job).execute().unwrap_err();
        assert!(format!("{:#}", err).contains("invalid configuration"));
    }
}
