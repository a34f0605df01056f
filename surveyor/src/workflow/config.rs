use crate::generator::terrain::TerrainConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use trenchcore::{Direction, TrenchConfig};

/// One trench job: geometry, optional measured surface and optional
/// synthetic terrain used when no measurements are given.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    pub name: Option<String>,
    #[serde(flatten)]
    pub trench: TrenchConfig,
    /// Measured surface elevations in control-point order.
    pub surface: Vec<f64>,
    pub terrain: Option<TerrainConfig>,
}

/// Values given on the command line that replace those from a job file.
#[derive(Clone, Debug, Default)]
pub struct JobOverrides {
    pub total_distance: Option<f64>,
    pub height_a: Option<f64>,
    pub height_b: Option<f64>,
    pub step: Option<f64>,
    pub slope_override_percent: Option<f64>,
    pub direction: Option<Direction>,
    pub surface: Option<Vec<f64>>,
}

impl JobConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading job config {}", path_ref.display()))?;
        let config: JobConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing job config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, overrides: &JobOverrides) {
        let trench = &mut self.trench;
        if let Some(value) = overrides.total_distance {
            trench.total_distance = value;
        }
        if let Some(value) = overrides.height_a {
            trench.height_a = value;
        }
        if let Some(value) = overrides.height_b {
            trench.height_b = value;
        }
        if let Some(value) = overrides.step {
            trench.step = value;
        }
        if let Some(value) = overrides.slope_override_percent {
            trench.slope_override_percent = Some(value);
        }
        if let Some(direction) = overrides.direction {
            trench.direction = direction;
        }
        if let Some(surface) = &overrides.surface {
            self.surface = surface.clone();
        }
    }

    pub fn to_trench_config(&self) -> TrenchConfig {
        self.trench.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn overrides_replace_loaded_values() {
        let mut cfg = JobConfig::default();
        cfg.apply_overrides(&JobOverrides {
            total_distance: Some(30.0),
            slope_override_percent: Some(1.5),
            direction: Some(Direction::FromB),
            surface: Some(vec![1.0, 2.0]),
            ..Default::default()
        });
        let trench = cfg.to_trench_config();
        assert_eq!(trench.total_distance, 30.0);
        assert_eq!(trench.height_a, 2.30);
        assert_eq!(trench.slope_override_percent, Some(1.5));
        assert_eq!(trench.direction, Direction::FromB);
        assert_eq!(cfg.surface, vec![1.0, 2.0]);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"name: Jr. Lima tramo 3\ntotal_distance: 12\nheight_a: 3.1\nheight_b: 2.5\nstep: 4\ndirection: b\nsurface: [4.0, 3.8, 3.6, 3.2]\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = JobConfig::load(&path).unwrap();
        assert_eq!(cfg.name.as_deref(), Some("Jr. Lima tramo 3"));
        assert_eq!(cfg.trench.total_distance, 12.0);
        assert_eq!(cfg.trench.direction, Direction::FromB);
        assert_eq!(cfg.trench.slope_override_percent, None);
        assert_eq!(cfg.surface.len(), 4);
        assert!(cfg.terrain.is_none());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"slope_override_percent: 5\nterrain:\n  seed: 7\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = JobConfig::load(&path).unwrap();
        assert_eq!(cfg.trench.total_distance, 21.0);
        assert_eq!(cfg.trench.slope_override_percent, Some(5.0));
        assert_eq!(cfg.terrain.unwrap().seed, 7);
    }

    #[test]
    fn unreadable_job_reports_path() {
        let err = JobConfig::load("/nonexistent/job.yaml").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/job.yaml"));
    }
}
