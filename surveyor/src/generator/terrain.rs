use anyhow::{bail, Context};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use trenchcore::{ProfileCalculator, SamplePoint};

/// Configuration for generating a synthetic ground surface along the trench.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Mean height of the ground above the trench base.
    pub cover: f64,
    pub undulation: f64,
    pub wavelength: f64,
    pub noise: f64,
    pub seed: u64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            cover: 0.4,
            undulation: 0.6,
            wavelength: 12.0,
            noise: 0.05,
            seed: 0,
        }
    }
}

impl TerrainConfig {
    fn check(&self) -> anyhow::Result<()> {
        if !(self.wavelength.is_finite() && self.wavelength > 0.0) {
            bail!("terrain wavelength must be positive, got {}", self.wavelength);
        }
        if !(self.noise.is_finite() && self.noise >= 0.0) {
            bail!("terrain noise must be non-negative, got {}", self.noise);
        }
        Ok(())
    }
}

/// Builds one surface elevation per control point, following the trench base
/// line with a sinusoidal undulation and seeded jitter.
pub fn build_surface(
    config: &TerrainConfig,
    calculator: &ProfileCalculator,
    points: &[SamplePoint],
) -> anyhow::Result<Vec<f64>> {
    config.check().context("validating terrain generator")?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let surface = points
        .iter()
        .map(|point| {
            let phase = point.distance / config.wavelength * 2.0 * PI;
            let jitter = if config.noise > 0.0 {
                rng.gen_range(-config.noise..config.noise)
            } else {
                0.0
            };
            calculator.base_elevation(point.distance)
                + config.cover
                + config.undulation * phase.sin()
                + jitter
        })
        .collect();

    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trenchcore::{generate_sample_points, TrenchConfig};

    fn fixture() -> (ProfileCalculator, Vec<SamplePoint>) {
        let cfg = TrenchConfig::default();
        let calc = ProfileCalculator::new(&cfg).unwrap();
        let points = generate_sample_points(&cfg).unwrap();
        (calc, points)
    }

    #[test]
    fn surface_has_one_elevation_per_point() {
        let (calc, points) = fixture();
        let surface = build_surface(&TerrainConfig::default(), &calc, &points).unwrap();
        assert_eq!(surface.len(), points.len());
    }

    #[test]
    fn same_seed_reproduces_surface() {
        let (calc, points) = fixture();
        let config = TerrainConfig {
            seed: 42,
            noise: 0.2,
            ..Default::default()
        };
        let first = build_surface(&config, &calc, &points).unwrap();
        let second = build_surface(&config, &calc, &points).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn flat_terrain_sits_at_constant_cover() {
        let (calc, points) = fixture();
        let config = TerrainConfig {
            cover: 1.0,
            undulation: 0.0,
            noise: 0.0,
            ..Default::default()
        };
        let surface = build_surface(&config, &calc, &points).unwrap();
        for (point, elevation) in points.iter().zip(&surface) {
            let depth = elevation - calc.base_elevation(point.distance);
            assert!((depth - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_wavelength_is_rejected() {
        let (calc, points) = fixture();
        let config = TerrainConfig {
            wavelength: 0.0,
            ..Default::default()
        };
        assert!(build_surface(&config, &calc, &points).is_err());
    }
}
