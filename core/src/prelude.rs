use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which reference point (buzón) the sampling distances are measured from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    #[serde(rename = "a", alias = "A", alias = "from-a")]
    FromA,
    #[serde(rename = "b", alias = "B", alias = "from-b")]
    FromB,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::FromA => "A",
            Direction::FromB => "B",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from {}", self.label())
    }
}

impl FromStr for Direction {
    type Err = ProfileError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "a" | "from-a" | "froma" => Ok(Direction::FromA),
            "b" | "from-b" | "fromb" => Ok(Direction::FromB),
            other => Err(ProfileError::InvalidConfiguration(format!(
                "unknown direction '{}', expected 'a' or 'b'",
                other
            ))),
        }
    }
}

/// Upper bound on control points generated for one trench.
pub const MAX_SAMPLE_POINTS: usize = 100_000;

/// Trench geometry shared by sampling and profile computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrenchConfig {
    /// Meters between the two reference points.
    pub total_distance: f64,
    /// Elevation of reference point A.
    pub height_a: f64,
    /// Elevation of reference point B.
    pub height_b: f64,
    /// Spacing between generated sample points.
    pub step: f64,
    /// Slope in percent; replaces the slope implied by the two heights.
    pub slope_override_percent: Option<f64>,
    pub direction: Direction,
}

impl Default for TrenchConfig {
    fn default() -> Self {
        Self {
            total_distance: 21.0,
            height_a: 2.30,
            height_b: 1.70,
            step: 3.0,
            slope_override_percent: None,
            direction: Direction::FromA,
        }
    }
}

impl TrenchConfig {
    pub fn validate_distance(&self) -> CalcResult<()> {
        if !self.total_distance.is_finite() || self.total_distance <= 0.0 {
            return Err(ProfileError::InvalidConfiguration(format!(
                "total distance must be positive, got {}",
                self.total_distance
            )));
        }
        Ok(())
    }

    pub fn validate(&self) -> CalcResult<()> {
        self.validate_distance()?;
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ProfileError::InvalidConfiguration(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        let point_count = (self.total_distance / self.step).ceil() + 1.0;
        if point_count > MAX_SAMPLE_POINTS as f64 {
            return Err(ProfileError::InvalidConfiguration(format!(
                "step {} over {} m needs {} control points, at most {} allowed",
                self.step, self.total_distance, point_count, MAX_SAMPLE_POINTS
            )));
        }
        Ok(())
    }
}

/// One surveyed location along the trench.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SamplePoint {
    pub distance: f64,
    pub surface_elevation: f64,
}

impl SamplePoint {
    /// Placeholder point whose surface has not been measured yet.
    pub fn unmeasured(distance: f64) -> Self {
        Self {
            distance,
            surface_elevation: 0.0,
        }
    }

    pub fn with_surface(self, surface_elevation: f64) -> Self {
        Self {
            surface_elevation,
            ..self
        }
    }
}

/// Earthwork needed at a sample point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Excavate,
    Fill,
}

impl Action {
    /// Positive depth means ground sits above the trench base.
    pub fn for_depth(depth: f64) -> Self {
        if depth > 0.0 {
            Action::Excavate
        } else {
            Action::Fill
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Excavate => f.write_str("Excavate"),
            Action::Fill => f.write_str("Fill"),
        }
    }
}

/// Computed profile value for a single sample point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProfileResult {
    pub distance: f64,
    pub surface_elevation: f64,
    pub trench_base_elevation: f64,
    pub depth: f64,
    pub action: Action,
}

/// Common error type for the profile calculator.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type CalcResult<T> = Result<T, ProfileError>;
