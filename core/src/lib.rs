//! Excavation profile core for surveying a trench between two reference
//! points (buzones).
//!
//! Control points are laid out along the trench, surface elevations are
//! measured at each one, and the calculator compares them against the
//! planned trench base line to decide where to excavate and where to fill.

pub mod math;
pub mod prelude;
pub mod profile;
pub mod report;
pub mod survey;
pub mod telemetry;

pub use prelude::{
    Action, CalcResult, Direction, ProfileError, ProfileResult, SamplePoint, TrenchConfig,
    MAX_SAMPLE_POINTS,
};
pub use profile::{compute_profile, resolve_slope, ProfileCalculator, ProfileSummary};
pub use report::ProfileReport;
pub use survey::{apply_surface_elevations, generate_sample_points};
