pub mod calculator;
pub mod slope;
pub mod summary;

pub use calculator::{compute_profile, ProfileCalculator};
pub use slope::resolve_slope;
pub use summary::ProfileSummary;
