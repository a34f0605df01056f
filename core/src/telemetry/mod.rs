//! Logging and request counters shared by the calculator and the driver.

pub mod log;
pub mod metrics;

pub use self::log::LogManager;
pub use self::metrics::{MetricsRecorder, ProfileCounters};
