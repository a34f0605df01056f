pub mod sampling;

pub use sampling::{apply_surface_elevations, generate_sample_points};
