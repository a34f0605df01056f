pub mod precision;

pub use precision::{PrecisionHelper, DISPLAY_DECIMALS};
