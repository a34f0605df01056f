/// Decimal places used when presenting elevations and depths.
pub const DISPLAY_DECIMALS: usize = 3;

pub struct PrecisionHelper;

impl PrecisionHelper {
    pub fn round(value: f64, decimals: usize) -> f64 {
        let factor = 10f64.powi(decimals as i32);
        let rounded = (value * factor).round() / factor;
        // avoid printing "-0.000"
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }

    pub fn display(value: f64) -> String {
        format!(
            "{:.*}",
            DISPLAY_DECIMALS,
            Self::round(value, DISPLAY_DECIMALS)
        )
    }
}
