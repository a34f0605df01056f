use crate::prelude::{CalcResult, TrenchConfig};

/// Rise per meter of the trench base line.
///
/// An override given in percent wins over the slope implied by the two
/// reference heights. The distance is checked either way, since the base
/// line measured from B still spans it.
pub fn resolve_slope(config: &TrenchConfig) -> CalcResult<f64> {
    config.validate_distance()?;
    if let Some(percent) = config.slope_override_percent {
        return Ok(percent / 100.0);
    }
    Ok((config.height_b - config.height_a) / config.total_distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope_follows_reference_heights() {
        let slope = resolve_slope(&TrenchConfig::default()).unwrap();
        assert!((slope - (-0.6 / 21.0)).abs() < 1e-12);
        assert!((slope + 0.028571).abs() < 1e-6);
    }

    #[test]
    fn override_ignores_heights() {
        let cfg = TrenchConfig {
            height_a: 100.0,
            height_b: -40.0,
            slope_override_percent: Some(5.0),
            ..Default::default()
        };
        assert_eq!(resolve_slope(&cfg).unwrap(), 0.05);
    }

    #[test]
    fn zero_distance_with_override_is_invalid() {
        let cfg = TrenchConfig {
            total_distance: 0.0,
            slope_override_percent: Some(5.0),
            ..Default::default()
        };
        assert!(resolve_slope(&cfg).is_err());
    }

    #[test]
    fn zero_distance_without_override_is_invalid() {
        let cfg = TrenchConfig {
            total_distance: 0.0,
            ..Default::default()
        };
        assert!(resolve_slope(&cfg).is_err());
    }
}
