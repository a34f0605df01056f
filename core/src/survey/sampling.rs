use crate::prelude::{CalcResult, Direction, SamplePoint, TrenchConfig};
use crate::telemetry::log::LogManager;

/// Offsets within this fraction of the total distance snap onto the far endpoint.
const ENDPOINT_TOLERANCE: f64 = 1e-9;

/// Lays out the control points between the two reference points.
///
/// Distances advance by `step` from the chosen reference point and the last
/// one is clamped onto the far endpoint, so both ends always appear even
/// when `step` does not divide `total_distance`. Every point starts with a
/// zero surface elevation that the caller replaces with a measurement.
pub fn generate_sample_points(config: &TrenchConfig) -> CalcResult<Vec<SamplePoint>> {
    config.validate()?;

    let total = config.total_distance;
    let mut offsets = vec![0.0];
    let mut index: u64 = 1;
    loop {
        let offset = index as f64 * config.step;
        if offset + ENDPOINT_TOLERANCE * total >= total {
            offsets.push(total);
            break;
        }
        offsets.push(offset);
        index += 1;
    }

    let points = offsets
        .into_iter()
        .map(|offset| match config.direction {
            Direction::FromA => offset,
            Direction::FromB => (total - offset).max(0.0),
        })
        .map(SamplePoint::unmeasured)
        .collect::<Vec<_>>();

    LogManager::new("sampling").record(&format!(
        "Generated {} control points over {:.3} m {}",
        points.len(),
        total,
        config.direction
    ));

    Ok(points)
}

/// Copies measured elevations onto the points in order and returns how many
/// were filled. Extra elevations are ignored; points without one keep theirs.
pub fn apply_surface_elevations(points: &mut [SamplePoint], elevations: &[f64]) -> usize {
    let mut filled = 0;
    for (point, &elevation) in points.iter_mut().zip(elevations) {
        *point = point.with_surface(elevation);
        filled += 1;
    }
    filled
}
