//! Haversine distance

use super::formula::DistanceFormula;
use crate::constants::{EARTH_RADIUS_KM, PI_360};
use crate::coordinate::GeoPoint;

/// Haversine formula (shortest distance over the Earth's surface)
///
/// ```text
/// a = sin²(Δφ/2) + cos φ1 ⋅ cos φ2 ⋅ sin²(Δλ/2)
/// c = 2 ⋅ atan2( √a, √(1−a) )
/// d = R ⋅ c
/// ```
///
/// This implementation works on half-angles directly: sums and differences
/// of degrees are scaled by PI/360, and the sines of the half-differences
/// are replaced by the half-differences themselves. Once `f` reaches 1 the
/// result saturates at half the circumference.
pub struct Haversine;

impl DistanceFormula for Haversine {
    fn compute(&self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        let mean_lat_cos = ((a.lat + b.lat) * PI_360).cos();
        let half_dlat = (b.lat - a.lat) * PI_360;
        let half_dlon = (b.lon - a.lon) * PI_360;

        // the small-angle form overshoots 1 for near-antipodal pairs
        let f = (half_dlat * half_dlat + mean_lat_cos * mean_lat_cos * half_dlon * half_dlon).min(1.0);
        let c = 2.0 * f.sqrt().atan2((1.0 - f).sqrt());
        EARTH_RADIUS_KM * c
    }

    fn name(&self) -> &'static str {
        "haversine"
    }

    fn description(&self) -> &'static str {
        "Haversine, well conditioned at short and long range"
    }
}
