//! Spherical law of cosines distance

use super::formula::DistanceFormula;
use crate::constants::{deg_to_rad, EARTH_RADIUS_KM};
use crate::coordinate::GeoPoint;

/// Spherical law of cosines
///
/// ```text
/// d = acos( sin φ1 ⋅ sin φ2 + cos φ1 ⋅ cos φ2 ⋅ cos Δλ ) ⋅ R
/// ```
///
/// Loses precision for very short and near-antipodal distances, where the
/// acos argument sits next to +/-1. The distance from a point to itself
/// is not always exactly zero: rounding leaves up to about 1e-4 km.
pub struct SphericalCosines;

impl DistanceFormula for SphericalCosines {
    fn compute(&self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        let phi1 = deg_to_rad(a.lat);
        let phi2 = deg_to_rad(b.lat);
        let delta_lambda = deg_to_rad(b.lon - a.lon);

        let cos_angle = phi1.sin() * phi2.sin() + phi1.cos() * phi2.cos() * delta_lambda.cos();
        // rounding can push the sum just past +/-1
        cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_KM
    }

    fn name(&self) -> &'static str {
        "spherical-cosines"
    }

    fn description(&self) -> &'static str {
        "Spherical law of cosines, imprecise near zero and antipodal distances"
    }
}
