use crate::math::vector::Vector2;
use crate::prelude::GeoPoint;

/// Empirical miles per degree of longitude at the equator.
pub const MILES_PER_DEGREE_LON: f64 = 69.17101972;
/// Empirical miles per degree of latitude.
pub const MILES_PER_DEGREE_LAT: f64 = 68.70747695;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Equirectangular approximation mapping points onto a miles-scaled plane.
///
/// The cosine is taken of the latitude value as stored (degrees), without a
/// radian conversion. The resulting scale is only meaningful for comparing
/// nearby samples and is kept exactly as is so thresholds stay calibrated.
pub struct GeoProjection;

impl GeoProjection {
    pub fn project(point: &GeoPoint) -> Vector2 {
        Vector2::new(
            point.longitude * point.latitude.cos() * MILES_PER_DEGREE_LON,
            point.latitude * MILES_PER_DEGREE_LAT,
        )
    }

    /// Elapsed time from `from` to `to` in fractional hours. Negative when the
    /// points are out of order.
    pub fn duration_hours(from: &GeoPoint, to: &GeoPoint) -> f64 {
        to.timestamp.saturating_sub(from.timestamp) as f64 / SECONDS_PER_HOUR
    }

    /// Planar velocity in projected miles per hour.
    ///
    /// Equal timestamps divide by zero and produce non-finite components.
    pub fn velocity(from: &GeoPoint, to: &GeoPoint) -> Vector2 {
        let duration = Self::duration_hours(from, to);
        Self::project(to)
            .sub(Self::project(from))
            .multiply(1.0 / duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_uses_degrees_directly_in_cosine() {
        let point = GeoPoint::new(1.0, 2.0, 0);
        let v = GeoProjection::project(&point);
        assert_eq!(v.x, 2.0 * 1.0_f64.cos() * MILES_PER_DEGREE_LON);
        assert_eq!(v.y, MILES_PER_DEGREE_LAT);
    }

    #[test]
    fn project_origin_is_zero() {
        let v = GeoProjection::project(&GeoPoint::new(0.0, 0.0, 42));
        assert_eq!(v, Vector2::new(0.0, 0.0));
    }

    #[test]
    fn duration_is_signed_hours() {
        let a = GeoPoint::new(0.0, 0.0, 0);
        let b = GeoPoint::new(0.0, 0.0, 5400);
        assert_eq!(GeoProjection::duration_hours(&a, &b), 1.5);
        assert_eq!(GeoProjection::duration_hours(&b, &a), -1.5);
    }

    #[test]
    fn velocity_scales_displacement_by_duration() {
        let a = GeoPoint::new(0.0, 0.0, 0);
        let b = GeoPoint::new(1.0, 0.0, 1800);
        let v = GeoProjection::velocity(&a, &b);
        assert_eq!(v.x, 0.0);
        assert!((v.y - 2.0 * MILES_PER_DEGREE_LAT).abs() < 1e-9);
    }

    #[test]
    fn velocity_with_equal_timestamps_is_not_finite() {
        let a = GeoPoint::new(0.0, 0.0, 10);
        let b = GeoPoint::new(1.0, 1.0, 10);
        let v = GeoProjection::velocity(&a, &b);
        assert!(!v.magnitude().is_finite());
    }
}
