//! Geographic coordinate → globe-space conversion.
//!
//! Globe space is right-handed with +Y through the north pole. Longitude is
//! offset by 180° so that an equirectangular texture wrapped around the
//! sphere lines up with the projected points.

use bevy::prelude::*;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoord {
    /// Degrees north of the equator, nominally in [-90, 90].
    pub lat: f32,
    /// Degrees east of Greenwich, nominally in [-180, 180].
    pub lon: f32,
}

impl GeoCoord {
    pub const fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }

    /// Position of this coordinate on a sphere of `radius` centred at the origin.
    pub fn project(self, radius: f32) -> Vec3 {
        project(self.lat, self.lon, radius)
    }
}

/// Map `(lat, lon, radius)` to a point on the sphere of that radius.
///
/// Total: out-of-range or non-finite inputs still produce a value (NaN in,
/// NaN out), so callers never need to handle an error.
pub fn project(lat_deg: f32, lon_deg: f32, radius: f32) -> Vec3 {
    let phi = lat_deg.to_radians();
    let theta = (lon_deg - 180.0).to_radians();

    let x = -(radius * phi.cos() * theta.cos());
    let y = radius * phi.sin();
    let z = radius * phi.cos() * theta.sin();

    Vec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_close(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, EPS),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_project_antimeridian_on_equator() {
        assert_close(project(0.0, 180.0, 1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_project_greenwich_on_equator() {
        // theta = -pi, so x = -cos(-pi) = 1 and z = sin(-pi) = 0
        assert_close(project(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_project_north_pole_ignores_longitude() {
        for lon in [-180.0, -74.0, 0.0, 37.6, 151.2, 180.0] {
            assert_close(project(90.0, lon, 1.0), Vec3::Y);
        }
    }

    #[test]
    fn test_project_south_pole() {
        assert_close(project(-90.0, 12.5, 2.0), Vec3::new(0.0, -2.0, 0.0));
    }

    #[test]
    fn test_project_east_quarter_turn() {
        // lon = 90 → theta = -pi/2 → z = -1
        assert_close(project(0.0, 90.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_project_distance_equals_radius() {
        for radius in [0.5_f32, 1.0, 3.25, 100.0] {
            let mut lat = -90.0_f32;
            while lat <= 90.0 {
                let mut lon = -180.0_f32;
                while lon <= 180.0 {
                    let p = project(lat, lon, radius);
                    let err = (p.length() - radius).abs();
                    assert!(
                        err <= radius * 1e-5,
                        "|project({lat}, {lon}, {radius})| = {} (err {err})",
                        p.length()
                    );
                    lon += 15.0;
                }
                lat += 7.5;
            }
        }
    }

    #[test]
    fn test_project_out_of_range_is_still_on_sphere() {
        let p = project(135.0, 420.0, 1.0);
        assert!((p.length() - 1.0).abs() < EPS, "got {p:?}");
    }

    #[test]
    fn test_project_is_deterministic() {
        assert_eq!(project(48.8566, 2.3522, 1.0), project(48.8566, 2.3522, 1.0));
    }

    #[test]
    fn test_project_nan_propagates() {
        assert!(project(f32::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_geo_coord_project_matches_free_function() {
        let coord = GeoCoord::new(-33.8688, 151.2093);
        assert_eq!(coord.project(1.0), project(-33.8688, 151.2093, 1.0));
    }
}
