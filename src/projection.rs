// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The `projection` module converts between geographic and planar
//! coordinates with a Mercator-style projection, closed-form in both
//! directions.
//!
//! The `x` ordinate is scaled by the Semimajor axis of the ellipsoid and
//! the `y` ordinate by the Semiminor axis; under the default spherical
//! EPSG:3857 datum the two scales are identical and the projection is the
//! standard Web Mercator.
//!
//! The projection is singular at the poles, so the forward direction is
//! domain-restricted to latitudes strictly within (-90°, 90°).

#![allow(clippy::suboptimal_flops)]

use crate::{Degrees, Ellipsoid, GeodesyError, LatLong, Metres};
use core::f64::consts::PI;

/// A position in planar coordinates: `x` east and `y` north of the origin,
/// in metres under the standard (spherical) datum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanarPoint {
    /// The x ordinate.
    x: Metres,
    /// The y ordinate.
    y: Metres,
}

impl PlanarPoint {
    /// Construct a `PlanarPoint`
    /// * `x`, `y` - the planar ordinates in metres.
    #[must_use]
    pub const fn new(x: Metres, y: Metres) -> Self {
        Self { x, y }
    }

    /// Accessor for the x ordinate.
    #[must_use]
    pub const fn x(&self) -> Metres {
        self.x
    }

    /// Accessor for the y ordinate.
    #[must_use]
    pub const fn y(&self) -> Metres {
        self.y
    }
}

/// Project a geographic position to planar coordinates.
/// * `pos` - the position in geodetic coordinates; its latitude must lie
///   strictly within (-90°, 90°).
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the planar coordinates of the position.
///
/// # Errors
///
/// `GeodesyError::ProjectionDomain` if the latitude is at or beyond a pole,
/// where the projection is singular.
///
/// # Examples
/// ```
/// use vincenty_geodesy::projection::to_planar;
/// use vincenty_geodesy::{Degrees, LatLong, SPHERICAL_ELLIPSOID};
///
/// let position = LatLong::new(Degrees(0.0), Degrees(180.0));
/// let point = to_planar(&position, &SPHERICAL_ELLIPSOID).expect("in domain");
///
/// // half the circumference of the EPSG:3857 sphere
/// assert!((point.x().0 - 20_037_508.342_789_244).abs() < 1.0e-6);
/// // tan(π/4) rounds, so the equatorial y is only zero to within rounding
/// assert!(point.y().0.abs() < 1.0e-6);
/// ```
pub fn to_planar(pos: &LatLong, ellipsoid: &Ellipsoid) -> Result<PlanarPoint, GeodesyError> {
    let lat = pos.lat().0;
    if !(libm::fabs(lat) < 90.0) {
        // the Mercator projection is singular at the poles
        return Err(GeodesyError::ProjectionDomain(lat));
    }

    let x = pos.lon().0 * (ellipsoid.a().0 * PI) / 180.0;
    let y = libm::log(libm::tan((90.0 + lat) * PI / 360.0)) / (PI / 180.0);
    let y = y * (ellipsoid.b().0 * PI) / 180.0;

    if x.is_finite() && y.is_finite() {
        Ok(PlanarPoint::new(Metres(x), Metres(y)))
    } else {
        Err(GeodesyError::ProjectionDomain(lat))
    }
}

/// Convert a planar position back to geographic coordinates: the inverse
/// of [`to_planar`]. Total for all finite inputs.
/// * `point` - the position in planar coordinates.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the position in geodetic coordinates.
#[must_use]
pub fn to_geographic(point: &PlanarPoint, ellipsoid: &Ellipsoid) -> LatLong {
    let lon = (point.x().0 / (ellipsoid.a().0 * PI)) * 180.0;
    let lat = (point.y().0 / (ellipsoid.b().0 * PI)) * 180.0;
    let lat = 180.0 / PI * (2.0 * libm::atan(libm::exp(lat * PI / 180.0)) - PI / 2.0);

    LatLong::new(Degrees(lat), Degrees(lon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Datum, SPHERICAL_ELLIPSOID};
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_planar_point_accessors() {
        let point = PlanarPoint::new(Metres(1_916_112.138), Metres(6_135_193.518));
        assert_eq!(1_916_112.138, point.x().0);
        assert_eq!(6_135_193.518, point.y().0);

        let point_copy = point;
        assert_eq!(point, point_copy);
        println!("PlanarPoint: {point:?}");
    }

    #[test]
    fn test_to_planar_web_mercator_values() {
        // y at 45°N is a · ln(1 + √2)
        let position = LatLong::new(Degrees(45.0), Degrees(0.0));
        let point = to_planar(&position, &SPHERICAL_ELLIPSOID).expect("in domain");
        assert_eq!(0.0, point.x().0);
        assert!(is_within_tolerance(5_621_521.486, point.y().0, 1.0e-3));

        // the equator maps onto the x axis, to within the rounding of tan(π/4)
        let position = LatLong::new(Degrees(0.0), Degrees(90.0));
        let point = to_planar(&position, &SPHERICAL_ELLIPSOID).expect("in domain");
        assert!(is_within_tolerance(10_018_754.171, point.x().0, 1.0e-3));
        assert!(is_within_tolerance(0.0, point.y().0, 1.0e-6));
    }

    #[test]
    fn test_projection_round_trip() {
        for lat in [-85.051, -60.0, -30.0, 0.0, 30.0, 60.0, 85.051] {
            for lon in [-180.0, -90.0, 0.0, 90.0, 180.0] {
                let position = LatLong::new(Degrees(lat), Degrees(lon));
                let point = to_planar(&position, &SPHERICAL_ELLIPSOID).expect("in domain");
                let result = to_geographic(&point, &SPHERICAL_ELLIPSOID);

                assert!(is_within_tolerance(lat, result.lat().0, 1.0e-9));
                assert!(is_within_tolerance(lon, result.lon().0, 1.0e-9));
            }
        }
    }

    #[test]
    fn test_to_planar_rejects_poles() {
        let north_pole = LatLong::new(Degrees(90.0), Degrees(0.0));
        assert_eq!(
            Err(GeodesyError::ProjectionDomain(90.0)),
            to_planar(&north_pole, &SPHERICAL_ELLIPSOID)
        );

        let south_pole = LatLong::new(Degrees(-90.0), Degrees(45.0));
        assert_eq!(
            Err(GeodesyError::ProjectionDomain(-90.0)),
            to_planar(&south_pole, &SPHERICAL_ELLIPSOID)
        );

        let beyond = LatLong::new(Degrees(91.5), Degrees(0.0));
        assert!(to_planar(&beyond, &SPHERICAL_ELLIPSOID).is_err());
    }

    #[test]
    fn test_to_planar_ellipsoidal_datum() {
        // under an ellipsoidal datum the y ordinate is scaled by the
        // Semiminor axis, so it is smaller than the spherical value
        let position = LatLong::new(Degrees(45.0), Degrees(45.0));
        let geoid = Datum::Wgs84.ellipsoid();

        let spherical = to_planar(&position, &SPHERICAL_ELLIPSOID).expect("in domain");
        let ellipsoidal = to_planar(&position, &geoid).expect("in domain");

        assert_eq!(spherical.x(), ellipsoidal.x());
        assert!(ellipsoidal.y().0 < spherical.y().0);

        let result = to_geographic(&ellipsoidal, &geoid);
        assert!(is_within_tolerance(45.0, result.lat().0, 1.0e-9));
        assert!(is_within_tolerance(45.0, result.lon().0, 1.0e-9));
    }
}
