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

//! vincenty-geodesy
//!
//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//!
//! A library for solving the direct and inverse
//! [geodesic](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid)
//! problems on reference ellipsoids using
//! [Vincenty's formulae](https://en.wikipedia.org/wiki/Vincenty%27s_formulae).
//!
//! The inverse problem takes a pair of positions and calculates the distance
//! between them and the bearings of the connecting geodesic at each end.
//! The direct problem takes a start position, an initial bearing and a
//! distance and calculates the destination position and the bearing there.
//! Both problems are solved on any of the reference ellipsoids (datums)
//! defined in the [ellipsoid](crate::ellipsoid) module; WGS 84 is the
//! default.
//!
//! The library also provides:
//!
//! - the intersection of two point-bearing great-circle paths on a
//!   spherical Earth, in the [spherical](crate::spherical) module;
//! - a closed-form Mercator-style planar projection and its inverse, in the
//!   [projection](crate::projection) module.
//!
//! ## Design
//!
//! The `Ellipsoid` struct holds the parameters of an ellipsoid of
//! revolution. The static `WGS84_ELLIPSOID` is the WGS 84 `Ellipsoid` used
//! by the convenience functions; the static `SPHERICAL_ELLIPSOID` is the
//! EPSG:3857 sphere used by the Web Mercator projection.
//!
//! Vincenty's inverse formula fails to converge for nearly antipodal
//! positions. The condition is reported as an explicit
//! [`GeodesyError::NotConverged`](crate::error::GeodesyError) error instead
//! of a silently wrong result. Coincident positions are not an error: the
//! inverse solution reports them with a distinct
//! [`InverseSolution::Coincident`](crate::geodesic::InverseSolution)
//! variant, since the bearing between coincident positions is undefined.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees` and
//!   `Radians` and provide trigonometric test tolerances;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define
//!   `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`;
//! - [libm](https://crates.io/crates/libm) - for the transcendental
//!   functions of the formulae;
//! - [thiserror](https://crates.io/crates/thiserror) - to define the error
//!   type.

pub mod ellipsoid;
pub mod error;
pub mod geodesic;
pub mod projection;
pub mod spherical;

pub use angle_sc::{Degrees, Radians, Validate};
pub use ellipsoid::Datum;
pub use error::GeodesyError;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

use once_cell::sync::Lazy;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,
    /// One minus the flattening ratio.
    one_minus_f: f64,
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `b` - the Semiminor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    ///
    /// The Semiminor axis is a defining constant of each datum, so it is
    /// passed in rather than derived from the flattening.
    #[must_use]
    pub const fn new(a: Metres, b: Metres, f: f64) -> Self {
        Self {
            a,
            b,
            f,
            one_minus_f: 1.0 - f,
        }
    }

    /// Construct an `Ellipsoid` from the parameters of a named `Datum`.
    #[must_use]
    pub const fn from_datum(datum: Datum) -> Self {
        datum.ellipsoid()
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub const fn one_minus_f(&self) -> f64 {
        self.one_minus_f
    }
}

/// A static instance of the WGS 84 `Ellipsoid`, the default datum.
pub static WGS84_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(|| Datum::Wgs84.ellipsoid());

/// A static instance of the EPSG:3857 spherical `Ellipsoid`, the datum of
/// the Web Mercator projection.
pub static SPHERICAL_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(|| Datum::Epsg3857.ellipsoid());

/// Calculate the geodesic distance (in metres) between a pair of positions
/// on the WGS 84 ellipsoid.
/// * `a`, `b` - the start and finish positions in geodetic coordinates.
///
/// returns the distance rounded to the nearest millimetre; zero for
/// coincident positions.
///
/// # Errors
///
/// `GeodesyError::NotConverged` if the positions are nearly antipodal.
///
/// # Examples
/// ```
/// use vincenty_geodesy::{calculate_distance, Degrees, LatLong};
///
/// let flinders_peak = LatLong::new(Degrees(-37.951_033_42), Degrees(144.424_867_89));
/// let buninyong = LatLong::new(Degrees(-37.652_821_14), Degrees(143.926_495_53));
///
/// let distance = calculate_distance(&flinders_peak, &buninyong).expect("converges");
/// assert_eq!(54_972.271, distance.0);
/// ```
pub fn calculate_distance(a: &LatLong, b: &LatLong) -> Result<Metres, GeodesyError> {
    let solution = geodesic::calculate_inverse(a, b, &WGS84_ELLIPSOID)?;
    Ok(solution.distance())
}

/// Calculate the initial bearing (in degrees) of the geodesic between a
/// pair of positions on the WGS 84 ellipsoid.
/// * `a`, `b` - the start and finish positions in geodetic coordinates.
///
/// returns the bearing at `a` in `[0, 360)` degrees; zero for coincident
/// positions.
///
/// # Errors
///
/// `GeodesyError::NotConverged` if the positions are nearly antipodal.
pub fn calculate_initial_bearing(a: &LatLong, b: &LatLong) -> Result<Degrees, GeodesyError> {
    let solution = geodesic::calculate_inverse(a, b, &WGS84_ELLIPSOID)?;
    Ok(solution.initial_bearing())
}

/// Calculate the final bearing (in degrees) of the geodesic between a pair
/// of positions on the WGS 84 ellipsoid.
/// * `a`, `b` - the start and finish positions in geodetic coordinates.
///
/// returns the bearing at `b` in `[0, 360)` degrees; zero for coincident
/// positions.
///
/// # Errors
///
/// `GeodesyError::NotConverged` if the positions are nearly antipodal.
pub fn calculate_final_bearing(a: &LatLong, b: &LatLong) -> Result<Degrees, GeodesyError> {
    let solution = geodesic::calculate_inverse(a, b, &WGS84_ELLIPSOID)?;
    Ok(solution.final_bearing())
}

/// Calculate the destination position given a start position, an initial
/// bearing and a distance on the WGS 84 ellipsoid.
/// * `a` - the start position in geodetic coordinates.
/// * `distance` - the distance along the geodesic in metres.
/// * `bearing` - the initial bearing in degrees.
///
/// returns the destination position, with its longitude normalized into
/// `(-180, 180]`, and the bearing there.
///
/// # Errors
///
/// `GeodesyError::NotConverged` if the distance iteration exceeds its cap,
/// which cannot occur for finite inputs.
///
/// # Examples
/// ```
/// use vincenty_geodesy::{calculate_destination, Degrees, LatLong, Metres};
///
/// let flinders_peak = LatLong::new(Degrees(-37.951_033_42), Degrees(144.424_867_89));
///
/// let solution = calculate_destination(&flinders_peak, Metres(54_972.271), Degrees(306.868_158))
///     .expect("converges");
/// assert!((solution.destination.lat().0 - -37.652_821_14).abs() < 1.0e-6);
/// assert!((solution.destination.lon().0 - 143.926_495_53).abs() < 1.0e-6);
/// ```
pub fn calculate_destination(
    a: &LatLong,
    distance: Metres,
    bearing: Degrees,
) -> Result<geodesic::DirectSolution, GeodesyError> {
    geodesic::calculate_direct(a, distance, bearing, &WGS84_ELLIPSOID)
}
