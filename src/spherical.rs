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

//! The `spherical` module calculates the intersection of two point-bearing
//! great-circle paths, treating the Earth as a perfect sphere.
//!
//! The solution follows Ed Williams' Aviation Formulary, see
//! [Intersecting radials](https://edwilliams.org/avform147.htm#Intersection):
//! the spherical triangle formed by the two start points and the candidate
//! intersection is solved with the spherical law of cosines.
//!
//! Degenerate configurations are reported as `None`, never as an error:
//! coincident start points, coincident great circles (infinite
//! intersections) and bearings that point away from each other (no
//! consistent intersection triangle).

#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::{Degrees, LatLong};
use core::f64::consts::PI;

/// Angular separations below this (in radians) are numerically zero.
pub const EPSILON: f64 = 0.000_000_05;

/// Calculate the intersection of two point-bearing great-circle paths.
/// * `pos1`, `bearing1` - the first start position and its bearing in degrees.
/// * `pos2`, `bearing2` - the second start position and its bearing in degrees.
///
/// returns the intersection position, with its longitude normalized into
/// `(-180, 180]`, or `None` for the degenerate cases: coincident start
/// points, coincident great circles or diverging bearings.
///
/// # Examples
/// ```
/// use vincenty_geodesy::spherical::calculate_intersection_point;
/// use vincenty_geodesy::{Degrees, LatLong};
///
/// // Ed Williams' STN/CDG example
/// let stansted = LatLong::new(Degrees(51.8853), Degrees(0.2545));
/// let cdg = LatLong::new(Degrees(49.0034), Degrees(2.5735));
///
/// let point = calculate_intersection_point(&stansted, Degrees(108.547), &cdg, Degrees(32.435))
///     .expect("paths cross");
/// assert!((point.lat().0 - 50.9078).abs() < 1.0e-3);
/// assert!((point.lon().0 - 4.5084).abs() < 1.0e-3);
/// ```
#[must_use]
pub fn calculate_intersection_point(
    pos1: &LatLong,
    bearing1: Degrees,
    pos2: &LatLong,
    bearing2: Degrees,
) -> Option<LatLong> {
    let phi1 = pos1.lat().0.to_radians();
    let lambda1 = pos1.lon().0.to_radians();
    let phi2 = pos2.lat().0.to_radians();
    let lambda2 = pos2.lon().0.to_radians();
    let theta13 = bearing1.0.to_radians();
    let theta23 = bearing2.0.to_radians();
    let delta_phi = phi2 - phi1;
    let delta_lambda = lambda2 - lambda1;

    // angular distance between the start points, haversine formula
    let delta12 = 2.0
        * libm::asin(libm::sqrt(
            libm::sin(delta_phi / 2.0) * libm::sin(delta_phi / 2.0)
                + libm::cos(phi1)
                    * libm::cos(phi2)
                    * libm::sin(delta_lambda / 2.0)
                    * libm::sin(delta_lambda / 2.0),
        ));
    if libm::fabs(delta12) < EPSILON {
        // the start points coincide
        return None;
    }

    // initial and final bearings between the start points
    let mut theta_a = libm::acos(
        (libm::sin(phi2) - libm::sin(phi1) * libm::cos(delta12))
            / (libm::sin(delta12) * libm::cos(phi1)),
    );
    if theta_a.is_nan() {
        // antipodal rounding pushed the cosine argument outside ±1
        theta_a = 0.0;
    }
    let theta_b = libm::acos(
        (libm::sin(phi1) - libm::sin(phi2) * libm::cos(delta12))
            / (libm::sin(delta12) * libm::cos(phi2)),
    );

    // resolve the bearings into the correct hemisphere
    let (theta12, theta21) = if libm::sin(lambda2 - lambda1) > 0.0 {
        (theta_a, 2.0 * PI - theta_b)
    } else {
        (2.0 * PI - theta_a, theta_b)
    };

    // the turn angles at each start point, reduced into -π..+π
    let alpha1 = (theta13 - theta12 + PI) % (2.0 * PI) - PI; // angle 2-1-3
    let alpha2 = (theta21 - theta23 + PI) % (2.0 * PI) - PI; // angle 1-2-3

    if libm::fabs(libm::sin(alpha1)) < EPSILON && libm::fabs(libm::sin(alpha2)) < EPSILON {
        // the great circles coincide: infinite intersections
        return None;
    }
    if libm::sin(alpha1) * libm::sin(alpha2) < 0.0 {
        // the bearings point away from each other: ambiguous intersection
        return None;
    }

    // solve the spherical triangle for the third angle and the side to the
    // intersection
    let alpha3 = libm::acos(
        -libm::cos(alpha1) * libm::cos(alpha2)
            + libm::sin(alpha1) * libm::sin(alpha2) * libm::cos(delta12),
    );
    let delta13 = libm::atan2(
        libm::sin(delta12) * libm::sin(alpha1) * libm::sin(alpha2),
        libm::cos(alpha2) + libm::cos(alpha1) * libm::cos(alpha3),
    );
    let phi3 = libm::asin(
        libm::sin(phi1) * libm::cos(delta13)
            + libm::cos(phi1) * libm::sin(delta13) * libm::cos(theta13),
    );
    let delta_lambda13 = libm::atan2(
        libm::sin(theta13) * libm::sin(delta13) * libm::cos(phi1),
        libm::cos(delta13) - libm::sin(phi1) * libm::sin(phi3),
    );
    let lambda3 = lambda1 + delta_lambda13;

    Some(LatLong::new(
        Degrees(phi3.to_degrees()),
        // normalize the longitude to -180..+180
        Degrees((lambda3.to_degrees() + 540.0) % 360.0 - 180.0),
    ))
}
