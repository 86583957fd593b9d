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

//! The `geodesic` module solves the direct and inverse geodesic problems on
//! an ellipsoid using Vincenty's formulae, see
//! [Vincenty(1975)](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf).
//!
//! The inverse problem calculates the distance and the initial and final
//! bearings between a pair of positions; the direct problem calculates the
//! destination position and final bearing given a start position, distance
//! and initial bearing.
//!
//! Both problems are solved by a fixed-point iteration on an auxiliary
//! sphere. The iteration is bounded: it either converges to within
//! [`CONVERGENCE_THRESHOLD`] or fails after [`MAX_ITERATIONS`] with
//! [`GeodesyError::NotConverged`], the formula's known failure mode for
//! nearly antipodal points.
//!
//! Distances are rounded to the nearest millimetre and verified against
//! Vincenty's published solution of the Flinders Peak test line.

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::{Degrees, Ellipsoid, GeodesyError, LatLong, Metres};
use core::f64::consts::PI;

/// The maximum number of iterations of the Vincenty fixed-point loops.
pub const MAX_ITERATIONS: u32 = 200;

/// The convergence threshold on the per-iteration change of λ (inverse
/// problem) or σ (direct problem), in radians.
pub const CONVERGENCE_THRESHOLD: f64 = 1e-12;

/// Positions closer than this in `sin σ` are numerically coincident.
pub const COINCIDENT_SIN_SIGMA: f64 = 5e-8;

/// The solution of the inverse geodesic problem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InverseSolution {
    /// A geodesic of non-zero length between distinct positions.
    Geodesic {
        /// The length of the geodesic in metres, at millimetre precision.
        distance: Metres,
        /// The bearing at the start position, in `[0, 360)` degrees.
        initial_bearing: Degrees,
        /// The bearing at the finish position, in `[0, 360)` degrees.
        final_bearing: Degrees,
    },
    /// The positions are numerically coincident: a degenerate success,
    /// not an error.
    Coincident,
}

impl InverseSolution {
    /// The length of the geodesic: zero for `Coincident`.
    #[must_use]
    pub const fn distance(&self) -> Metres {
        match self {
            Self::Geodesic { distance, .. } => *distance,
            Self::Coincident => Metres(0.0),
        }
    }

    /// The bearing at the start position: zero for `Coincident`.
    #[must_use]
    pub const fn initial_bearing(&self) -> Degrees {
        match self {
            Self::Geodesic {
                initial_bearing, ..
            } => *initial_bearing,
            Self::Coincident => Degrees(0.0),
        }
    }

    /// The bearing at the finish position: zero for `Coincident`.
    #[must_use]
    pub const fn final_bearing(&self) -> Degrees {
        match self {
            Self::Geodesic { final_bearing, .. } => *final_bearing,
            Self::Coincident => Degrees(0.0),
        }
    }
}

/// The solution of the direct geodesic problem.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectSolution {
    /// The destination position.
    pub destination: LatLong,
    /// The bearing at the destination, in `[0, 360)` degrees.
    pub final_bearing: Degrees,
}

/// Solve the inverse geodesic problem: the distance and bearings between a
/// pair of positions on the ellipsoid.
/// * `a`, `b` - the start and finish positions in geodetic coordinates.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the distance (rounded to millimetre precision) and the bearings
/// at both positions, or `InverseSolution::Coincident` when the positions
/// are numerically identical.
///
/// # Errors
///
/// `GeodesyError::NotConverged` if the λ iteration does not converge within
/// [`MAX_ITERATIONS`], which can occur for nearly antipodal positions.
///
/// # Examples
/// ```
/// use vincenty_geodesy::geodesic::calculate_inverse;
/// use vincenty_geodesy::{Degrees, LatLong, WGS84_ELLIPSOID};
///
/// // Vincenty's Flinders Peak to Buninyong test line
/// let flinders = LatLong::new(Degrees(-37.951033), Degrees(144.424868));
/// let buninyong = LatLong::new(Degrees(-37.652821), Degrees(143.926495));
///
/// let solution = calculate_inverse(&flinders, &buninyong, &WGS84_ELLIPSOID)
///     .expect("converges");
/// assert!((solution.distance().0 - 54_972.271).abs() < 1.0);
/// ```
#[allow(clippy::too_many_lines)]
pub fn calculate_inverse(
    a: &LatLong,
    b: &LatLong,
    ellipsoid: &Ellipsoid,
) -> Result<InverseSolution, GeodesyError> {
    let phi1 = a.lat().0.to_radians();
    let lambda1 = a.lon().0.to_radians();
    let phi2 = b.lat().0.to_radians();
    let lambda2 = b.lon().0.to_radians();

    let major = ellipsoid.a().0;
    let minor = ellipsoid.b().0;
    let f = ellipsoid.f();

    let l = lambda2 - lambda1;
    let tan_u1 = ellipsoid.one_minus_f() * libm::tan(phi1);
    let cos_u1 = 1.0 / libm::sqrt(1.0 + tan_u1 * tan_u1);
    let sin_u1 = tan_u1 * cos_u1;
    let tan_u2 = ellipsoid.one_minus_f() * libm::tan(phi2);
    let cos_u2 = 1.0 / libm::sqrt(1.0 + tan_u2 * tan_u2);
    let sin_u2 = tan_u2 * cos_u2;

    let mut lambda = l;
    let sin_lambda;
    let cos_lambda;
    let sin_sigma;
    let cos_sigma;
    let sigma;
    let cos_sq_alpha;
    let cos_2sigma_m;

    let mut iterations = 0;
    loop {
        let sin_lambda_i = libm::sin(lambda);
        let cos_lambda_i = libm::cos(lambda);
        let sin_sq_sigma = (cos_u2 * sin_lambda_i) * (cos_u2 * sin_lambda_i)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda_i)
                * (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda_i);
        let sin_sigma_i = libm::sqrt(sin_sq_sigma);
        if libm::fabs(sin_sigma_i) < COINCIDENT_SIN_SIGMA {
            return Ok(InverseSolution::Coincident);
        }
        let cos_sigma_i = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda_i;
        let sigma_i = libm::atan2(sin_sigma_i, cos_sigma_i);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda_i / sin_sigma_i;
        let cos_sq_alpha_i = 1.0 - sin_alpha * sin_alpha;
        let mut cos_2sigma_m_i = cos_sigma_i - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha_i;
        if cos_2sigma_m_i.is_nan() {
            // equatorial line: cos²α = 0 leaves the midline term undefined
            cos_2sigma_m_i = 0.0;
        }
        let c = f / 16.0 * cos_sq_alpha_i * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha_i));
        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma_i
                    + c * sin_sigma_i
                        * (cos_2sigma_m_i
                            + c * cos_sigma_i * (-1.0 + 2.0 * cos_2sigma_m_i * cos_2sigma_m_i)));

        iterations += 1;
        if libm::fabs(lambda - lambda_prev) <= CONVERGENCE_THRESHOLD {
            sin_lambda = sin_lambda_i;
            cos_lambda = cos_lambda_i;
            sin_sigma = sin_sigma_i;
            cos_sigma = cos_sigma_i;
            sigma = sigma_i;
            cos_sq_alpha = cos_sq_alpha_i;
            cos_2sigma_m = cos_2sigma_m_i;
            break;
        }
        if MAX_ITERATIONS <= iterations {
            return Err(GeodesyError::NotConverged(MAX_ITERATIONS));
        }
    }

    let u_sq = cos_sq_alpha * (major * major - minor * minor) / (minor * minor);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

    let s = minor * big_a * (sigma - delta_sigma);

    let alpha1 = libm::atan2(cos_u2 * sin_lambda, cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);
    let alpha2 = libm::atan2(cos_u1 * sin_lambda, -sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda);

    // normalize the bearings to 0..360
    let alpha1 = (alpha1 + 2.0 * PI) % (2.0 * PI);
    let alpha2 = (alpha2 + 2.0 * PI) % (2.0 * PI);

    // round to millimetre precision
    let s = libm::round(s * 1000.0) / 1000.0;

    Ok(InverseSolution::Geodesic {
        distance: Metres(s),
        initial_bearing: Degrees(alpha1.to_degrees()),
        final_bearing: Degrees(alpha2.to_degrees()),
    })
}

/// Solve the direct geodesic problem: the destination position and final
/// bearing after travelling a distance along a bearing from an origin.
/// * `origin` - the start position in geodetic coordinates.
/// * `distance` - the distance to travel, in metres; non-negative.
/// * `bearing` - the initial bearing in degrees, 0 = north, clockwise.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the destination position, with its longitude normalized into
/// `(-180, 180]`, and the bearing at the destination in `[0, 360)`.
///
/// # Errors
///
/// `GeodesyError::NotConverged` if the σ iteration does not converge within
/// [`MAX_ITERATIONS`].
///
/// # Examples
/// ```
/// use vincenty_geodesy::geodesic::calculate_direct;
/// use vincenty_geodesy::{Degrees, LatLong, Metres, WGS84_ELLIPSOID};
///
/// let origin = LatLong::new(Degrees(47.483_580), Degrees(19.015_257));
/// let solution = calculate_direct(&origin, Metres(1000.0), Degrees(0.0), &WGS84_ELLIPSOID)
///     .expect("converges");
///
/// assert!(solution.destination.lat().0 > origin.lat().0);
/// assert!((solution.destination.lon().0 - origin.lon().0).abs() < 1.0e-6);
/// ```
pub fn calculate_direct(
    origin: &LatLong,
    distance: Metres,
    bearing: Degrees,
    ellipsoid: &Ellipsoid,
) -> Result<DirectSolution, GeodesyError> {
    let phi1 = origin.lat().0.to_radians();
    let lambda1 = origin.lon().0.to_radians();
    let alpha1 = bearing.0.to_radians();
    let s = distance.0;

    let major = ellipsoid.a().0;
    let minor = ellipsoid.b().0;
    let f = ellipsoid.f();

    let sin_alpha1 = libm::sin(alpha1);
    let cos_alpha1 = libm::cos(alpha1);

    let tan_u1 = ellipsoid.one_minus_f() * libm::tan(phi1);
    let cos_u1 = 1.0 / libm::sqrt(1.0 + tan_u1 * tan_u1);
    let sin_u1 = tan_u1 * cos_u1;
    let sigma1 = libm::atan2(tan_u1, cos_alpha1);
    let sin_alpha = cos_u1 * sin_alpha1;
    let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
    let u_sq = cos_sq_alpha * (major * major - minor * minor) / (minor * minor);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

    let mut sigma = s / (minor * big_a);
    let cos_2sigma_m;
    let sin_sigma;
    let cos_sigma;

    let mut iterations = 0;
    loop {
        let cos_2sigma_m_i = libm::cos(2.0 * sigma1 + sigma);
        let sin_sigma_i = libm::sin(sigma);
        let cos_sigma_i = libm::cos(sigma);
        let delta_sigma = big_b
            * sin_sigma_i
            * (cos_2sigma_m_i
                + big_b / 4.0
                    * (cos_sigma_i * (-1.0 + 2.0 * cos_2sigma_m_i * cos_2sigma_m_i)
                        - big_b / 6.0
                            * cos_2sigma_m_i
                            * (-3.0 + 4.0 * sin_sigma_i * sin_sigma_i)
                            * (-3.0 + 4.0 * cos_2sigma_m_i * cos_2sigma_m_i)));
        let sigma_prev = sigma;
        sigma = s / (minor * big_a) + delta_sigma;

        iterations += 1;
        if libm::fabs(sigma - sigma_prev) <= CONVERGENCE_THRESHOLD {
            cos_2sigma_m = cos_2sigma_m_i;
            sin_sigma = sin_sigma_i;
            cos_sigma = cos_sigma_i;
            break;
        }
        if MAX_ITERATIONS <= iterations {
            return Err(GeodesyError::NotConverged(MAX_ITERATIONS));
        }
    }

    let x = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
    let phi2 = libm::atan2(
        sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1,
        ellipsoid.one_minus_f() * libm::sqrt(sin_alpha * sin_alpha + x * x),
    );
    let lambda = libm::atan2(
        sin_sigma * sin_alpha1,
        cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1,
    );
    // unwind the auxiliary-sphere longitude into the true longitude difference
    let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
    let l = lambda
        - (1.0 - c)
            * f
            * sin_alpha
            * (sigma
                + c * sin_sigma
                    * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));
    // normalize the longitude to -180..+180
    let lambda2 = (lambda1 + l + 3.0 * PI) % (2.0 * PI) - PI;

    let alpha2 = libm::atan2(sin_alpha, -x);
    // normalize the bearing to 0..360
    let alpha2 = (alpha2 + 2.0 * PI) % (2.0 * PI);

    Ok(DirectSolution {
        destination: LatLong::new(Degrees(phi2.to_degrees()), Degrees(lambda2.to_degrees())),
        final_bearing: Degrees(alpha2.to_degrees()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WGS84_ELLIPSOID;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_inverse_flinders_peak_to_buninyong() {
        // Vincenty's test line from his 1975 paper:
        // d 54 972.271 m, α1 306°52′05.37″, α2 127°10′25.07″
        let flinders = LatLong::new(Degrees(-37.951_033_42), Degrees(144.424_867_89));
        let buninyong = LatLong::new(Degrees(-37.652_821_14), Degrees(143.926_495_53));

        let solution =
            calculate_inverse(&flinders, &buninyong, &WGS84_ELLIPSOID).expect("converges");
        assert!(is_within_tolerance(
            54_972.271,
            solution.distance().0,
            1.0e-3
        ));
        assert!(is_within_tolerance(
            306.868_158,
            solution.initial_bearing().0,
            1.0e-3
        ));
        assert!(is_within_tolerance(
            307.173_631,
            solution.final_bearing().0,
            1.0e-3
        ));
    }

    #[test]
    fn test_inverse_budapest() {
        let janos_hill = LatLong::new(Degrees(47.483_580), Degrees(19.015_257));
        let airport = LatLong::new(Degrees(47.438_437), Degrees(19.252_274));

        let solution =
            calculate_inverse(&janos_hill, &airport, &WGS84_ELLIPSOID).expect("converges");
        assert!(is_within_tolerance(18_562.0, solution.distance().0, 1.0));
    }

    #[test]
    fn test_inverse_coincident_points() {
        let position = LatLong::new(Degrees(47.483_580), Degrees(19.015_257));

        let solution =
            calculate_inverse(&position, &position, &WGS84_ELLIPSOID).expect("degenerate success");
        assert_eq!(InverseSolution::Coincident, solution);
        assert_eq!(0.0, solution.distance().0);
        assert_eq!(0.0, solution.initial_bearing().0);
        assert_eq!(0.0, solution.final_bearing().0);
    }

    #[test]
    fn test_inverse_equatorial_line() {
        // both points on the equator: exercises the cos²α = 0 guard
        let a = LatLong::new(Degrees(0.0), Degrees(0.0));
        let b = LatLong::new(Degrees(0.0), Degrees(10.0));

        let solution = calculate_inverse(&a, &b, &WGS84_ELLIPSOID).expect("converges");
        // 10° of the equator: a · 10°·π/180
        assert!(is_within_tolerance(
            1_113_194.908,
            solution.distance().0,
            1.0e-2
        ));
        assert!(is_within_tolerance(90.0, solution.initial_bearing().0, 1.0e-9));
        assert!(is_within_tolerance(90.0, solution.final_bearing().0, 1.0e-9));
    }

    #[test]
    fn test_inverse_meridional_line() {
        let a = LatLong::new(Degrees(10.0), Degrees(25.0));
        let b = LatLong::new(Degrees(55.0), Degrees(25.0));

        let solution = calculate_inverse(&a, &b, &WGS84_ELLIPSOID).expect("converges");
        assert_eq!(0.0, solution.initial_bearing().0);
        assert_eq!(0.0, solution.final_bearing().0);
        assert!(solution.distance().0 > 0.0);
    }

    #[test]
    fn test_inverse_nearly_antipodal_fails_to_converge() {
        // the classic non-convergent pair for Vincenty's inverse formula
        let a = LatLong::new(Degrees(0.0), Degrees(0.0));
        let b = LatLong::new(Degrees(0.5), Degrees(179.7));

        let result = calculate_inverse(&a, &b, &WGS84_ELLIPSOID);
        assert_eq!(Err(GeodesyError::NotConverged(MAX_ITERATIONS)), result);
    }

    #[test]
    fn test_inverse_bearing_ranges() {
        let centre = LatLong::new(Degrees(45.0), Degrees(9.0));

        // 10°..350°, avoiding the 0°/360° wrap-around
        for i in 1..36 {
            let bearing = f64::from(i) * 10.0;
            let direct = calculate_direct(
                &centre,
                Metres(50_000.0),
                Degrees(bearing),
                &WGS84_ELLIPSOID,
            )
            .expect("converges");
            let inverse = calculate_inverse(&centre, &direct.destination, &WGS84_ELLIPSOID)
                .expect("converges");

            assert!((0.0..360.0).contains(&inverse.initial_bearing().0));
            assert!((0.0..360.0).contains(&inverse.final_bearing().0));
            assert!(is_within_tolerance(
                bearing,
                inverse.initial_bearing().0,
                1.0e-5
            ));
        }
    }

    #[test]
    fn test_direct_zero_distance_identity() {
        let origin = LatLong::new(Degrees(47.483_580), Degrees(19.015_257));
        // 1.0 metre expressed in degrees of latitude
        const COORDINATE_EPSILON: f64 = 0.000_008_889;

        for bearing in [0.0, 90.0, 180.0, 270.0] {
            let solution =
                calculate_direct(&origin, Metres(0.0), Degrees(bearing), &WGS84_ELLIPSOID)
                    .expect("converges");
            assert!(is_within_tolerance(
                origin.lat().0,
                solution.destination.lat().0,
                COORDINATE_EPSILON
            ));
            assert!(is_within_tolerance(
                origin.lon().0,
                solution.destination.lon().0,
                COORDINATE_EPSILON
            ));
        }
    }

    #[test]
    fn test_direct_inverse_round_trip() {
        let origin = LatLong::new(Degrees(47.483_580), Degrees(19.015_257));

        for i in 1..=10 {
            let distance = f64::from(i) * 10_000.0;
            for bearing in [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0] {
                let direct = calculate_direct(
                    &origin,
                    Metres(distance),
                    Degrees(bearing),
                    &WGS84_ELLIPSOID,
                )
                .expect("converges");
                let inverse = calculate_inverse(&origin, &direct.destination, &WGS84_ELLIPSOID)
                    .expect("converges");
                assert!(is_within_tolerance(distance, inverse.distance().0, 1.0));
            }
        }
    }

    #[test]
    fn test_direct_longitude_normalization() {
        // eastbound across the antimeridian
        let origin = LatLong::new(Degrees(0.0), Degrees(179.5));
        let solution = calculate_direct(
            &origin,
            Metres(200_000.0),
            Degrees(90.0),
            &WGS84_ELLIPSOID,
        )
        .expect("converges");

        assert!(solution.destination.lon().0 < 0.0);
        assert!(solution.destination.lon().0 > -180.0);
    }

    #[test]
    fn test_direct_other_datum() {
        use crate::ellipsoid::Datum;

        let origin = LatLong::new(Degrees(51.4778), Degrees(-0.0015));
        let airy = Datum::Airy1830.ellipsoid();

        let on_airy = calculate_direct(&origin, Metres(10_000.0), Degrees(30.0), &airy)
            .expect("converges");
        let on_wgs84 =
            calculate_direct(&origin, Metres(10_000.0), Degrees(30.0), &WGS84_ELLIPSOID)
                .expect("converges");

        // different ellipsoids give slightly different destinations
        assert!(on_airy != on_wgs84);
        assert!(is_within_tolerance(
            on_wgs84.destination.lat().0,
            on_airy.destination.lat().0,
            1.0e-4
        ));
    }
}
