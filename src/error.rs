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

//! The error type used by the crate.
//!
//! Degenerate geometries are not errors: coincident positions are reported by
//! the [`InverseSolution::Coincident`](crate::geodesic::InverseSolution)
//! variant and great circles without an intersection point by `None`.

use thiserror::Error;

/// The failure conditions of the geodesic solver and the planar projection.
///
/// Every variant is recoverable by the caller; no condition is fatal to the
/// process.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum GeodesyError {
    /// The Vincenty fixed-point iteration exceeded its iteration cap.
    ///
    /// This is the formula's known failure mode for nearly antipodal points.
    #[error("geodesic solution failed to converge within {0} iterations")]
    NotConverged(u32),

    /// A latitude at or beyond a pole was passed to the forward projection,
    /// where the Mercator-style projection is singular.
    #[error("latitude {0}° is outside the projection domain (-90°, 90°)")]
    ProjectionDomain(f64),
}
