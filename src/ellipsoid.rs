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

//! The `ellipsoid` module contains the parameters of the named reference
//! ellipsoids (datums) supported by the library.
//!
//! Each datum is defined by the Semimajor axis `A`, the Semiminor axis `B`
//! and the flattening ratio `F` of its ellipsoid. The three values are
//! authoritative constants taken from the datum definitions; the Semiminor
//! axis is **not** re-derived from the flattening.

use crate::Ellipsoid;

/// The WGS 84 ellipsoid parameters, the de facto standard for satellite
/// navigation and the default datum for geodesic calculations.
pub mod wgs84 {
    use crate::Metres;

    /// The WGS 84 Semimajor axis measured in metres.
    pub const A: Metres = Metres(6_378_137.0);
    /// The WGS 84 Semiminor axis measured in metres.
    pub const B: Metres = Metres(6_356_752.314_25);
    /// The WGS 84 flattening, a ratio.
    pub const F: f64 = 1.0 / 298.257_223_563;
}

/// The spherical-Earth parameters used by the EPSG:3857 Web Mercator
/// projection: the WGS 84 Semimajor axis as both axes.
pub mod epsg3857 {
    use crate::Metres;

    /// The EPSG:3857 Semimajor axis measured in metres.
    pub const A: Metres = Metres(6_378_137.0);
    /// The EPSG:3857 Semiminor axis: the same as the Semimajor axis.
    pub const B: Metres = Metres(6_378_137.0);
    /// The flattening ratio carried over from WGS 84.
    pub const F: f64 = 1.0 / 298.257_223_563;
}

/// The Geodetic Reference System 1980 ellipsoid parameters.
pub mod grs80 {
    use crate::Metres;

    /// The GRS 80 Semimajor axis measured in metres.
    pub const A: Metres = Metres(6_378_137.0);
    /// The GRS 80 Semiminor axis measured in metres.
    pub const B: Metres = Metres(6_356_752.314_14);
    /// The GRS 80 flattening, a ratio.
    pub const F: f64 = 1.0 / 298.257_222_101;
}

/// The Airy 1830 ellipsoid parameters, used by the British Ordnance Survey.
pub mod airy1830 {
    use crate::Metres;

    /// The Airy 1830 Semimajor axis measured in metres.
    pub const A: Metres = Metres(6_377_563.396);
    /// The Airy 1830 Semiminor axis measured in metres.
    pub const B: Metres = Metres(6_356_256.909);
    /// The Airy 1830 flattening, a ratio.
    pub const F: f64 = 1.0 / 299.324_964_6;
}

/// The Airy Modified ellipsoid parameters, used by the Irish grid.
pub mod airy_modified {
    use crate::Metres;

    /// The Airy Modified Semimajor axis measured in metres.
    pub const A: Metres = Metres(6_377_340.189);
    /// The Airy Modified Semiminor axis measured in metres.
    pub const B: Metres = Metres(6_356_034.448);
    /// The Airy Modified flattening, a ratio.
    pub const F: f64 = 1.0 / 299.324_964_6;
}

/// The International 1924 (Hayford) ellipsoid parameters.
pub mod intl1924 {
    use crate::Metres;

    /// The International 1924 Semimajor axis measured in metres.
    pub const A: Metres = Metres(6_378_388.0);
    /// The International 1924 Semiminor axis measured in metres.
    pub const B: Metres = Metres(6_356_911.946);
    /// The International 1924 flattening, a ratio.
    pub const F: f64 = 1.0 / 297.0;
}

/// The Bessel 1841 ellipsoid parameters.
pub mod bessel1841 {
    use crate::Metres;

    /// The Bessel 1841 Semimajor axis measured in metres.
    pub const A: Metres = Metres(6_377_397.155);
    /// The Bessel 1841 Semiminor axis measured in metres.
    pub const B: Metres = Metres(6_356_078.963);
    /// The Bessel 1841 flattening, a ratio.
    pub const F: f64 = 1.0 / 299.152_815_351;
}

/// The closed set of named reference ellipsoids (datums).
///
/// A `Datum` resolves to exactly one `Ellipsoid`; the mapping is a constant
/// table with no error path.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Datum {
    /// World Geodetic System 1984, the GPS reference ellipsoid.
    #[default]
    Wgs84,
    /// The spherical Earth used by the EPSG:3857 Web Mercator projection.
    Epsg3857,
    /// Geodetic Reference System 1980.
    Grs80,
    /// Airy 1830, used by the British Ordnance Survey.
    Airy1830,
    /// Airy Modified, used by the Irish grid.
    AiryModified,
    /// International 1924, also known as Hayford.
    Intl1924,
    /// Bessel 1841.
    Bessel1841,
}

impl Datum {
    /// Look up the `Ellipsoid` defined by the datum.
    ///
    /// # Examples
    /// ```
    /// use vincenty_geodesy::ellipsoid::{wgs84, Datum};
    ///
    /// let geoid = Datum::Wgs84.ellipsoid();
    /// assert_eq!(wgs84::A, geoid.a());
    /// assert_eq!(wgs84::B, geoid.b());
    /// assert_eq!(wgs84::F, geoid.f());
    /// ```
    #[must_use]
    pub const fn ellipsoid(self) -> Ellipsoid {
        match self {
            Self::Wgs84 => Ellipsoid::new(wgs84::A, wgs84::B, wgs84::F),
            Self::Epsg3857 => Ellipsoid::new(epsg3857::A, epsg3857::B, epsg3857::F),
            Self::Grs80 => Ellipsoid::new(grs80::A, grs80::B, grs80::F),
            Self::Airy1830 => Ellipsoid::new(airy1830::A, airy1830::B, airy1830::F),
            Self::AiryModified => {
                Ellipsoid::new(airy_modified::A, airy_modified::B, airy_modified::F)
            }
            Self::Intl1924 => Ellipsoid::new(intl1924::A, intl1924::B, intl1924::F),
            Self::Bessel1841 => Ellipsoid::new(bessel1841::A, bessel1841::B, bessel1841::F),
        }
    }
}
