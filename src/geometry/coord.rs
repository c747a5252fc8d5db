use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Mul, Sub};

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

/// A pair of integer pixel coordinates
///
/// Similar to a vector but with fewer operations.
/// All arithmetic produces a new value; equality is structural.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coord {
    /// Horizontal component, growing rightwards
    pub x: i32,
    /// Vertical component, growing downwards
    pub y: i32,
}

impl Coord {
    /// Create a coordinate pair from its components
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Add a scalar to both components
    pub fn add_scalar(self, scalar: i32) -> Self {
        Self::new(self.x + scalar, self.y + scalar)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Coord {
        Coord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, other: Coord) -> Coord {
        Coord::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Coord {
    type Output = Coord;

    /// Scale both components, truncating each product toward zero.
    ///
    /// Coordinates stay integral under fractional scaling, so `Coord::new(3, -3) * 0.5`
    /// is `(1, -1)`, not a rounded `(2, -2)`.
    fn mul(self, scalar: f64) -> Coord {
        Coord::new((self.x as f64 * scalar) as i32, (self.y as f64 * scalar) as i32)
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({},{})", self.x, self.y)
    }
}

#[cfg(test)]
impl Arbitrary for Coord {
    fn arbitrary(g: &mut Gen) -> Self {
        Self::new(i32::arbitrary(g), i32::arbitrary(g))
    }
}
