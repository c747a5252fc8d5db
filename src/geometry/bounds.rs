use crate::error::Error;
use crate::geometry::Coord;
use std::fmt::{self, Display, Formatter};
use std::ops::RangeInclusive;

/// An axis-aligned rectangle of pixels with both corners inclusive
///
/// The lower right corner names the last pixel INSIDE the rectangle, not one
/// past it. Hosts that hand out exclusive lower-right rectangles go through
/// [`Bounds::from_exclusive`]. Because both corners are inclusive a `Bounds`
/// always encloses at least one pixel; a zero-area rectangle is not
/// representable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Bounds {
    ulx: i32,
    uly: i32,
    lrx: i32,
    lry: i32,
}

impl Bounds {
    /// Create a rectangle from its inclusive corners
    pub fn new(ulx: i32, uly: i32, lrx: i32, lry: i32) -> Result<Self, Error> {
        if ulx > lrx || uly > lry {
            return Err(Error::InvalidBounds { ulx, uly, lrx, lry });
        }

        Ok(Self { ulx, uly, lrx, lry })
    }

    /// Create a rectangle from corners whose lower right is exclusive
    ///
    /// Converts to the inclusive convention by pulling the lower right corner
    /// in by one pixel per axis, then validates.
    pub fn from_exclusive(ulx: i32, uly: i32, lrx: i32, lry: i32) -> Result<Self, Error> {
        Self::new(ulx, uly, lrx - 1, lry - 1)
    }

    /// Full extent of a `width x height` grid anchored at the origin.
    ///
    /// Callers guarantee nonzero dimensions, so this cannot fail.
    pub(crate) fn of_extent(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            ulx: 0,
            uly: 0,
            lrx: width as i32 - 1,
            lry: height as i32 - 1,
        }
    }

    /// X coordinate of the upper left corner
    pub fn ulx(&self) -> i32 {
        self.ulx
    }

    /// Y coordinate of the upper left corner
    pub fn uly(&self) -> i32 {
        self.uly
    }

    /// X coordinate of the last pixel inside the rectangle
    pub fn lrx(&self) -> i32 {
        self.lrx
    }

    /// Y coordinate of the last pixel inside the rectangle
    pub fn lry(&self) -> i32 {
        self.lry
    }

    /// The upper left corner pixel
    pub fn upper_left(&self) -> Coord {
        Coord::new(self.ulx, self.uly)
    }

    /// The lower right corner pixel (inside the rectangle)
    pub fn lower_right(&self) -> Coord {
        Coord::new(self.lrx, self.lry)
    }

    /// Number of pixel columns enclosed
    pub fn width(&self) -> i32 {
        self.lrx - self.ulx + 1
    }

    /// Number of pixel rows enclosed
    pub fn height(&self) -> i32 {
        self.lry - self.uly + 1
    }

    /// Whether the given pixel lies inside the rectangle
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= self.ulx && coord.x <= self.lrx && coord.y >= self.uly && coord.y <= self.lry
    }

    /// The y values of all enclosed rows, top to bottom
    pub fn rows(&self) -> RangeInclusive<i32> {
        self.uly..=self.lry
    }

    /// The x values of all enclosed columns, left to right
    pub fn columns(&self) -> RangeInclusive<i32> {
        self.ulx..=self.lrx
    }

    /// The same rectangle translated so its upper left corner is the origin
    pub fn normalized(&self) -> Self {
        Self {
            ulx: 0,
            uly: 0,
            lrx: self.width() - 1,
            lry: self.height() - 1,
        }
    }
}

impl Display for Bounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Bounds({},{},{},{})", self.ulx, self.uly, self.lrx, self.lry)
    }
}
