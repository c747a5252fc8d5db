use crate::geometry::Coord;
use std::fmt::{self, Display, Formatter};

/// A handle for one pixelel: the 2D coordinates of a pixel plus the index of
/// one channel within that pixel
///
/// There is no pixelel type of its own. A pixmap is an array of pixels, a
/// pixel is an array of channel bytes, and a `PixelelId` names one element of
/// the latter. Produced on demand, carries no ownership.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PixelelId {
    coord: Coord,
    channel: usize,
}

impl PixelelId {
    /// Create an id for the given channel of the pixel at `coord`
    pub fn new(coord: Coord, channel: usize) -> Self {
        Self { coord, channel }
    }

    /// The pixel this id points into
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Zero-based channel index within the pixel
    pub fn channel(&self) -> usize {
        self.channel
    }
}

impl Display for PixelelId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PixelelId({},{})", self.coord, self.channel)
    }
}
