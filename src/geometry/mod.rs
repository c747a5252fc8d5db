//!
//! Coordinate and rectangle value types shared by the pixmap and its mask
//!

mod bounds;
mod coord;

pub use bounds::Bounds;
pub use coord::Coord;
