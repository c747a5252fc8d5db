use crate::geometry::{Bounds, Coord};
use thiserror::Error;

/// Failures reported by the pixmap and mask operations
///
/// All of these are local, synchronous failures handed to the immediate
/// caller. Nothing is retried and nothing is swallowed.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// An initializer buffer does not fill the declared dimensions
    #[error("initializer holds {actual} bytes where the declared shape needs {expected}")]
    ShapeMismatch {
        /// Byte count the declared dimensions require
        expected: usize,
        /// Byte count actually supplied
        actual: usize,
    },

    /// A selection mask does not cover the pixmap it is attached to
    #[error("mask holds {mask_len} bytes but the pixmap has {pixel_count} pixels")]
    MaskMismatch {
        /// Byte count of the supplied mask
        mask_len: usize,
        /// Pixel count of the pixmap
        pixel_count: usize,
    },

    /// Coordinates address a pixel outside the buffer extent
    #[error("coordinates {coord} are outside a {width}x{height} buffer")]
    IndexOutOfBounds {
        /// The offending coordinates
        coord: Coord,
        /// Buffer width in pixels
        width: usize,
        /// Buffer height in pixels
        height: usize,
    },

    /// A pixel write supplied the wrong number of pixelel values
    #[error("got {actual} pixelel value(s) where the pixmap stores {expected} per pixel")]
    ChannelCountMismatch {
        /// Pixelels per pixel of the buffer
        expected: usize,
        /// Length of the supplied value slice
        actual: usize,
    },

    /// A pixelel index addresses a channel the pixmap does not have
    #[error("pixelel index {channel} is outside a pixel of {bpp} pixelel(s)")]
    PixelelIndexOutOfBounds {
        /// The offending channel index
        channel: usize,
        /// Pixelels per pixel of the buffer
        bpp: usize,
    },

    /// A buffer was declared with a zero dimension
    #[error("width and height must both be greater than 0, got {width}x{height}")]
    InvalidSize {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
    },

    /// Unmasked bounds were requested for a mask with no unmasked pixels
    #[error("a total mask has no unmasked pixels and therefore no unmasked bounds")]
    TotalMaskHasNoBounds,

    /// Cached unmasked bounds were read before any successful computation
    #[error("unmasked bounds have not been computed")]
    BoundsNotComputed,

    /// Caller-supplied unmasked bounds disagree with the mask contents
    #[error("bounds {supplied} are not the unmasked bounds of this mask")]
    BoundsValidation {
        /// The rejected rectangle
        supplied: Bounds,
    },

    /// A rectangle was declared with its lower-right corner before its upper-left
    #[error("lower right corner ({lrx},{lry}) lies before upper left corner ({ulx},{uly})")]
    InvalidBounds {
        /// Upper left x
        ulx: i32,
        /// Upper left y
        uly: i32,
        /// Lower right x
        lrx: i32,
        /// Lower right y
        lry: i32,
    },
}
