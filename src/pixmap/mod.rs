//!
//! The in-memory pixel buffer and its selection mask
//!
//! [`Pixmap`] holds multi-channel color bytes, [`PixmapMask`] the matching
//! single-channel selection, and [`PixelelId`] names one channel of one
//! pixel for get/set through [`Pixmap::get_pixelel`] /
//! [`Pixmap::set_pixelel`].
//!

mod buffer;
mod mask;
mod pixelel;

pub use buffer::Pixmap;
pub use mask::PixmapMask;
pub use pixelel::PixelelId;
