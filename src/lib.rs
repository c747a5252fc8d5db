#![deny(trivial_casts)]
#![warn(
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    missing_debug_implementations,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications
)]

//!
//! In-memory pixel buffer and selection mask primitives for image editing
//! hosts.
//!
//! A [`Pixmap`] is a flat, addressable byte buffer of multi-channel pixels
//! with an owned [`PixmapMask`] describing the selection. [`Coord`] and
//! [`Bounds`] supply the coordinate arithmetic, with rectangles inclusive on
//! both corners. A host binding implements [`Drawable`] to hand raw bytes in
//! and accept a flush back out; everything in between is synchronous,
//! single-threaded reads and writes against exclusively owned memory.
//!

mod error;

pub mod drawable;
pub mod geometry;
pub mod pixmap;

pub use drawable::Drawable;
pub use error::Error;
pub use geometry::{Bounds, Coord};
pub use pixmap::{PixelelId, Pixmap, PixmapMask};
