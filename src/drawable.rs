//!
//! The contract with the host application's drawable
//!
//! The core never talks to an image editing host itself. A host binding
//! implements [`Drawable`], the core snapshots its bytes once at
//! construction and writes them back once on [`Pixmap::flush`]. In between,
//! the host may mutate the drawable independently and the snapshot goes
//! stale; the core does not detect that.
//!

use crate::geometry::Bounds;
use crate::pixmap::{Pixmap, PixmapMask};
use anyhow::{ensure, Context, Result};
use tracing::debug;

/// A host-side raster the core can snapshot from and flush to
pub trait Drawable {
    /// Size of the drawable as `(width, height)` in pixels
    fn size(&self) -> (usize, usize);

    /// Number of channel bytes per pixel
    fn bytes_per_pixel(&self) -> usize;

    /// The drawable's pixel bytes, row-major and channel-interleaved,
    /// `width * height * bytes_per_pixel` long
    fn read_pixels(&self) -> Result<Vec<u8>>;

    /// The drawable's selection as one byte per pixel in [0,255], row-major,
    /// `width * height` long
    fn read_selection(&self) -> Result<Vec<u8>>;

    /// Accept the full pixel payload back and redraw `region`
    ///
    /// `region` is inclusive on both corners; a host working with exclusive
    /// rectangles converts before redrawing.
    fn write_pixels(&mut self, data: &[u8], region: Bounds) -> Result<()>;
}

impl Pixmap {
    /// Snapshot a drawable's pixels and selection into a new pixmap
    pub fn from_drawable(drawable: &impl Drawable) -> Result<Self> {
        let (width, height) = drawable.size();
        let bpp = drawable.bytes_per_pixel();

        let pixels = drawable.read_pixels().context("reading drawable pixels")?;
        let selection = drawable
            .read_selection()
            .context("reading drawable selection")?;
        debug!(
            width,
            height,
            bpp,
            pixel_bytes = pixels.len(),
            "snapshotting drawable"
        );

        let mask = PixmapMask::new(width, selection, Some(height))
            .context("drawable selection does not cover the drawable")?;
        let pixmap = Pixmap::new(width, height, bpp, pixels, mask)
            .context("drawable pixels do not fill the declared dimensions")?;
        Ok(pixmap)
    }

    /// Flush the buffered pixels back to a drawable
    ///
    /// The whole payload is written; `region` restricts only the host-side
    /// redraw and defaults to the full extent.
    pub fn flush(&self, drawable: &mut impl Drawable, region: Option<Bounds>) -> Result<()> {
        let (width, height) = drawable.size();
        ensure!(
            width == self.width() && height == self.height(),
            "drawable is {}x{} but the pixmap is {}x{}",
            width,
            height,
            self.width(),
            self.height(),
        );

        let region = region.unwrap_or_else(|| self.bounds());
        debug!(%region, "flushing pixmap to drawable");
        drawable.write_pixels(self.raw_data(), region)
    }
}
