use crate::error::Error;
use crate::geometry::{Bounds, Coord};
use crate::pixmap::{PixelelId, PixmapMask};

/// A multi-channel pixel buffer addressed by [`Coord`]
///
/// Pixels are stored row-major and channel-interleaved, `bpp` bytes per
/// pixel. Every pixmap owns exactly one [`PixmapMask`] describing its
/// selection, one mask byte per pixel regardless of `bpp`.
///
/// Reads and writes go against this in-memory buffer only. If the buffer was
/// snapshotted from a host drawable it can go stale relative to the host; the
/// core neither detects nor repairs that, see
/// [`Pixmap::flush`](crate::drawable).
#[derive(Debug, Clone)]
pub struct Pixmap {
    width: usize,
    height: usize,
    bpp: usize,
    data: Vec<u8>,
    selection_mask: PixmapMask,
}

impl Pixmap {
    /// Create a pixmap over the given initializer bytes
    ///
    /// The initializer must hold exactly `width * height * bpp` bytes and the
    /// mask exactly one byte per pixel.
    pub fn new(
        width: usize,
        height: usize,
        bpp: usize,
        initializer: Vec<u8>,
        mask: PixmapMask,
    ) -> Result<Self, Error> {
        if width == 0 || height == 0 || bpp == 0 {
            return Err(Error::InvalidSize { width, height });
        }

        let expected = width * height * bpp;
        if initializer.len() != expected {
            return Err(Error::ShapeMismatch {
                expected,
                actual: initializer.len(),
            });
        }

        if mask.len() != width * height {
            return Err(Error::MaskMismatch {
                mask_len: mask.len(),
                pixel_count: width * height,
            });
        }

        Ok(Self {
            width,
            height,
            bpp,
            data: initializer,
            selection_mask: mask,
        })
    }

    /// Width of the pixmap in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the pixmap in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixelels (channel bytes) per pixel
    pub fn bpp(&self) -> usize {
        self.bpp
    }

    /// The full pixel payload in row-major, channel-interleaved order
    pub fn raw_data(&self) -> &[u8] {
        &self.data
    }

    /// Whether the given coordinates fall outside the pixmap rectangle
    ///
    /// Purely an extent test; the selection mask plays no part. Use this when
    /// computing coordinates that might leave the buffer instead of catching
    /// the error from a subscript.
    pub fn is_clipped(&self, coord: Coord) -> bool {
        coord.x < 0
            || coord.y < 0
            || coord.x as usize >= self.width
            || coord.y as usize >= self.height
    }

    /// Calculates the byte index of the first pixelel of the pixel at `coord`
    fn pixel_index(&self, coord: Coord) -> Result<usize, Error> {
        if self.is_clipped(coord) {
            return Err(Error::IndexOutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            });
        }

        Ok((coord.y as usize * self.width + coord.x as usize) * self.bpp)
    }

    /// Get the pixel at `coord` as its `bpp` channel bytes
    pub fn get(&self, coord: Coord) -> Result<&[u8], Error> {
        let i = self.pixel_index(coord)?;
        Ok(&self.data[i..i + self.bpp])
    }

    /// Overwrite the pixel at `coord` with `bpp` channel bytes
    ///
    /// Nothing is written when the value slice has the wrong length.
    pub fn set(&mut self, coord: Coord, values: &[u8]) -> Result<(), Error> {
        if values.len() != self.bpp {
            return Err(Error::ChannelCountMismatch {
                expected: self.bpp,
                actual: values.len(),
            });
        }

        let i = self.pixel_index(coord)?;
        self.data[i..i + self.bpp].copy_from_slice(values);
        Ok(())
    }

    /// Get the single channel byte named by `id`
    pub fn get_pixelel(&self, id: PixelelId) -> Result<u8, Error> {
        if id.channel() >= self.bpp {
            return Err(Error::PixelelIndexOutOfBounds {
                channel: id.channel(),
                bpp: self.bpp,
            });
        }

        Ok(self.get(id.coord())?[id.channel()])
    }

    /// Set the single channel byte named by `id`
    ///
    /// Reads the whole pixel, replaces the one channel and writes the pixel
    /// back; a detached copy of the channel slice would not reflect the
    /// mutation into the buffer on its own.
    pub fn set_pixelel(&mut self, id: PixelelId, value: u8) -> Result<(), Error> {
        if id.channel() >= self.bpp {
            return Err(Error::PixelelIndexOutOfBounds {
                channel: id.channel(),
                bpp: self.bpp,
            });
        }

        let mut pixel = self.get(id.coord())?.to_vec();
        pixel[id.channel()] = value;
        self.set(id.coord(), &pixel)
    }

    /// Iterate the [`PixelelId`]s of the pixel at `coord`, one per channel
    ///
    /// The coordinates are not validated here; they fail on first use with
    /// [`Self::get_pixelel`] / [`Self::set_pixelel`].
    pub fn pixelel_ids_at(&self, coord: Coord) -> impl Iterator<Item = PixelelId> {
        (0..self.bpp).map(move |channel| PixelelId::new(coord, channel))
    }

    /// Iterate all pixels in row-major order as `bpp`-length channel slices
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.bpp)
    }

    /// The owned selection mask
    ///
    /// !!! Not a copy: mutations through [`Self::selection_mask_mut`] and
    /// [`Self::invert_selection`] are visible here. Callers needing isolation
    /// take [`Self::copy_selection_mask`].
    pub fn selection_mask(&self) -> &PixmapMask {
        &self.selection_mask
    }

    /// Mutable access to the owned selection mask
    pub fn selection_mask_mut(&mut self) -> &mut PixmapMask {
        &mut self.selection_mask
    }

    /// An independent deep copy of the selection mask
    pub fn copy_selection_mask(&self) -> PixmapMask {
        self.selection_mask.clone()
    }

    /// Whether the pixel at `coord` is entirely outside the selection
    pub fn is_totally_not_selected(&self, coord: Coord) -> Result<bool, Error> {
        self.selection_mask.is_totally_not_selected(coord)
    }

    /// Whether the pixel at `coord` is fully selected
    pub fn is_totally_selected(&self, coord: Coord) -> Result<bool, Error> {
        self.selection_mask.is_totally_selected(coord)
    }

    /// Whether the pixel at `coord` is partially or totally selected
    pub fn is_somewhat_selected(&self, coord: Coord) -> Result<bool, Error> {
        self.selection_mask.is_somewhat_selected(coord)
    }

    /// Invert the selection in place
    pub fn invert_selection(&mut self) {
        self.selection_mask.invert();
    }

    /// A mask of matching dimensions selecting ALL pixels
    pub fn get_total_select_mask(&self) -> PixmapMask {
        // unmasked is selected
        self.selection_mask.get_unmasked_copy()
    }

    /// A mask of matching dimensions selecting NO pixels
    pub fn get_total_unselect_mask(&self) -> PixmapMask {
        let mut mask = self.get_total_select_mask();
        mask.invert();
        mask
    }

    /// The full extent of the pixmap as an inclusive rectangle
    pub fn bounds(&self) -> Bounds {
        Bounds::of_extent(self.width, self.height)
    }

    /// Bounds of the selection, or `None` when nothing is selected
    ///
    /// Computes (and caches) the unmasked bounds on the owned mask.
    pub fn selection_bounds(&mut self) -> Result<Option<Bounds>, Error> {
        if self.selection_mask.is_total_mask() {
            return Ok(None);
        }

        Ok(Some(self.selection_mask.compute_unmasked_bounds()?))
    }
}

impl<'a> IntoIterator for &'a Pixmap {
    type Item = &'a [u8];
    type IntoIter = std::slice::ChunksExact<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.chunks_exact(self.bpp)
    }
}
