use crate::error::Error;
use crate::geometry::{Bounds, Coord};
use itertools::Itertools;
use tracing::trace;

/// A single-channel pixmap used as a mask
///
/// Each byte gives the degree of masking of one pixel: 0 is totally masked,
/// 255 totally unmasked, anything in between partially masked. The same bytes
/// carry a dual reading as a selection, where 0 means not selected and 255
/// fully selected. Usually one-to-one with a [`Pixmap`](super::Pixmap)
/// holding color.
#[derive(Debug, Clone)]
pub struct PixmapMask {
    width: usize,
    height: usize,
    data: Vec<u8>,
    unmasked_bounds: Option<Bounds>,
}

impl PixmapMask {
    /// Mask value of a pixel that is fully masked off
    pub const TOTALLY_MASKED: u8 = 0;
    /// Mask value of a pixel that is not masked at all
    pub const TOTALLY_UNMASKED: u8 = 255;

    /// Selection reading of [`Self::TOTALLY_MASKED`]
    pub const TOTALLY_NOT_SELECTED: u8 = 0;
    /// Selection reading of [`Self::TOTALLY_UNMASKED`]
    pub const TOTALLY_SELECTED: u8 = 255;

    /// Create a mask over the given initializer bytes
    ///
    /// The height is derived as `initializer.len() / width`. When
    /// `expected_height` is given the initializer must match it exactly.
    /// The unmasked bounds start out uncomputed.
    pub fn new(
        width: usize,
        initializer: Vec<u8>,
        expected_height: Option<usize>,
    ) -> Result<Self, Error> {
        if width == 0 || initializer.is_empty() {
            return Err(Error::InvalidSize {
                width,
                height: expected_height.unwrap_or(0),
            });
        }

        let expected_len = match expected_height {
            Some(height) => width * height,
            // without a declared height the initializer must still fill whole rows
            None => (initializer.len() / width) * width,
        };
        if initializer.len() != expected_len {
            return Err(Error::ShapeMismatch {
                expected: expected_len,
                actual: initializer.len(),
            });
        }

        Ok(Self {
            width,
            height: initializer.len() / width,
            data: initializer,
            unmasked_bounds: None,
        })
    }

    /// Width of the mask in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the mask in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of mask bytes (one per pixel)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the mask covers no pixels (never true for a constructed mask)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw mask bytes in row-major order
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Calculates the buffer index of the given coordinates
    fn index(&self, coord: Coord) -> Result<usize, Error> {
        if coord.x < 0
            || coord.y < 0
            || coord.x as usize >= self.width
            || coord.y as usize >= self.height
        {
            return Err(Error::IndexOutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            });
        }

        // one byte per pixel, no channel multiplier
        Ok(coord.y as usize * self.width + coord.x as usize)
    }

    /// Get the masking degree of the pixel at `coord`
    pub fn get(&self, coord: Coord) -> Result<u8, Error> {
        Ok(self.data[self.index(coord)?])
    }

    /// Set the masking degree of the pixel at `coord`
    pub fn set(&mut self, coord: Coord, value: u8) -> Result<(), Error> {
        let i = self.index(coord)?;
        self.data[i] = value;
        Ok(())
    }

    /// Does a mask byte represent a partially or totally unmasked pixel?
    pub fn mask_value_is_unmasked(value: u8) -> bool {
        value > Self::TOTALLY_MASKED
    }

    /// Whether the pixel at `coord` is fully masked off
    pub fn is_totally_masked(&self, coord: Coord) -> Result<bool, Error> {
        Ok(self.get(coord)? == Self::TOTALLY_MASKED)
    }

    /// Whether the pixel at `coord` is not masked at all
    pub fn is_totally_unmasked(&self, coord: Coord) -> Result<bool, Error> {
        Ok(self.get(coord)? == Self::TOTALLY_UNMASKED)
    }

    /// Whether the pixel at `coord` is partially or totally unmasked
    pub fn is_somewhat_unmasked(&self, coord: Coord) -> Result<bool, Error> {
        Ok(Self::mask_value_is_unmasked(self.get(coord)?))
    }

    /// Selection reading of [`Self::is_totally_masked`]
    pub fn is_totally_not_selected(&self, coord: Coord) -> Result<bool, Error> {
        Ok(self.get(coord)? == Self::TOTALLY_NOT_SELECTED)
    }

    /// Selection reading of [`Self::is_totally_unmasked`]
    pub fn is_totally_selected(&self, coord: Coord) -> Result<bool, Error> {
        Ok(self.get(coord)? == Self::TOTALLY_SELECTED)
    }

    /// Whether the pixel at `coord` is partially or totally selected
    pub fn is_somewhat_selected(&self, coord: Coord) -> Result<bool, Error> {
        Ok(!self.is_totally_not_selected(coord)?)
    }

    /// Whether every pixel is fully masked off
    ///
    /// Under the selection reading: nothing is selected. Returns on the first
    /// byte that is unmasked to any degree.
    pub fn is_total_mask(&self) -> bool {
        self.data.iter().all(|&value| value == Self::TOTALLY_MASKED)
    }

    /// Invert the masking degree of every pixel in place
    ///
    /// !!! Previously computed unmasked bounds are left as they were and no
    /// longer describe the mask. Callers that need bounds after inverting
    /// must call [`Self::compute_unmasked_bounds`] again.
    pub fn invert(&mut self) {
        for value in &mut self.data {
            *value = Self::TOTALLY_UNMASKED - *value;
        }
    }

    /// Scan the whole mask for the corners of its unmasked area
    fn scan_unmasked_bounds(&self) -> Result<Bounds, Error> {
        let mut corners: Option<(i32, i32, i32, i32)> = None;
        // row-major scan; the mask is not spatially indexed so there is no shortcut
        for i in self
            .data
            .iter()
            .positions(|&value| Self::mask_value_is_unmasked(value))
        {
            let x = (i % self.width) as i32;
            let y = (i / self.width) as i32;
            corners = Some(match corners {
                None => (x, y, x, y),
                Some((min_x, min_y, max_x, max_y)) => {
                    (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
                }
            });
        }

        match corners {
            None => Err(Error::TotalMaskHasNoBounds),
            Some((min_x, min_y, max_x, max_y)) => Bounds::new(min_x, min_y, max_x, max_y),
        }
    }

    /// Compute, cache and return the minimal rectangle enclosing every pixel
    /// that is unmasked to some degree
    ///
    /// Fails with [`Error::TotalMaskHasNoBounds`] when no pixel is unmasked;
    /// an empty set has no bounding rectangle. Runs in O(width * height).
    pub fn compute_unmasked_bounds(&mut self) -> Result<Bounds, Error> {
        let bounds = self.scan_unmasked_bounds()?;
        trace!(%bounds, "computed unmasked bounds");
        self.unmasked_bounds = Some(bounds);
        Ok(bounds)
    }

    /// The cached unmasked bounds from the last successful computation
    pub fn unmasked_bounds(&self) -> Result<Bounds, Error> {
        self.unmasked_bounds.ok_or(Error::BoundsNotComputed)
    }

    /// Install unmasked bounds a caller already knows, e.g. computed host-side
    ///
    /// The supplied rectangle must lie within the mask extent and be exactly
    /// what [`Self::compute_unmasked_bounds`] would produce. On rejection the
    /// previously cached value is left unchanged.
    pub fn set_unmasked_bounds(&mut self, bounds: Bounds) -> Result<(), Error> {
        let extent = Bounds::of_extent(self.width, self.height);
        if !extent.contains(bounds.upper_left()) || !extent.contains(bounds.lower_right()) {
            return Err(Error::BoundsValidation { supplied: bounds });
        }

        if self.scan_unmasked_bounds()? != bounds {
            return Err(Error::BoundsValidation { supplied: bounds });
        }

        self.unmasked_bounds = Some(bounds);
        Ok(())
    }

    /// A mask of the same dimensions with every byte set to `value`
    pub fn get_initialized_copy(&self, value: u8) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: vec![value; self.data.len()],
            unmasked_bounds: None,
        }
    }

    /// A mask of the same dimensions that is everywhere unmasked
    ///
    /// The everywhere masked counterpart is obtained by calling
    /// [`Self::invert`] on the result.
    pub fn get_unmasked_copy(&self) -> Self {
        self.get_initialized_copy(Self::TOTALLY_UNMASKED)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    fn mask(width: usize, bytes: &[u8]) -> PixmapMask {
        PixmapMask::new(width, bytes.to_vec(), None).unwrap()
    }

    quickcheck! {
        fn test_set_and_get(x: u8, y: u8, value: u8) -> TestResult {
            let mut mask = mask(16, &[0u8; 256]);
            let coord = Coord::new(x as i32, y as i32);
            match mask.set(coord, value) {
                Err(_) => TestResult::discard(),
                Ok(()) => TestResult::from_bool(mask.get(coord).unwrap() == value),
            }
        }

        fn test_invert_is_self_inverse(bytes: Vec<u8>) -> TestResult {
            if bytes.is_empty() {
                return TestResult::discard();
            }
            // single row, any byte content
            let mut mask = mask(bytes.len(), &bytes);
            mask.invert();
            mask.invert();
            TestResult::from_bool(mask.as_bytes() == &bytes[..])
        }
    }

    #[test]
    fn test_zero_width_is_rejected() {
        assert_eq!(
            PixmapMask::new(0, vec![0; 4], None).unwrap_err(),
            Error::InvalidSize { width: 0, height: 0 }
        );
    }

    #[test]
    fn test_height_mismatch_is_rejected() {
        assert_eq!(
            PixmapMask::new(2, vec![0; 4], Some(3)).unwrap_err(),
            Error::ShapeMismatch {
                expected: 6,
                actual: 4
            }
        );
        assert!(PixmapMask::new(2, vec![0; 4], Some(2)).is_ok());
    }

    #[test]
    fn test_ragged_initializer_is_rejected() {
        assert_eq!(
            PixmapMask::new(3, vec![0; 4], None).unwrap_err(),
            Error::ShapeMismatch {
                expected: 3,
                actual: 4
            }
        );
    }

    #[test]
    fn test_out_of_extent_coordinates_are_rejected() {
        let mask = mask(2, &[0, 0, 0, 0]);
        assert!(mask.get(Coord::new(-1, 0)).is_err());
        assert!(mask.get(Coord::new(0, -1)).is_err());
        assert!(mask.get(Coord::new(2, 0)).is_err());
        assert!(mask.get(Coord::new(0, 2)).is_err());
        assert!(mask.get(Coord::new(1, 1)).is_ok());
    }

    #[test]
    fn test_total_mask() {
        assert!(mask(2, &[0, 0, 0, 0]).is_total_mask());
        assert!(!mask(2, &[0, 0, 1, 0]).is_total_mask());
    }

    #[test]
    fn test_masking_predicates() {
        let total = mask(2, &[0, 0, 0, 0]);
        assert!(total.is_totally_masked(Coord::new(0, 0)).unwrap());
        assert!(!total.is_totally_unmasked(Coord::new(0, 0)).unwrap());
        assert!(!total.is_somewhat_selected(Coord::new(0, 0)).unwrap());

        let mut inverted = total.clone();
        inverted.invert();
        assert!(!inverted.is_total_mask());
        assert!(inverted.is_totally_unmasked(Coord::new(0, 0)).unwrap());
        assert!(inverted.is_totally_selected(Coord::new(0, 0)).unwrap());

        // a value of 1 is partially masked and somewhat selected
        let mut partial = total.clone();
        partial.set(Coord::new(0, 0), 1).unwrap();
        assert!(!partial.is_totally_masked(Coord::new(0, 0)).unwrap());
        assert!(partial.is_somewhat_unmasked(Coord::new(0, 0)).unwrap());
        assert!(partial.is_somewhat_selected(Coord::new(0, 0)).unwrap());
        assert!(!partial.is_somewhat_selected(Coord::new(1, 1)).unwrap());
    }

    #[test]
    fn test_unmasked_bounds_of_single_pixel() {
        let mut mask = mask(3, &[0, 0, 0, 0, 255, 0]);
        let bounds = mask.compute_unmasked_bounds().unwrap();
        assert_eq!(bounds, Bounds::new(1, 1, 1, 1).unwrap());
        assert_eq!(mask.unmasked_bounds().unwrap(), bounds);
    }

    #[test]
    fn test_unmasked_bounds_after_invert() {
        let mut mask = mask(3, &[0, 0, 0, 0, 255, 0]);
        mask.invert();
        // everything except the formerly unmasked pixel is now unmasked
        assert_eq!(
            mask.compute_unmasked_bounds().unwrap(),
            Bounds::new(0, 0, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_invert_leaves_cached_bounds_stale() {
        let mut mask = mask(3, &[0, 0, 0, 0, 255, 0]);
        let before = mask.compute_unmasked_bounds().unwrap();
        mask.invert();
        // the cache still answers with the pre-invert rectangle
        assert_eq!(mask.unmasked_bounds().unwrap(), before);
    }

    #[test]
    fn test_total_mask_has_no_bounds() {
        let mut mask = mask(2, &[0, 0, 0, 0]);
        assert_eq!(
            mask.compute_unmasked_bounds(),
            Err(Error::TotalMaskHasNoBounds)
        );
        assert_eq!(mask.unmasked_bounds(), Err(Error::BoundsNotComputed));
    }

    #[test]
    fn test_set_unmasked_bounds_accepts_the_true_rectangle() {
        let mut mask = mask(3, &[0, 0, 0, 0, 255, 0]);
        mask.set_unmasked_bounds(Bounds::new(1, 1, 1, 1).unwrap())
            .unwrap();
        assert_eq!(
            mask.unmasked_bounds().unwrap(),
            Bounds::new(1, 1, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_set_unmasked_bounds_rejects_mismatch_and_keeps_cache() {
        let mut mask = mask(3, &[0, 0, 0, 0, 255, 0]);
        let computed = mask.compute_unmasked_bounds().unwrap();

        let wrong = Bounds::new(0, 0, 1, 1).unwrap();
        assert_eq!(
            mask.set_unmasked_bounds(wrong),
            Err(Error::BoundsValidation { supplied: wrong })
        );

        let outside = Bounds::new(0, 0, 5, 5).unwrap();
        assert_eq!(
            mask.set_unmasked_bounds(outside),
            Err(Error::BoundsValidation { supplied: outside })
        );

        // the earlier computation is still cached
        assert_eq!(mask.unmasked_bounds().unwrap(), computed);
    }

    #[test]
    fn test_initialized_copies() {
        let original = mask(2, &[0, 10, 20, 30]);
        let unmasked = original.get_unmasked_copy();
        assert!(unmasked.as_bytes().iter().all(|&v| v == 255));
        assert_eq!(unmasked.width(), original.width());
        assert_eq!(unmasked.height(), original.height());

        let mut masked = original.get_unmasked_copy();
        masked.invert();
        assert!(masked.is_total_mask());
    }

    #[test]
    fn test_copy_is_independent() {
        let original = mask(2, &[0, 0, 0, 0]);
        let mut copy = original.clone();
        copy.set(Coord::new(0, 0), 255).unwrap();
        assert!(original.is_total_mask());
        assert!(!copy.is_total_mask());
    }
}
