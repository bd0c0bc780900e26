use crate::error::{BendayError, BendayResult};
use crate::frame::FrameRgba;

/// One brightness sample on the processing grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Sample x in processing pixels (a multiple of the grid spacing).
    pub x: u32,
    /// Sample y in processing pixels (a multiple of the grid spacing).
    pub y: u32,
    /// Mean of the R, G, B channels at the pixel, in 0..=255.
    pub brightness: f64,
}

/// Walk a frame on a fixed-spacing grid, yielding per-point brightness.
///
/// Columns advance in the outer loop and rows in the inner loop, matching the
/// blob draw order; downstream stages only depend on set membership. Sampling
/// is grid-aligned with no interpolation, and the iterator is recreated from
/// the latest snapshot every frame.
pub fn grid_samples(frame: &FrameRgba, spacing: u32) -> BendayResult<GridSamples<'_>> {
    if spacing == 0 {
        return Err(BendayError::validation("grid spacing must be > 0"));
    }
    Ok(GridSamples {
        frame,
        spacing,
        x: 0,
        y: 0,
    })
}

/// Iterator returned by [`grid_samples`].
#[derive(Clone, Debug)]
pub struct GridSamples<'a> {
    frame: &'a FrameRgba,
    spacing: u32,
    x: u32,
    y: u32,
}

impl Iterator for GridSamples<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.x >= self.frame.width() {
            return None;
        }

        let (x, y) = (self.x, self.y);
        let px = self.frame.pixel(x, y)?;
        let brightness =
            (f64::from(px[0]) + f64::from(px[1]) + f64::from(px[2])) / 3.0;

        self.y += self.spacing;
        if self.y >= self.frame.height() {
            self.y = 0;
            self.x += self.spacing;
        }

        Some(Sample { x, y, brightness })
    }
}
