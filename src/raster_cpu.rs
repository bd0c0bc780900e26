use crate::backend::{DrawTarget, RenderBackend};
use crate::error::{BendayError, BendayResult};
use crate::frame::{FrameRgba, Rgba8};
use kurbo::Point;

/// CPU reference backend: surfaces are plain RGBA8 buffers in memory.
#[derive(Debug, Default)]
pub struct CpuBackend;

impl CpuBackend {
    pub fn new() -> Self {
        Self
    }
}

impl RenderBackend for CpuBackend {
    fn create_surface(&mut self, width: u32, height: u32) -> BendayResult<Box<dyn DrawTarget>> {
        Ok(Box::new(CpuSurface::new(width, height)?))
    }
}

#[derive(Clone, Copy, Debug)]
struct CircleClip {
    center: Point,
    radius: f64,
}

impl CircleClip {
    fn contains(&self, p: Point) -> bool {
        self.center.distance_squared(p) <= self.radius * self.radius
    }
}

/// A [`DrawTarget`] rasterizing into an owned [`FrameRgba`].
///
/// Pixel coverage is binary: a pixel belongs to a circle when its center lies
/// within the radius. No anti-aliasing; the thresholder collapses everything
/// to two colors anyway.
#[derive(Clone, Debug)]
pub struct CpuSurface {
    frame: FrameRgba,
    clip: Option<CircleClip>,
}

impl CpuSurface {
    pub fn new(width: u32, height: u32) -> BendayResult<Self> {
        Ok(Self {
            frame: FrameRgba::new(width, height)?,
            clip: None,
        })
    }

    /// Borrow the backing frame.
    pub fn frame(&self) -> &FrameRgba {
        &self.frame
    }

    fn clipped_out(&self, x: u32, y: u32) -> bool {
        match self.clip {
            Some(c) => !c.contains(pixel_center(x, y)),
            None => false,
        }
    }
}

fn pixel_center(x: u32, y: u32) -> Point {
    Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5)
}

impl DrawTarget for CpuSurface {
    fn width(&self) -> u32 {
        self.frame.width()
    }

    fn height(&self) -> u32 {
        self.frame.height()
    }

    fn clear(&mut self, color: Rgba8) {
        self.frame.fill(color);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        if !radius.is_finite() || radius <= 0.0 {
            return;
        }

        let x0 = (center.x - radius).floor().max(0.0) as u32;
        let y0 = (center.y - radius).floor().max(0.0) as u32;
        let x1 = ((center.x + radius).ceil().max(0.0) as u32).min(self.frame.width());
        let y1 = ((center.y + radius).ceil().max(0.0) as u32).min(self.frame.height());

        let r2 = radius * radius;
        for y in y0..y1 {
            for x in x0..x1 {
                let p = pixel_center(x, y);
                if center.distance_squared(p) > r2 || self.clipped_out(x, y) {
                    continue;
                }
                self.frame.put_pixel(x, y, color);
            }
        }
    }

    fn read_pixels(&self) -> FrameRgba {
        self.frame.clone()
    }

    fn write_pixels(&mut self, frame: &FrameRgba) -> BendayResult<()> {
        if frame.width() != self.frame.width() || frame.height() != self.frame.height() {
            return Err(BendayError::backend(
                "write_pixels requires matching surface dimensions",
            ));
        }
        self.frame = frame.clone();
        Ok(())
    }

    fn draw_frame_scaled(&mut self, frame: &FrameRgba, x: f64, y: f64, w: f64, h: f64) {
        if frame.width() == 0 || frame.height() == 0 || w <= 0.0 || h <= 0.0 {
            return;
        }

        let tx0 = x.floor().max(0.0) as u32;
        let ty0 = y.floor().max(0.0) as u32;
        let tx1 = ((x + w).ceil().max(0.0) as u32).min(self.frame.width());
        let ty1 = ((y + h).ceil().max(0.0) as u32).min(self.frame.height());

        let sx_step = f64::from(frame.width()) / w;
        let sy_step = f64::from(frame.height()) / h;

        for ty in ty0..ty1 {
            let sy = (((f64::from(ty) + 0.5 - y) * sy_step) as u32).min(frame.height() - 1);
            for tx in tx0..tx1 {
                if self.clipped_out(tx, ty) {
                    continue;
                }
                let sx = (((f64::from(tx) + 0.5 - x) * sx_step) as u32).min(frame.width() - 1);
                if let Some(px) = frame.pixel(sx, sy) {
                    self.frame.put_pixel(tx, ty, px);
                }
            }
        }
    }

    fn set_circle_clip(&mut self, center: Point, radius: f64) {
        self.clip = Some(CircleClip { center, radius });
    }

    fn clear_clip(&mut self) {
        self.clip = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_circle_covers_center_and_respects_radius() {
        let mut s = CpuSurface::new(9, 9).unwrap();
        s.fill_circle(Point::new(4.5, 4.5), 2.0, [255, 255, 255, 255]);

        assert_eq!(s.frame().pixel(4, 4), Some([255, 255, 255, 255]));
        // Corner of the bounding box stays untouched.
        assert_eq!(s.frame().pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(s.frame().pixel(8, 8), Some([0, 0, 0, 255]));
    }

    #[test]
    fn subpixel_circle_draws_nothing() {
        let mut s = CpuSurface::new(4, 4).unwrap();
        s.fill_circle(Point::new(2.0, 2.0), 0.1, [255, 255, 255, 255]);
        assert!(s.frame().data().chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
    }

    #[test]
    fn circle_clips_to_surface_bounds() {
        let mut s = CpuSurface::new(4, 4).unwrap();
        // Mostly off-surface; must not panic and must paint the overlap.
        s.fill_circle(Point::new(0.0, 0.0), 3.0, [1, 2, 3, 255]);
        assert_eq!(s.frame().pixel(0, 0), Some([1, 2, 3, 255]));
    }

    #[test]
    fn write_pixels_rejects_dimension_mismatch() {
        let mut s = CpuSurface::new(4, 4).unwrap();
        let other = FrameRgba::new(3, 4).unwrap();
        assert!(s.write_pixels(&other).is_err());
    }

    #[test]
    fn scaled_blit_fills_target_rect() {
        let mut src = FrameRgba::new(2, 1).unwrap();
        src.put_pixel(0, 0, [10, 0, 0, 255]);
        src.put_pixel(1, 0, [20, 0, 0, 255]);

        let mut s = CpuSurface::new(4, 2).unwrap();
        s.draw_frame_scaled(&src, 0.0, 0.0, 4.0, 2.0);

        // Left half sources pixel 0, right half pixel 1.
        assert_eq!(s.frame().pixel(0, 0), Some([10, 0, 0, 255]));
        assert_eq!(s.frame().pixel(1, 1), Some([10, 0, 0, 255]));
        assert_eq!(s.frame().pixel(2, 0), Some([20, 0, 0, 255]));
        assert_eq!(s.frame().pixel(3, 1), Some([20, 0, 0, 255]));
    }

    #[test]
    fn clip_restricts_blit_to_disk() {
        let mut src = FrameRgba::new(1, 1).unwrap();
        src.put_pixel(0, 0, [200, 0, 0, 255]);

        let mut s = CpuSurface::new(10, 10).unwrap();
        s.set_circle_clip(Point::new(5.0, 5.0), 2.0);
        s.draw_frame_scaled(&src, 0.0, 0.0, 10.0, 10.0);
        s.clear_clip();

        assert_eq!(s.frame().pixel(5, 5), Some([200, 0, 0, 255]));
        assert_eq!(s.frame().pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(s.frame().pixel(9, 5), Some([0, 0, 0, 255]));

        // After clear_clip the blit reaches everywhere again.
        s.draw_frame_scaled(&src, 0.0, 0.0, 10.0, 10.0);
        assert_eq!(s.frame().pixel(0, 0), Some([200, 0, 0, 255]));
    }

    #[test]
    fn set_circle_clip_replaces_previous_clip() {
        let mut src = FrameRgba::new(1, 1).unwrap();
        src.put_pixel(0, 0, [9, 9, 9, 255]);

        let mut s = CpuSurface::new(8, 8).unwrap();
        s.set_circle_clip(Point::new(1.0, 1.0), 1.0);
        s.set_circle_clip(Point::new(6.0, 6.0), 1.5);
        s.draw_frame_scaled(&src, 0.0, 0.0, 8.0, 8.0);

        assert_eq!(s.frame().pixel(6, 6), Some([9, 9, 9, 255]));
        assert_eq!(s.frame().pixel(1, 1), Some([0, 0, 0, 255]));
    }
}
