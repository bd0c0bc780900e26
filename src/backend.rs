use crate::error::BendayResult;
use crate::frame::{FrameRgba, Rgba8};
use kurbo::Point;

/// A playing, looping video exposed as per-frame pixel snapshots.
///
/// Decode and playback timing live behind this trait; the pipeline reads at
/// most one snapshot per tick and tolerates stale or duplicate frames.
pub trait VideoStream {
    /// Whether the first frame has been decoded and playback can begin.
    fn ready(&self) -> bool;

    /// Begin looping playback. Called once, on the effect's started
    /// transition.
    fn play_looped(&mut self) -> BendayResult<()>;

    /// Native frame dimensions in pixels.
    fn size(&self) -> (u32, u32);

    /// The latest decoded frame.
    ///
    /// Takes `&mut self` so implementations may advance playback per read.
    fn pixel_snapshot(&mut self) -> BendayResult<&FrameRgba>;
}

/// A 2D surface the effect composes onto.
///
/// These are the only drawing primitives the pipeline needs: clear, filled
/// circles, pixel read-back/write-back, a stretch blit, and a single circular
/// clip region gating subsequent blits.
pub trait DrawTarget {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill the whole surface with `color`, ignoring any clip.
    fn clear(&mut self, color: Rgba8);

    /// Draw an opaque filled circle. Coordinates are fractional pixels in the
    /// surface's own space.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8);

    /// Snapshot the surface's pixels.
    ///
    /// This is the synchronization point between drawing and per-pixel
    /// passes: all prior draws are visible in the returned frame.
    fn read_pixels(&self) -> FrameRgba;

    /// Replace the surface's pixels wholesale. Dimensions must match.
    fn write_pixels(&mut self, frame: &FrameRgba) -> BendayResult<()>;

    /// Stretch-blit `frame` into the axis-aligned rectangle `(x, y, w, h)`,
    /// nearest-neighbor, honoring the active clip.
    fn draw_frame_scaled(&mut self, frame: &FrameRgba, x: f64, y: f64, w: f64, h: f64);

    /// Restrict subsequent blits to a disk. Replaces any previous clip.
    fn set_circle_clip(&mut self, center: Point, radius: f64);

    /// Remove the active clip.
    fn clear_clip(&mut self);
}

/// Factory for off-screen [`DrawTarget`] surfaces.
pub trait RenderBackend {
    /// Allocate a surface of the given pixel dimensions.
    fn create_surface(&mut self, width: u32, height: u32) -> BendayResult<Box<dyn DrawTarget>>;
}

/// Available backend kinds.
///
/// - `Cpu` is always available.
#[derive(Clone, Copy, Debug)]
pub enum BackendKind {
    /// Pure-CPU rasterizer over owned RGBA8 buffers.
    Cpu,
}

/// Create a rendering backend implementation.
pub fn create_backend(kind: BackendKind) -> BendayResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::raster_cpu::CpuBackend::new())),
    }
}
