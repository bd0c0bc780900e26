use crate::backend::DrawTarget;
use crate::frame::FrameRgba;
use crate::space::{DisplayExtent, DisplaySpace, snap_to_grid};
use kurbo::{Point, Vec2};

/// Last known pointer position, in snapped display coordinates.
///
/// Starts off-surface and returns there on pointer-leave. Both axes are
/// updated together; the frame loop only ever observes a consistent pair.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum PointerState {
    /// Pointer has not entered the surface, or has left it.
    #[default]
    OffSurface,
    /// Pointer at a grid-snapped display position.
    At(Point),
}

impl PointerState {
    /// Snap a raw display-space position onto the display grid.
    pub fn moved_to(raw: Point, space: &DisplaySpace) -> Self {
        Self::At(space.snap_point(raw))
    }
}

/// The reveal lens for one frame: a grid-snapped disk plus a dotted ring
/// approximating its boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealGeometry {
    /// Lens center (snapped pointer position).
    pub center: Point,
    /// Lens radius, snapped to the display grid.
    pub radius: f64,
    /// Ring dot centers, evenly spaced over `[0, 2π)`.
    pub ring: Vec<Point>,
}

impl RevealGeometry {
    /// Derive the lens geometry for a pointer position.
    ///
    /// The radius snaps to the display grid; the ring holds
    /// [`ring_dot_count`] dots.
    pub fn at(center: Point, cursor_radius: f64, display_grid: f64) -> Self {
        let radius = snap_to_grid(cursor_radius, display_grid);
        let num_dots = ring_dot_count(radius, display_grid);

        let ring = (0..num_dots)
            .map(|i| {
                let angle = (i as f64 / num_dots as f64) * std::f64::consts::TAU;
                center + Vec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect();

        Self {
            center,
            radius,
            ring,
        }
    }
}

/// Number of ring dots for a lens radius: `floor(circumference / grid)`.
pub fn ring_dot_count(radius: f64, display_grid: f64) -> usize {
    if display_grid <= 0.0 || radius <= 0.0 {
        return 0;
    }
    (std::f64::consts::TAU * radius / display_grid).floor() as usize
}

/// Composite the reveal video through the lens, on top of the blob layer.
///
/// One clipped stretch blit for the main disk, then one per ring dot at the
/// fixed (unscaled) dot radius. Each blit stretches the reveal frame to the
/// full display surface so the cutout lines up with the underlying video.
pub fn draw_reveal(
    target: &mut dyn DrawTarget,
    reveal_frame: &FrameRgba,
    geometry: &RevealGeometry,
    extent: DisplayExtent,
    ring_dot_radius: f64,
) {
    target.set_circle_clip(geometry.center, geometry.radius);
    target.draw_frame_scaled(reveal_frame, 0.0, 0.0, extent.width, extent.height);
    target.clear_clip();

    for &dot in &geometry.ring {
        target.set_circle_clip(dot, ring_dot_radius);
        target.draw_frame_scaled(reveal_frame, 0.0, 0.0, extent.width, extent.height);
        target.clear_clip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_count_is_floor_of_circumference_over_grid() {
        // r=96, grid=10: circumference ~603.2 -> 60 dots.
        assert_eq!(ring_dot_count(96.0, 10.0), 60);
        assert_eq!(ring_dot_count(0.0, 10.0), 0);
        assert_eq!(ring_dot_count(96.0, 0.0), 0);
    }

    #[test]
    fn ring_dots_sit_on_the_snapped_circle_evenly() {
        let center = Point::new(50.0, 40.0);
        let g = RevealGeometry::at(center, 100.0, 10.0);
        assert_eq!(g.radius, 100.0);
        assert_eq!(g.ring.len(), 62); // floor(2π*100 / 10)

        for dot in &g.ring {
            assert!((center.distance(*dot) - 100.0).abs() < 1e-9);
        }

        // Even angular spacing: consecutive dots subtend equal angles.
        let angle_of = |p: &Point| (p.y - center.y).atan2(p.x - center.x);
        let step = std::f64::consts::TAU / g.ring.len() as f64;
        let a0 = angle_of(&g.ring[0]);
        let a1 = angle_of(&g.ring[1]);
        assert!(((a1 - a0).rem_euclid(std::f64::consts::TAU) - step).abs() < 1e-9);
    }

    #[test]
    fn tiny_cursor_radius_snaps_to_empty_lens() {
        let g = RevealGeometry::at(Point::new(10.0, 10.0), 3.0, 10.0);
        assert_eq!(g.radius, 0.0);
        assert!(g.ring.is_empty());
    }

    #[test]
    fn pointer_moved_snaps_both_axes() {
        let space = DisplaySpace::new(
            DisplayExtent {
                width: 1280.0,
                height: 720.0,
            },
            crate::space::ProcessExtent::new(1280, 720).unwrap(),
            8,
        );
        let p = PointerState::moved_to(Point::new(13.0, 18.9), &space);
        assert_eq!(p, PointerState::At(Point::new(16.0, 16.0)));
    }

    #[test]
    fn default_pointer_is_off_surface() {
        assert_eq!(PointerState::default(), PointerState::OffSurface);
    }
}
