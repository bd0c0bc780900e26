use crate::error::{BendayError, BendayResult};

pub use kurbo::{Point, Vec2};

/// Fixed processing resolution in integer pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProcessExtent {
    /// Width in processing pixels.
    pub width: u32,
    /// Height in processing pixels.
    pub height: u32,
}

impl ProcessExtent {
    /// Create a validated, non-degenerate extent.
    pub fn new(width: u32, height: u32) -> BendayResult<Self> {
        if width == 0 || height == 0 {
            return Err(BendayError::validation(
                "ProcessExtent dimensions must be non-zero",
            ));
        }
        Ok(Self { width, height })
    }
}

/// Display surface dimensions in fractional display pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DisplayExtent {
    /// Width in display pixels.
    pub width: f64,
    /// Height in display pixels.
    pub height: f64,
}

impl DisplayExtent {
    /// Size a surface of the given aspect ratio to cover a container.
    ///
    /// Height-fit first (`height = container_height`); when the resulting
    /// width would leave the container uncovered, width-fit instead. The
    /// surface always covers the container, overflowing on one axis at most.
    pub fn fit(container_width: f64, container_height: f64, aspect: f64) -> BendayResult<Self> {
        if !aspect.is_finite() || aspect <= 0.0 {
            return Err(BendayError::validation("aspect ratio must be > 0"));
        }
        if !container_width.is_finite()
            || !container_height.is_finite()
            || container_width < 0.0
            || container_height < 0.0
        {
            return Err(BendayError::validation(
                "container dimensions must be finite and >= 0",
            ));
        }

        let mut height = container_height;
        let mut width = height * aspect;
        if width < container_width {
            width = container_width;
            height = width / aspect;
        }
        Ok(Self { width, height })
    }

    /// Whether `p` lies strictly inside the surface.
    ///
    /// Points exactly on the boundary count as outside.
    pub fn contains_strict(&self, p: Point) -> bool {
        p.x > 0.0 && p.x < self.width && p.y > 0.0 && p.y < self.height
    }
}

/// Round `value` to the nearest multiple of `grid`.
///
/// Idempotent for any `grid > 0`.
pub fn snap_to_grid(value: f64, grid: f64) -> f64 {
    (value / grid).round() * grid
}

/// The bridge between processing space and display space.
///
/// Carries the one conversion factor (`display_width / process_width`) so
/// that processing-space constants never leak into display space unscaled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplaySpace {
    /// Current display surface size.
    pub extent: DisplayExtent,
    /// Multiplier taking processing pixels to display pixels.
    pub scale: f64,
    /// Sample grid spacing expressed in display pixels.
    pub grid: f64,
}

impl DisplaySpace {
    /// Derive the display space for a surface over a processing resolution.
    pub fn new(extent: DisplayExtent, process: ProcessExtent, grid_spacing: u32) -> Self {
        let scale = extent.width / f64::from(process.width);
        Self {
            extent,
            scale,
            grid: f64::from(grid_spacing) * scale,
        }
    }

    /// Snap a display-space point to the display grid, each axis
    /// independently.
    pub fn snap_point(&self, p: Point) -> Point {
        Point::new(snap_to_grid(p.x, self.grid), snap_to_grid(p.y, self.grid))
    }
}
