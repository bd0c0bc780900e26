use crate::backend::{DrawTarget, RenderBackend, VideoStream};
use crate::blob::render_blobs;
use crate::config::EffectConfig;
use crate::error::BendayResult;
use crate::frame::Rgba8;
use crate::reveal::{PointerState, RevealGeometry, draw_reveal};
use crate::space::{DisplayExtent, DisplaySpace, Point, ProcessExtent};
use crate::threshold::apply_threshold;

const CLEAR_WHITE: Rgba8 = [255, 255, 255, 255];

/// Owns all per-session effect state and drives the frame pipeline.
///
/// Two states: not started (ticks clear the display and do nothing else) and
/// running (every tick executes sample → blobs → threshold → stretch blit →
/// reveal, unconditionally). The transition fires once, when the primary
/// stream first reports readiness, and never reverses within a session.
pub struct EffectSession {
    cfg: EffectConfig,
    process: ProcessExtent,
    space: DisplaySpace,
    pointer: PointerState,
    offscreen: Box<dyn DrawTarget>,
    started: bool,
}

impl EffectSession {
    /// Create a session sized to a container, with its off-screen processing
    /// surface allocated from `backend`.
    pub fn new(
        cfg: EffectConfig,
        backend: &mut dyn RenderBackend,
        container_width: f64,
        container_height: f64,
    ) -> BendayResult<Self> {
        cfg.validate()?;
        let process = ProcessExtent::new(cfg.process_width, cfg.process_height)?;
        let extent = DisplayExtent::fit(container_width, container_height, cfg.aspect_ratio)?;
        let space = DisplaySpace::new(extent, process, cfg.grid_spacing);
        let offscreen = backend.create_surface(process.width, process.height)?;

        Ok(Self {
            cfg,
            process,
            space,
            pointer: PointerState::default(),
            offscreen,
            started: false,
        })
    }

    pub fn config(&self) -> &EffectConfig {
        &self.cfg
    }

    /// Current display surface size.
    pub fn display(&self) -> DisplayExtent {
        self.space.extent
    }

    /// Whether the started transition has fired.
    pub fn started(&self) -> bool {
        self.started
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Recompute the display surface for a new container size. Takes effect
    /// immediately, not on the next tick.
    pub fn handle_resize(&mut self, container_width: f64, container_height: f64) -> BendayResult<()> {
        let extent = DisplayExtent::fit(container_width, container_height, self.cfg.aspect_ratio)?;
        self.space = DisplaySpace::new(extent, self.process, self.cfg.grid_spacing);
        tracing::debug!(
            width = self.space.extent.width,
            height = self.space.extent.height,
            "display surface resized"
        );
        Ok(())
    }

    /// Record a pointer-move event at raw display coordinates; both axes snap
    /// to the display grid as one update.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = PointerState::moved_to(Point::new(x, y), &self.space);
    }

    /// Record a pointer-leave event.
    pub fn pointer_left(&mut self) {
        self.pointer = PointerState::OffSurface;
    }

    /// Run one frame.
    ///
    /// `display` is the presentation surface; `primary` feeds the halftone
    /// pipeline and `reveal` shows through the lens cutout.
    #[tracing::instrument(skip_all)]
    pub fn tick(
        &mut self,
        primary: &mut dyn VideoStream,
        reveal: &mut dyn VideoStream,
        display: &mut dyn DrawTarget,
    ) -> BendayResult<()> {
        display.clear(CLEAR_WHITE);

        if !self.started {
            if !primary.ready() {
                return Ok(());
            }
            primary.play_looped()?;
            reveal.play_looped()?;
            self.started = true;
            tracing::info!("primary stream ready, effect running");
        }

        let snapshot = primary.pixel_snapshot()?;
        render_blobs(snapshot, self.offscreen.as_mut(), &self.cfg)?;

        // Synchronization point: blob draws must be flushed to pixel data
        // before the threshold pass rewrites it.
        let mut pixels = self.offscreen.read_pixels();
        apply_threshold(&mut pixels, self.cfg.brightness_threshold, self.cfg.palette);
        self.offscreen.write_pixels(&pixels)?;

        let extent = self.space.extent;
        display.draw_frame_scaled(&pixels, 0.0, 0.0, extent.width, extent.height);

        if let PointerState::At(p) = self.pointer
            && extent.contains_strict(p)
        {
            let geometry = RevealGeometry::at(p, self.cfg.cursor_radius, self.space.grid);
            let frame = reveal.pixel_snapshot()?;
            draw_reveal(display, frame, &geometry, extent, self.cfg.ring_dot_radius);
        }

        Ok(())
    }
}
