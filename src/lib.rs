//! Benday renders a real-time halftone "blob" stylization of a looping video
//! feed, with an interactive grid-snapped circular lens that reveals an
//! unprocessed second stream around the pointer.
//!
//! The pipeline runs at a fixed processing resolution, decoupled from the
//! display surface: brightness is sampled on a coarse grid, mapped to dot
//! radii, rasterized off-screen, collapsed to a two-color palette, then
//! stretch-blitted to the display. Video decode, windowing, and input capture
//! stay behind the [`backend`] traits; a pure-CPU reference backend ships in
//! [`raster_cpu`].
#![forbid(unsafe_code)]

pub mod backend;
pub mod blob;
pub mod config;
pub mod error;
pub mod frame;
pub mod media;
pub mod raster_cpu;
pub mod reveal;
pub mod sampler;
pub mod session;
pub mod space;
pub mod threshold;

pub use backend::{BackendKind, DrawTarget, RenderBackend, VideoStream, create_backend};
pub use config::EffectConfig;
pub use error::{BendayError, BendayResult};
pub use frame::{FrameRgba, Rgba8};
pub use media::ImageSequenceStream;
pub use raster_cpu::{CpuBackend, CpuSurface};
pub use reveal::{PointerState, RevealGeometry};
pub use session::EffectSession;
pub use space::{DisplayExtent, DisplaySpace, Point, ProcessExtent, Vec2, snap_to_grid};
pub use threshold::Palette;
