use crate::backend::DrawTarget;
use crate::config::EffectConfig;
use crate::error::BendayResult;
use crate::frame::{FrameRgba, Rgba8};
use crate::sampler::grid_samples;
use kurbo::Point;

const BLOB_BACKGROUND: Rgba8 = [0, 0, 0, 255];
const BLOB_DOT: Rgba8 = [255, 255, 255, 255];

/// Map a sample's brightness to a dot radius.
///
/// Samples below the dark cutoff draw no dot at all. Above it, dimmer samples
/// get larger dots: the weight `1 - brightness/255` maps linearly onto
/// `[dot_radius_min, dot_radius_max]`, clamped. Non-increasing in brightness.
pub fn dot_radius(brightness: f64, cfg: &EffectConfig) -> Option<f64> {
    if brightness < cfg.dark_cutoff {
        return None;
    }
    let weight = 1.0 - brightness / 255.0;
    let radius = cfg.dot_radius_min + weight * (cfg.dot_radius_max - cfg.dot_radius_min);
    Some(radius.clamp(cfg.dot_radius_min, cfg.dot_radius_max))
}

/// Rasterize the halftone dot field for one snapshot.
///
/// Clears `target` to black, then draws one opaque white dot per grid sample
/// that clears the dark cutoff. Fully rewrites the target; the thresholder
/// reads it back afterwards.
pub fn render_blobs(
    snapshot: &FrameRgba,
    target: &mut dyn DrawTarget,
    cfg: &EffectConfig,
) -> BendayResult<()> {
    target.clear(BLOB_BACKGROUND);
    for sample in grid_samples(snapshot, cfg.grid_spacing)? {
        if let Some(radius) = dot_radius(sample.brightness, cfg) {
            target.fill_circle(
                Point::new(f64::from(sample.x), f64::from(sample.y)),
                radius,
                BLOB_DOT,
            );
        }
    }
    Ok(())
}
