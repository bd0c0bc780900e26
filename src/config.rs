use crate::error::{BendayError, BendayResult};
use crate::threshold::Palette;

/// All tunables of the effect.
///
/// Defaults reproduce the original look. Processing-space quantities
/// (`process_width`, `process_height`, `grid_spacing`) are integer pixels at
/// the fixed processing resolution; display-space quantities (`cursor_radius`,
/// `ring_dot_radius`) are fractional display pixels. The two spaces only meet
/// through [`crate::space::DisplaySpace`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Red-channel cutoff separating ink from paper after the blob pass.
    pub brightness_threshold: u8,
    /// Fixed processing resolution width in pixels.
    pub process_width: u32,
    /// Fixed processing resolution height in pixels.
    pub process_height: u32,
    /// Distance between brightness sample points, in processing pixels.
    pub grid_spacing: u32,
    /// Nominal reveal lens radius in display pixels, snapped before use.
    pub cursor_radius: f64,
    /// Samples darker than this draw no dot at all.
    pub dark_cutoff: f64,
    /// Smallest dot radius, mapped from the brightest samples.
    pub dot_radius_min: f64,
    /// Largest dot radius, mapped from the dimmest samples.
    pub dot_radius_max: f64,
    /// Radius of each dot on the reveal ring, in display pixels (unscaled).
    pub ring_dot_radius: f64,
    /// Two-color output palette.
    pub palette: Palette,
    /// Display surface aspect ratio (width over height).
    pub aspect_ratio: f64,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            brightness_threshold: 10,
            process_width: 1280,
            process_height: 720,
            grid_spacing: 8,
            cursor_radius: 100.0,
            dark_cutoff: 30.0,
            dot_radius_min: 0.1,
            dot_radius_max: 5.0,
            ring_dot_radius: 5.0,
            palette: Palette::default(),
            aspect_ratio: 16.0 / 9.0,
        }
    }
}

impl EffectConfig {
    /// Check internal consistency; every public entry point validates first.
    pub fn validate(&self) -> BendayResult<()> {
        if self.process_width == 0 || self.process_height == 0 {
            return Err(BendayError::validation(
                "process dimensions must be non-zero",
            ));
        }
        if self.grid_spacing == 0 {
            return Err(BendayError::validation("grid_spacing must be > 0"));
        }
        if !self.cursor_radius.is_finite() || self.cursor_radius < 0.0 {
            return Err(BendayError::validation("cursor_radius must be >= 0"));
        }
        if !(0.0..=255.0).contains(&self.dark_cutoff) {
            return Err(BendayError::validation("dark_cutoff must be in 0..=255"));
        }
        if !self.dot_radius_min.is_finite()
            || !self.dot_radius_max.is_finite()
            || self.dot_radius_min < 0.0
            || self.dot_radius_min > self.dot_radius_max
        {
            return Err(BendayError::validation(
                "dot radius range must satisfy 0 <= min <= max",
            ));
        }
        if !self.ring_dot_radius.is_finite() || self.ring_dot_radius < 0.0 {
            return Err(BendayError::validation("ring_dot_radius must be >= 0"));
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(BendayError::validation("aspect_ratio must be > 0"));
        }
        Ok(())
    }

    /// Parse a config from JSON; absent fields take their defaults.
    pub fn from_json_str(s: &str) -> BendayResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| BendayError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> BendayResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BendayError::serde(e.to_string()))
    }
}
