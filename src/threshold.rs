use crate::frame::FrameRgba;

/// The two-color palette the thresholded buffer collapses into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Dark color, applied below the threshold.
    pub ink: [u8; 3],
    /// Light color, applied at or above the threshold.
    pub paper: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ink: [35, 31, 32],
            paper: [255, 255, 255],
        }
    }
}

/// Collapse a frame to the two palette colors, in place.
///
/// The blob pass draws pure white dots on black, so the buffer is monochrome
/// by construction and classification inspects the red channel only:
/// `r < threshold` maps to ink, everything else to paper. Alpha is untouched.
/// After this pass every pixel's RGB is exactly `palette.ink` or
/// `palette.paper`.
pub fn apply_threshold(frame: &mut FrameRgba, threshold: u8, palette: Palette) {
    for px in frame.data_mut().chunks_exact_mut(4) {
        let rgb = if px[0] < threshold {
            palette.ink
        } else {
            palette.paper
        };
        px[..3].copy_from_slice(&rgb);
    }
}
