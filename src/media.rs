use crate::backend::VideoStream;
use crate::error::{BendayError, BendayResult};
use crate::frame::FrameRgba;
use std::path::Path;

/// A [`VideoStream`] backed by a looping sequence of image files.
///
/// Stands in for a real video decoder: frames are decoded up front with the
/// `image` crate and rescaled to the requested processing resolution. Until
/// [`VideoStream::play_looped`] is called the stream holds on its first
/// frame; afterwards every snapshot read advances one frame and wraps.
#[derive(Debug)]
pub struct ImageSequenceStream {
    frames: Vec<FrameRgba>,
    width: u32,
    height: u32,
    index: usize,
    looping: bool,
}

impl ImageSequenceStream {
    /// Decode `paths` in order, rescaling each frame to `width` x `height`.
    pub fn open<P: AsRef<Path>>(paths: &[P], width: u32, height: u32) -> BendayResult<Self> {
        if paths.is_empty() {
            return Err(BendayError::backend("image sequence has no frames"));
        }
        if width == 0 || height == 0 {
            return Err(BendayError::backend(
                "image sequence target dimensions must be non-zero",
            ));
        }

        let mut frames = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let img = image::open(path)
                .map_err(|e| {
                    BendayError::backend(format!("failed to decode {}: {e}", path.display()))
                })?
                .to_rgba8();
            let img = if img.dimensions() == (width, height) {
                img
            } else {
                image::imageops::resize(&img, width, height, image::imageops::FilterType::Triangle)
            };
            frames.push(FrameRgba::from(img));
        }

        tracing::debug!(
            frames = frames.len(),
            width,
            height,
            "image sequence loaded"
        );
        Ok(Self {
            frames,
            width,
            height,
            index: 0,
            looping: false,
        })
    }

    /// Number of frames in the sequence.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl VideoStream for ImageSequenceStream {
    fn ready(&self) -> bool {
        // All frames are decoded in `open`, so a constructed stream is ready.
        true
    }

    fn play_looped(&mut self) -> BendayResult<()> {
        self.looping = true;
        Ok(())
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn pixel_snapshot(&mut self) -> BendayResult<&FrameRgba> {
        let current = self.index;
        if self.looping {
            self.index = (self.index + 1) % self.frames.len();
        }
        Ok(&self.frames[current])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_test_png(dir: &Path, name: &str, fill: [u8; 4], w: u32, h: u32) -> std::path::PathBuf {
        let img = image::RgbaImage::from_pixel(w, h, image::Rgba(fill));
        let path = dir.join(name);
        img.save(&path).unwrap();
        path
    }

    fn temp_dir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("benday-media-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn open_rejects_empty_sequence() {
        let paths: &[&Path] = &[];
        assert!(ImageSequenceStream::open(paths, 8, 8).is_err());
    }

    #[test]
    fn open_rejects_missing_file() {
        let err = ImageSequenceStream::open(&["/nonexistent/frame.png"], 8, 8).unwrap_err();
        assert!(err.to_string().contains("backend error:"));
    }

    #[test]
    fn snapshot_holds_until_looping_then_wraps() {
        let dir = temp_dir("loop");
        let a = write_test_png(&dir, "a.png", [10, 0, 0, 255], 4, 4);
        let b = write_test_png(&dir, "b.png", [20, 0, 0, 255], 4, 4);

        let mut stream = ImageSequenceStream::open(&[a, b], 4, 4).unwrap();
        assert!(stream.ready());
        assert_eq!(stream.frame_count(), 2);

        // Not yet playing: repeated reads stay on the first frame.
        assert_eq!(stream.pixel_snapshot().unwrap().pixel(0, 0), Some([10, 0, 0, 255]));
        assert_eq!(stream.pixel_snapshot().unwrap().pixel(0, 0), Some([10, 0, 0, 255]));

        stream.play_looped().unwrap();
        assert_eq!(stream.pixel_snapshot().unwrap().pixel(0, 0), Some([10, 0, 0, 255]));
        assert_eq!(stream.pixel_snapshot().unwrap().pixel(0, 0), Some([20, 0, 0, 255]));
        // Wrapped back around.
        assert_eq!(stream.pixel_snapshot().unwrap().pixel(0, 0), Some([10, 0, 0, 255]));
    }

    #[test]
    fn frames_are_rescaled_to_processing_resolution() {
        let dir = temp_dir("scale");
        let a = write_test_png(&dir, "big.png", [30, 40, 50, 255], 16, 8);

        let mut stream = ImageSequenceStream::open(&[a], 4, 4).unwrap();
        assert_eq!(stream.size(), (4, 4));
        let frame = stream.pixel_snapshot().unwrap();
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 4);
        assert_eq!(frame.pixel(2, 2), Some([30, 40, 50, 255]));
    }
}
