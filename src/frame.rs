use crate::error::{BendayError, BendayResult};

/// RGBA8 color as stored in frame data.
pub type Rgba8 = [u8; 4];

/// A frame of RGBA8 pixels, tightly packed, row-major, top-to-bottom.
///
/// Used for video snapshots, the off-screen processing buffer, and pixel
/// read-backs. Contents carry no cross-frame state; the pipeline rewrites
/// its working frames in full every tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameRgba {
    /// Allocate a frame filled with opaque black.
    pub fn new(width: u32, height: u32) -> BendayResult<Self> {
        let len = byte_len(width, height)?;
        let mut data = vec![0u8; len];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap an existing RGBA8 byte buffer, validating its length.
    pub fn from_parts(width: u32, height: u32, data: Vec<u8>) -> BendayResult<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(BendayError::validation(
                "frame data must be width*height*4 bytes",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA8 bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Fill every pixel with `color`.
    pub fn fill(&mut self, color: Rgba8) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    /// Read the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize * self.width as usize) + x as usize) * 4;
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    /// Overwrite the pixel at `(x, y)`; out-of-bounds writes are dropped.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgba8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = ((y as usize * self.width as usize) + x as usize) * 4;
        self.data[i..i + 4].copy_from_slice(&color);
    }
}

impl From<image::RgbaImage> for FrameRgba {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

fn byte_len(width: u32, height: u32) -> BendayResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| BendayError::validation("frame size overflow"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_frame_is_opaque_black() {
        let f = FrameRgba::new(2, 2).unwrap();
        assert_eq!(f.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(f.pixel(1, 1), Some([0, 0, 0, 255]));
    }

    #[test]
    fn from_parts_rejects_wrong_length() {
        assert!(FrameRgba::from_parts(2, 2, vec![0u8; 15]).is_err());
        assert!(FrameRgba::from_parts(2, 2, vec![0u8; 16]).is_ok());
    }

    #[test]
    fn pixel_round_trip_and_bounds() {
        let mut f = FrameRgba::new(3, 2).unwrap();
        f.put_pixel(2, 1, [9, 8, 7, 6]);
        assert_eq!(f.pixel(2, 1), Some([9, 8, 7, 6]));
        assert_eq!(f.pixel(3, 0), None);
        assert_eq!(f.pixel(0, 2), None);
        // Out-of-bounds write is a no-op, not a panic.
        f.put_pixel(3, 3, [1, 1, 1, 1]);
    }

    #[test]
    fn fill_overwrites_every_pixel() {
        let mut f = FrameRgba::new(4, 1).unwrap();
        f.fill([10, 20, 30, 40]);
        assert!(f.data().chunks_exact(4).all(|px| px == [10, 20, 30, 40]));
    }
}
