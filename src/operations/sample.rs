use std::fmt::Display;

use image::{Rgba, RgbaImage};

use crate::error::CheckError;

/// Coordinates probed for a checkerboard transparency placeholder.
/// Such placeholders are usually grey and white squares, so these four points
/// straddle the first square boundary in the top-left corner.
pub const SAMPLE_POINTS: [(u32, u32); 4] = [(0, 0), (10, 0), (0, 10), (10, 10)];

/// An 8-bit RGBA pixel printed as `(r,g,b,a)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePixel(pub Rgba<u8>);

impl Display for SamplePixel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = self.0 .0;
        write!(f, "({r},{g},{b},{a})")
    }
}

/// Reads the pixels at [`SAMPLE_POINTS`].
/// Images smaller than 11x11 fail with [`CheckError::PixelOutOfBounds`]
/// naming the first point that misses.
pub fn sample_pixels(rgba: &RgbaImage) -> Result<[SamplePixel; 4], CheckError> {
    let (width, height) = rgba.dimensions();
    let mut samples = [SamplePixel(Rgba([0; 4])); 4];
    for (sample, &(x, y)) in samples.iter_mut().zip(SAMPLE_POINTS.iter()) {
        let pixel = rgba
            .get_pixel_checked(x, y)
            .ok_or(CheckError::PixelOutOfBounds {
                x,
                y,
                width,
                height,
            })?;
        *sample = SamplePixel(*pixel);
    }
    Ok(samples)
}
