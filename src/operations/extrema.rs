use image::RgbaImage;
use log::debug;

/// Minimum and maximum alpha sample across every pixel.
/// Returns `None` for an image with no pixels.
pub fn alpha_extrema(rgba: &RgbaImage) -> Option<(u8, u8)> {
    debug!("scanning alpha of {}x{} pixels", rgba.width(), rgba.height());
    rgba.pixels().fold(None, |range, pixel| {
        let alpha = pixel[3];
        Some(match range {
            None => (alpha, alpha),
            Some((min, max)) => (min.min(alpha), max.max(alpha)),
        })
    })
}
