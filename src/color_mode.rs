use image::ExtendedColorType;
use strum::{Display, IntoStaticStr, VariantArray};

use crate::error::CheckError;

/// Short name of the pixel layout stored in the file, e.g. `RGBA`, `P` or `I;16`.
///
/// This describes the file, not what the decoder expands it into:
/// a palette PNG with a transparency chunk is still `P`.
#[derive(Display, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    #[strum(serialize = "1")]
    Bilevel,
    #[strum(serialize = "L")]
    L,
    #[strum(serialize = "LA")]
    La,
    #[strum(serialize = "P")]
    Palette,
    #[strum(serialize = "RGB")]
    Rgb,
    #[strum(serialize = "RGBA")]
    Rgba,
    #[strum(serialize = "I;16")]
    I16,
    #[strum(serialize = "CMYK")]
    Cmyk,
}

impl ColorMode {
    /// Only `RGBA` counts. `LA` and `P` images are reported as having no alpha channel.
    pub fn has_alpha_channel(&self) -> bool {
        *self == ColorMode::Rgba
    }

    /// Mode from the colour type and bit depth in a PNG's IHDR chunk.
    /// The tRNS chunk is ignored, so RGB with a transparent colour key stays `RGB`.
    #[cfg(feature = "png")]
    pub fn from_png_header(color: png::ColorType, depth: png::BitDepth) -> Self {
        use png::{BitDepth, ColorType};
        match (color, depth) {
            (ColorType::Grayscale, BitDepth::One) => ColorMode::Bilevel,
            (ColorType::Grayscale, BitDepth::Sixteen) => ColorMode::I16,
            (ColorType::Grayscale, _) => ColorMode::L,
            (ColorType::GrayscaleAlpha, _) => ColorMode::La,
            (ColorType::Indexed, _) => ColorMode::Palette,
            (ColorType::Rgb, _) => ColorMode::Rgb,
            (ColorType::Rgba, _) => ColorMode::Rgba,
        }
    }
}

/// Deeper samples keep the 8-bit name, except 16-bit grayscale which is `I;16`.
impl TryFrom<ExtendedColorType> for ColorMode {
    type Error = CheckError;

    fn try_from(color: ExtendedColorType) -> Result<Self, Self::Error> {
        use ExtendedColorType::*;
        let mode = match color {
            L1 => ColorMode::Bilevel,
            L2 | L4 | L8 => ColorMode::L,
            L16 => ColorMode::I16,
            La1 | La2 | La4 | La8 | La16 => ColorMode::La,
            Rgb1 | Rgb2 | Rgb4 | Rgb8 | Rgb16 | Rgb32F | Bgr8 => ColorMode::Rgb,
            Rgba1 | Rgba2 | Rgba4 | Rgba8 | Rgba16 | Rgba32F | Bgra8 => ColorMode::Rgba,
            Cmyk8 => ColorMode::Cmyk,
            other => return Err(CheckError::UnsupportedColor(other)),
        };
        Ok(mode)
    }
}
