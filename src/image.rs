use std::borrow::Cow;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::color_mode::ColorMode;

/// A fully decoded image together with what we learned about it while opening it.
#[derive(Debug, Clone)]
pub struct Image {
    /// `None` when the format was handled by a decoding hook rather than a built-in decoder
    pub format: Option<ImageFormat>,
    pub mode: ColorMode,
    pub pixels: DynamicImage,
}

impl Image {
    /// The pixels as 8-bit RGBA, borrowed when the decoder already produced that layout.
    /// Deeper samples are scaled down, so alpha always ranges over 0..=255.
    pub fn rgba8(&self) -> Cow<'_, RgbaImage> {
        match &self.pixels {
            DynamicImage::ImageRgba8(buffer) => Cow::Borrowed(buffer),
            other => Cow::Owned(other.to_rgba8()),
        }
    }
}

/// Conventional upper-case name of a container format, e.g. `PNG` or `JPEG`.
pub fn format_name(format: Option<ImageFormat>) -> String {
    let Some(format) = format else {
        return "unknown".to_owned();
    };
    let name = match format {
        ImageFormat::Png => "PNG",
        ImageFormat::Jpeg => "JPEG",
        ImageFormat::Gif => "GIF",
        ImageFormat::WebP => "WEBP",
        ImageFormat::Pnm => "PPM",
        ImageFormat::Tiff => "TIFF",
        ImageFormat::Tga => "TGA",
        ImageFormat::Dds => "DDS",
        ImageFormat::Bmp => "BMP",
        ImageFormat::Ico => "ICO",
        ImageFormat::Hdr => "HDR",
        ImageFormat::OpenExr => "EXR",
        ImageFormat::Farbfeld => "FARBFELD",
        ImageFormat::Avif => "AVIF",
        ImageFormat::Qoi => "QOI",
        // formats added to `image` after this list was written
        other => {
            return other
                .extensions_str()
                .first()
                .map(|ext| ext.to_uppercase())
                .unwrap_or_else(|| "unknown".to_owned())
        }
    };
    name.to_owned()
}
