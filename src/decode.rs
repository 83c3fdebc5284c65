use std::{
    io::{BufRead, Seek, SeekFrom},
    path::Path,
};

use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader};
#[cfg(feature = "png")]
use image::{
    error::{DecodingError, ImageFormatHint},
    ImageError,
};
use log::debug;

use crate::{color_mode::ColorMode, error::CheckError, image::Image};

/// An image whose header has been parsed but whose pixel data has not been decoded yet.
pub struct OpenedImage<D> {
    pub format: Option<ImageFormat>,
    pub mode: ColorMode,
    decoder: D,
}

impl<D: ImageDecoder> OpenedImage<D> {
    pub fn dimensions(&self) -> (u32, u32) {
        self.decoder.dimensions()
    }

    /// Decodes the full pixel data. This is where truncated or corrupt files usually fail.
    pub fn decode(self) -> Result<Image, CheckError> {
        let pixels = DynamicImage::from_decoder(self.decoder)?;
        debug!(
            "decoded {}x{} pixels as {:?}",
            pixels.width(),
            pixels.height(),
            pixels.color()
        );
        Ok(Image {
            format: self.format,
            mode: self.mode,
            pixels,
        })
    }
}

/// Opens the file and guesses the format based on file contents, falling back to the extension.
pub fn open(path: &Path) -> Result<OpenedImage<impl ImageDecoder>, CheckError> {
    let open_err = |source| CheckError::Open {
        path: path.to_path_buf(),
        source,
    };
    debug!("opening {}", path.display());
    let reader = ImageReader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?;
    open_reader(reader)
}

/// Parses the header from an already constructed reader, e.g. one over an in-memory buffer.
///
/// The mode is the one stored in the file. `image` expands palettes and transparency chunks
/// while decoding, so PNG headers are read separately to tell those apart.
pub fn open_reader<'a, R: BufRead + Seek + 'a>(
    reader: ImageReader<R>,
) -> Result<OpenedImage<impl ImageDecoder + 'a>, CheckError> {
    let format = reader.format();
    #[cfg(feature = "png")]
    let (reader, png_mode) = if format == Some(ImageFormat::Png) {
        let (reader, mode) = png_header_mode(reader)?;
        (reader, Some(mode))
    } else {
        (reader, None)
    };
    #[cfg(not(feature = "png"))]
    let png_mode: Option<ColorMode> = None;

    let decoder = reader.into_decoder()?;
    let mode = match png_mode {
        Some(mode) => mode,
        None => ColorMode::try_from(decoder.original_color_type())?,
    };
    let (width, height) = decoder.dimensions();
    debug!("header: format {format:?}, {width}x{height}, mode {mode}");
    Ok(OpenedImage {
        format,
        mode,
        decoder,
    })
}

/// Reads the IHDR chunk and rewinds, handing back a reader positioned where it was
#[cfg(feature = "png")]
fn png_header_mode<R: BufRead + Seek>(
    reader: ImageReader<R>,
) -> Result<(ImageReader<R>, ColorMode), CheckError> {
    let io_err = |err| CheckError::Decode(ImageError::IoError(err));
    let mut inner = reader.into_inner();
    let start = inner.stream_position().map_err(io_err)?;
    let mode = {
        let header = png::Decoder::new(&mut inner).read_info().map_err(|err| {
            CheckError::Decode(ImageError::Decoding(DecodingError::new(
                ImageFormatHint::Exact(ImageFormat::Png),
                err,
            )))
        })?;
        let info = header.info();
        ColorMode::from_png_header(info.color_type, info.bit_depth)
    };
    inner.seek(SeekFrom::Start(start)).map_err(io_err)?;
    Ok((ImageReader::with_format(inner, ImageFormat::Png), mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.png");
        match open(&path) {
            Err(CheckError::Open { path: reported, .. }) => assert_eq!(reported, path),
            Err(other) => panic!("expected an open error, got {other}"),
            Ok(_) => panic!("opened a file that does not exist"),
        }
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        std::io::Write::write_all(&mut file, b"definitely not a png").unwrap();
        assert!(matches!(open(file.path()), Err(CheckError::Decode(_))));
    }

    #[test]
    fn header_of_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        RgbaImage::from_pixel(20, 12, Rgba([1, 2, 3, 4]))
            .save(&path)
            .unwrap();

        let opened = open(&path).unwrap();
        assert_eq!(opened.format, Some(ImageFormat::Png));
        assert_eq!(opened.mode, ColorMode::Rgba);
        assert_eq!(opened.dimensions(), (20, 12));

        let image = opened.decode().unwrap();
        assert_eq!(image.pixels.width(), 20);
        assert_eq!(image.pixels.height(), 12);
    }

    #[test]
    fn format_is_guessed_from_contents() {
        // PNG bytes behind a misleading extension
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actually-a-png.jpg");
        RgbImage::from_pixel(3, 3, Rgb([9, 9, 9]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let opened = open(&path).unwrap();
        assert_eq!(opened.format, Some(ImageFormat::Png));
        assert_eq!(opened.mode, ColorMode::Rgb);
    }

    #[test]
    fn in_memory_reader() {
        let mut bytes = Vec::new();
        RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .unwrap();
        let opened = open_reader(reader).unwrap();
        assert_eq!(opened.mode, ColorMode::Rgba);
    }
}
