use std::{io::Write, path::Path};

use image::ImageDecoder;

use crate::{
    decode::{self, OpenedImage},
    error::CheckError,
    image::format_name,
    operations::{alpha_extrema, sample_pixels, Opacity},
    out_try,
};

/// Opens the file and writes the transparency report for it.
/// Nothing is written if the file cannot be opened.
pub fn report_file(path: &Path, writer: &mut impl Write) -> Result<(), CheckError> {
    let opened = decode::open(path)?;
    report(opened, writer)
}

/// Writes the report line by line, so whatever was already learned is on the writer
/// when a later step fails.
pub fn report<D: ImageDecoder>(
    opened: OpenedImage<D>,
    writer: &mut impl Write,
) -> Result<(), CheckError> {
    out_try!(writeln!(writer, "Format: {}", format_name(opened.format)));
    out_try!(writeln!(writer, "Mode: {}", opened.mode));

    if !opened.mode.has_alpha_channel() {
        out_try!(writeln!(
            writer,
            "Image does NOT have an alpha channel (Mode is not RGBA)."
        ));
        return Ok(());
    }

    let image = opened.decode()?;
    let rgba = image.rgba8();
    let (width, height) = rgba.dimensions();
    // an image without pixels fails on the very first pixel read
    let (min, max) = alpha_extrema(&rgba).ok_or(CheckError::PixelOutOfBounds {
        x: 0,
        y: 0,
        width,
        height,
    })?;
    out_try!(writeln!(writer, "Alpha channel range: ({min}, {max})"));

    match Opacity::classify((min, max)) {
        Opacity::FullyOpaque => out_try!(writeln!(
            writer,
            "Alpha channel is fully opaque to the limit (all 255). No transparency found."
        )),
        Opacity::Transparent { min, max } => out_try!(writeln!(
            writer,
            "Image has transparency. Alpha min: {min}, Alpha max: {max}"
        )),
    }
    out_try!(writer.flush());

    let samples = sample_pixels(&rgba)?;
    let samples: Vec<String> = samples.iter().map(|s| s.to_string()).collect();
    out_try!(writeln!(
        writer,
        "Sample pixels (top-left area): [{}]",
        samples.join(", ")
    ));
    out_try!(writer.flush());
    Ok(())
}
