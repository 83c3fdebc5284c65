use std::{io::Cursor, num::NonZeroU8};

use alphacheck::{decode::open_reader, error::CheckError, operations::report};
use arbitrary::Unstructured;
use image::{ImageError, ImageFormat, ImageReader, RgbaImage};

/// Runs the full report over an in-memory file, returning what was written and how it ended
pub fn report_bytes(data: &[u8]) -> (String, Result<(), CheckError>) {
    let mut output = Vec::new();
    let result = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|err| CheckError::Decode(ImageError::IoError(err)))
        .and_then(open_reader)
        .and_then(|opened| report(opened, &mut output));
    let output = String::from_utf8(output).expect("report must be valid UTF-8");
    (output, result)
}

#[derive(Debug)]
pub struct StructuredImage {
    pub width: NonZeroU8,
    pub height: NonZeroU8,
    pub rgba_data: Vec<u8>,
}

impl StructuredImage {
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_raw(
            self.width.get() as u32,
            self.height.get() as u32,
            self.rgba_data.clone(),
        )
        .expect("buffer length matches dimensions")
    }

    pub fn to_png(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        self.to_image()
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("failed to encode PNG");
        bytes
    }
}

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width: NonZeroU8 = unstructured.arbitrary()?;
        let height: NonZeroU8 = unstructured.arbitrary()?;
        let rgba_data_len = width.get() as usize * height.get() as usize * 4;
        let rgba_data = unstructured.bytes(rgba_data_len)?;

        Ok(Self {
            width,
            height,
            rgba_data: rgba_data.to_vec(),
        })
    }
}
