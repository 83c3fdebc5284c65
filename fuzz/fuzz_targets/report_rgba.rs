#![no_main]

use alphacheck::error::CheckError;
use alphacheck_fuzz::StructuredImage;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: StructuredImage| {
    let image = input.to_image();
    let (output, result) = alphacheck_fuzz::report_bytes(&input.to_png());

    let min = image.pixels().map(|p| p[3]).min().expect("image is not empty");
    let max = image.pixels().map(|p| p[3]).max().expect("image is not empty");
    assert!(
        output.contains(&format!("Alpha channel range: ({min}, {max})\n")),
        "{output}"
    );

    let small = image.width() < 11 || image.height() < 11;
    match result {
        Ok(()) => assert!(!small),
        Err(CheckError::PixelOutOfBounds { .. }) => assert!(small),
        Err(other) => panic!("unexpected error: {other}"),
    }
});
