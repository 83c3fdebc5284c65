mod extrema;
mod opacity;
mod report;
mod sample;

pub use extrema::alpha_extrema;
pub use opacity::Opacity;
pub use report::{report, report_file};
pub use sample::{sample_pixels, SamplePixel, SAMPLE_POINTS};
