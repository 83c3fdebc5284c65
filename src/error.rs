use std::{
    fmt::{Debug, Display},
    path::PathBuf,
};

use image::{ExtendedColorType, ImageError};

/// Everything that can cut a report short.
///
/// Each variant renders as a single human-readable line,
/// which the binary prints as `Error: <line>`.
pub enum CheckError {
    /// The file could not be opened or read at all
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The contents are not an image we can decode
    Decode(ImageError),
    /// The file stores its pixels in a layout we have no mode name for
    UnsupportedColor(ExtendedColorType),
    /// A sample coordinate lies outside the image
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    /// Writing the report itself failed
    Output(std::io::Error),
    /// Bad command-line invocation
    Usage(String),
}

impl Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckError::Open { path, source } => {
                write!(f, "unable to open image `{}': {}", path.display(), source)
            }
            CheckError::Decode(err) => write!(f, "{err}"),
            CheckError::UnsupportedColor(color) => write!(f, "unsupported color type {color:?}"),
            CheckError::PixelOutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "image index ({x}, {y}) out of range for {width}x{height} image"
            ),
            CheckError::Output(err) => write!(f, "failed to write report: {err}"),
            CheckError::Usage(msg) => f.write_str(msg),
        }
    }
}

impl Debug for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CheckError").field(&self.to_string()).finish()
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::Open { source, .. } => Some(source),
            CheckError::Decode(err) => Some(err),
            CheckError::Output(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ImageError> for CheckError {
    fn from(value: ImageError) -> Self {
        // The reader surfaces I/O failures during decoding as ImageError::IoError;
        // those are still decoding problems from the user's point of view.
        CheckError::Decode(value)
    }
}

#[macro_export]
macro_rules! usage_err {
    ($($arg:tt)*) => {
        $crate::error::CheckError::Usage(format!($($arg)*))
    };
}

/// Like `?`, but maps any I/O failure while writing the report into [`CheckError::Output`]
#[macro_export]
macro_rules! out_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::error::CheckError::Output(err));
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn out_of_bounds_message() {
        let err = CheckError::PixelOutOfBounds {
            x: 10,
            y: 0,
            width: 4,
            height: 4,
        };
        assert_eq!(
            err.to_string(),
            "image index (10, 0) out of range for 4x4 image"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn open_message_names_the_path() {
        let err = CheckError::Open {
            path: PathBuf::from("missing.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            err.to_string(),
            "unable to open image `missing.png': No such file or directory"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn usage_macro_formats() {
        let err = usage_err!("unrecognized option `{}'", "-x");
        assert_eq!(err.to_string(), "unrecognized option `-x'");
    }
}
