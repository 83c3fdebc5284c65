//! Command-line parsing.
//!
//! There is a single optional positional argument, so we hand-roll it
//! instead of pulling in a parser. Both `-help` and `--help` spellings are accepted,
//! and `--` ends option parsing so that files named like `-icon.png` can be checked.

use std::{ffi::OsString, path::PathBuf};

use strum::{EnumString, IntoStaticStr, VariantArray};

use crate::{error::CheckError, usage_err};

/// Image inspected when no path is given
pub const DEFAULT_PATH: &str = "public/images/maps/level1_icon.png";

#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Flag {
    Help,
    Version,
}

impl Flag {
    pub fn help_text(&self) -> &'static str {
        match self {
            Flag::Help => "print this help and exit",
            Flag::Version => "print version information and exit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Report(PathBuf),
    Help,
    Version,
}

pub fn parse_args(args: Vec<OsString>) -> Result<Invocation, CheckError> {
    let mut path: Option<PathBuf> = None;
    let mut options_ended = false;
    // skip argv[0], path to our binary
    for raw_arg in args.into_iter().skip(1) {
        if !options_ended {
            if raw_arg.as_encoded_bytes() == b"--" {
                options_ended = true;
                continue;
            }
            if let Some(flag) = as_flag(&raw_arg)? {
                // the first flag wins, the rest of the command line is not looked at
                return Ok(match flag {
                    Flag::Help => Invocation::Help,
                    Flag::Version => Invocation::Version,
                });
            }
        }
        if let Some(first) = &path {
            return Err(usage_err!(
                "only one image can be checked at a time, got `{}' and `{}'",
                first.display(),
                raw_arg.to_string_lossy()
            ));
        }
        path = Some(PathBuf::from(raw_arg));
    }
    Ok(Invocation::Report(path.unwrap_or_else(|| PathBuf::from(DEFAULT_PATH))))
}

/// Anything starting with `-` is an option; a lone `-` is not supported
fn as_flag(raw_arg: &OsString) -> Result<Option<Flag>, CheckError> {
    let bytes = raw_arg.as_encoded_bytes();
    if bytes.first() != Some(&b'-') {
        return Ok(None);
    }
    let lossy = raw_arg.to_string_lossy();
    let name = lossy.strip_prefix("--").unwrap_or(&lossy[1..]);
    Flag::try_from(name)
        .map(Some)
        .map_err(|_| usage_err!("unrecognized option `{}'", lossy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        std::iter::once("alphacheck")
            .chain(list.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn default_path() {
        assert_eq!(
            parse_args(args(&[])).unwrap(),
            Invocation::Report(PathBuf::from(DEFAULT_PATH))
        );
    }

    #[test]
    fn explicit_path() {
        assert_eq!(
            parse_args(args(&["icon.png"])).unwrap(),
            Invocation::Report(PathBuf::from("icon.png"))
        );
    }

    #[test]
    fn help_spellings() {
        assert_eq!(parse_args(args(&["-help"])).unwrap(), Invocation::Help);
        assert_eq!(parse_args(args(&["--help"])).unwrap(), Invocation::Help);
        assert_eq!(
            parse_args(args(&["icon.png", "--version"])).unwrap(),
            Invocation::Version
        );
    }

    #[test]
    fn unknown_option() {
        let err = parse_args(args(&["-verbose"])).unwrap_err();
        assert_eq!(err.to_string(), "unrecognized option `-verbose'");
        assert!(parse_args(args(&["-"])).is_err());
    }

    #[test]
    fn double_dash_ends_options() {
        assert_eq!(
            parse_args(args(&["--", "-icon.png"])).unwrap(),
            Invocation::Report(PathBuf::from("-icon.png"))
        );
        assert_eq!(
            parse_args(args(&["--", "--help"])).unwrap(),
            Invocation::Report(PathBuf::from("--help"))
        );
        // only the first `--` is a separator
        assert_eq!(
            parse_args(args(&["--", "--"])).unwrap(),
            Invocation::Report(PathBuf::from("--"))
        );
    }

    #[test]
    fn two_paths() {
        let err = parse_args(args(&["a.png", "b.png"])).unwrap_err();
        assert!(matches!(err, CheckError::Usage(_)));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_kept_verbatim() {
        use std::os::unix::ffi::OsStringExt;
        let raw = OsString::from_vec(vec![b'f', 0xff, b'.', b'p', b'n', b'g']);
        let parsed = parse_args(vec![OsString::from("alphacheck"), raw.clone()]).unwrap();
        assert_eq!(parsed, Invocation::Report(PathBuf::from(raw)));
    }
}
