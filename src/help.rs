use current_platform::CURRENT_PLATFORM;
use strum::VariantArray;

use crate::args::{Flag, DEFAULT_PATH};

pub fn print_help(bin_name: &str) {
    println!("Version: {}", version_string());
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
    println!("Usage: {bin_name} [options] [--] [file]");
    println!();
    println!("Reports whether the image has an alpha channel, the range of its alpha values");
    println!("and a few pixels from the top-left corner.");
    println!("If no file is given, {DEFAULT_PATH} is checked.");
    println!("Use -- before a file name that starts with a dash.");
    println!();
    println!("Options:");
    for flag in Flag::VARIANTS {
        let name: &'static str = flag.into();
        println!("  --{name:18} {}", flag.help_text());
    }
}

pub fn print_version() {
    println!("{}", version_string());
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");
    format!("alphacheck {version} {cpu}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_names_the_crate() {
        let version = version_string();
        assert!(version.starts_with(concat!("alphacheck ", env!("CARGO_PKG_VERSION"))));
    }
}
