//! Inspects one image and reports whether it carries an alpha channel,
//! how far its alpha values range, and a few pixels from the top-left corner
//! that give away checkerboard transparency placeholders baked into the pixels.
//!
//! The binary is the primary interface; the library exists for it, its tests and the fuzzer.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod args;
pub mod color_mode;
pub mod decode;
pub mod error;
pub mod help;
pub mod image;
pub mod init;
pub mod operations;
