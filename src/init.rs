//! Initialization that needs to be done on startup

/// Sets up logging to stderr and registers any decoding hooks before images are opened
pub fn init() {
    // Diagnostics stay quiet unless RUST_LOG asks for them, stdout carries the report
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();

    #[cfg(feature = "jxl")]
    jxl_oxide::integration::register_image_decoding_hook();
}
