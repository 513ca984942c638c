use anyhow::Result;
use simple_logger::init_with_level;

/// Debug level turns on the request/response dumps in the http module.
/// Avoid it when uploading big files.
pub fn init(debug: bool) -> Result<()> {
    let level = if debug {
        log::Level::Debug
    } else {
        log::Level::Info
    };

    init_with_level(level)?;

    Ok(())
}
