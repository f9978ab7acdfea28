use log::debug;
use std::error::Error;

/// Decode the returned bytes and write them to `path`. The `image` crate
/// picks the output encoding from the file extension; an unknown extension or
/// an unwritable path surfaces as an error. An existing file is overwritten.
pub fn save_image(data: &[u8], path: &str) -> Result<(), Box<dyn Error>> {
    debug!("decoding {} bytes for {}", data.len(), path);
    let image = image::load_from_memory(data)?;
    image.save(path)?;
    Ok(())
}
