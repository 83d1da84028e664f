pub mod byte_order;
pub mod control_lines;
pub mod error;
pub mod image;
pub mod writer;

pub use error::{Result, RomError};
pub use image::{RomConfig, RomImage};

use std::path::Path;

/// Builds the image described by `config`, converts it to device byte order
/// and writes it to `path`. Returns the written image.
pub fn program_rom(config: &RomConfig, path: &Path) -> Result<RomImage> {
    let mut image = RomImage::filled(config)?;
    image.swap_bytes();
    log::debug!("Swapped byte order of {} cells", image.len());

    writer::write_to_path(&image, path)?;
    Ok(image)
}
