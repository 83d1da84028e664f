use crate::error::{Result, RomError};
use crate::image::RomImage;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Where the programmer leaves the image, relative to the working directory.
pub const OUTPUT_PATH: &str = "out.bin";

/// Streams the image as raw bytes, high byte of each cell first. No header.
pub fn write_image<W: Write>(image: &RomImage, writer: &mut W) -> std::io::Result<()> {
    for cell in image.cells() {
        writer.write_all(&cell.to_be_bytes())?;
    }
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes the image to it.
pub fn write_to_path(image: &RomImage, path: &Path) -> Result<()> {
    let to_error = |source: std::io::Error| RomError::FileWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let out_file = std::fs::File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::with_capacity(16 * 1024, out_file);

    write_image(image, &mut writer).map_err(to_error)?;
    // BufWriter swallows errors on drop.
    writer.flush().map_err(to_error)?;

    log::info!("Wrote {} bytes to {}", image.byte_len(), path.display());
    Ok(())
}
