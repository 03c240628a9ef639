//! Writing rendered frames to disk.
//!
//! Binary PPM (`P6`) is the native format. Paths ending in `.png` are
//! encoded with the `image` crate instead.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::ImageBuffer;

/// Errors that can occur while saving an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Serialize a frame as binary PPM: header, then raw tone-mapped RGB triples.
pub fn write_ppm<W: Write>(frame: &ImageBuffer, writer: &mut W) -> OutputResult<()> {
    write!(writer, "P6\n{} {}\n255\n", frame.width, frame.height)?;
    writer.write_all(&frame.to_rgb8())?;
    Ok(())
}

/// Save a frame to `path`, choosing the format from the extension.
pub fn save_image<P: AsRef<Path>>(frame: &ImageBuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        image::save_buffer(
            path,
            &frame.to_rgb8(),
            frame.width,
            frame.height,
            image::ColorType::Rgb8,
        )?;
    } else {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write_ppm(frame, &mut writer)?;
        writer.flush()?;
    }

    log::debug!("Wrote {}x{} image to {}", frame.width, frame.height, path.display());
    Ok(())
}
