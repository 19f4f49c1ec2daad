//! Binary PPM (`P6`) output.
//!
//! The header is `P6\n<width> <height> 255\n`, followed by one `R G B` byte triple per pixel in
//! row-major order. Alpha is dropped.

use std::{
    ffi::OsString,
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process,
};

use crate::{error::Error, pixel_buffer::PixelBuffer};

pub const MAX_CHANNEL_VALUE: u8 = 255;

/// Streams `buffer` as a PPM image into `writer`.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> io::Result<()> {
    write!(writer, "P6\n{} {} {}\n", buffer.width(), buffer.height(), MAX_CHANNEL_VALUE)?;

    let mut row_bytes = Vec::with_capacity(buffer.width() * 3);
    for row in buffer.rows() {
        row_bytes.clear();
        row_bytes.extend(row.iter().flat_map(|c| c.to_rgb()));
        writer.write_all(&row_bytes)?;
    }

    writer.flush()
}

/// Writes `buffer` to the file at `path`, replacing it if it exists.
///
/// The image is written to a temporary file next to `path` and only renamed onto `path` once
/// complete. On failure the temporary file is removed and `path` is left as it was.
pub fn save_ppm<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<(), Error> {
    save_ppm_with(buffer, path.as_ref(), BufWriter::new)
}

/// Sibling of `path` the image is staged in, e.g. `out/.image.ppm.1234.tmp` for `out/image.ppm`.
fn staging_path(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "destination does not name a file")
    })?;

    let mut staged = OsString::from(".");
    staged.push(file_name);
    staged.push(format!(".{}.tmp", process::id()));
    Ok(path.with_file_name(staged))
}

fn save_ppm_with<W, F>(buffer: &PixelBuffer, path: &Path, wrap: F) -> Result<(), Error>
where
    W: Write,
    F: FnOnce(File) -> W,
{
    let to_error = |source| Error::Io { path: path.to_path_buf(), source };

    let staged = staging_path(path).map_err(to_error)?;
    let file = OpenOptions::new().write(true).create_new(true).open(&staged).map_err(to_error)?;

    let written = write_ppm(buffer, wrap(file)).and_then(|_| fs::rename(&staged, path));
    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(&staged) {
            log::warn!("Could not remove partially written '{}': {}", staged.display(), cleanup);
        }

        return Err(to_error(e));
    }

    log::debug!("Wrote {}x{} image to '{}'", buffer.width(), buffer.height(), path.display());
    Ok(())
}
