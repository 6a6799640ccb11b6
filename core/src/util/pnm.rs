//! PPM image output.
//!
//! PPM is the RGB member of the PNM (NetPBM) family of extremely simple
//! image formats: a short textual header followed by pixel data. Only the
//! binary P6 sub-format, three bytes per pixel, is written here.

use core::fmt::{self, Display, Formatter};
#[cfg(feature = "std")]
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

#[cfg(feature = "std")]
use Error::*;

#[cfg(feature = "std")]
use crate::{
    math::color::Color3,
    util::{Dims, buf::Buf2},
};

/// The header of a binary PPM image.
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Header {
    width: u32,
    height: u32,
    max: u16,
}

/// Error writing a PPM image.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// An I/O error occurred.
    #[cfg(feature = "std")]
    Io(io::ErrorKind),
    /// The image has zero width or height.
    InvalidDims(u32, u32),
}

/// Result of writing a PPM image.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Error::Io(kind) => write!(f, "error writing ppm image: {kind}"),
            Error::InvalidDims(w, h) => {
                write!(f, "invalid ppm image dimensions {w}×{h}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Io(e.kind())
    }
}

#[cfg(feature = "std")]
impl Header {
    /// Writes `self` to `dest` as a valid P6 header,
    /// including a trailing newline.
    fn write(&self, mut dest: impl Write) -> io::Result<()> {
        let Self { width, height, max } = *self;
        writeln!(dest, "P6 {width} {height} {max}")
    }
}

/// Writes an image to a file in PPM format, P6 sub-format
/// (binary 8-bits-per-channel RGB).
///
/// Caution: This function overwrites the file if it already exists.
/// Use [`write_ppm`] for more control over file creation.
///
/// # Errors
/// Returns [`pnm::Error`][Error] if the image is empty or if an I/O error
/// occurs while writing.
#[cfg(feature = "std")]
pub fn save_ppm(path: impl AsRef<Path>, buf: &Buf2<Color3>) -> Result<()> {
    let path = path.as_ref();
    log::debug!(
        "saving {}×{} image to {}",
        buf.width(),
        buf.height(),
        path.display()
    );
    let mut out = BufWriter::new(File::create(path)?);
    write_ppm(&mut out, buf)?;
    out.flush()?;
    Ok(())
}

/// Writes an image to `out` in PPM format, P6 sub-format
/// (binary 8-bits-per-channel RGB).
///
/// # Errors
/// Returns [`pnm::Error`][Error] if the image is empty or if an I/O error
/// occurs while writing.
#[cfg(feature = "std")]
pub fn write_ppm(mut out: impl Write, buf: &Buf2<Color3>) -> Result<()> {
    let Dims(width, height) = buf.dims();
    if width == 0 || height == 0 {
        return Err(InvalidDims(width, height));
    }
    Header { width, height, max: 255 }.write(&mut out)?;

    for row in buf.rows() {
        let bytes: alloc::vec::Vec<u8> =
            row.iter().flat_map(|c| c.0).collect();
        out.write_all(&bytes)?;
    }
    Ok(())
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use alloc::{string::ToString, vec::Vec};

    use crate::math::rgb;

    use super::*;

    #[test]
    fn write_header_p6() {
        let mut out = Vec::new();
        let hdr = Header { width: 64, height: 16, max: 4 };
        hdr.write(&mut out).unwrap();
        assert_eq!(&out, b"P6 64 16 4\n");
    }

    #[test]
    fn write_ppm_pixels() {
        let buf = Buf2::new(
            2,
            2,
            [
                rgb(0xFF, 0, 0),
                rgb(0, 0xFF, 0),
                rgb(0, 0, 0xFF),
                rgb(0xFF, 0xFF, 0),
            ],
        );

        let mut out = Vec::new();
        write_ppm(&mut out, &buf).unwrap();

        assert_eq!(
            &out,
            b"P6 2 2 255\n\
              \xFF\x00\x00\
              \x00\xFF\x00\
              \x00\x00\xFF\
              \xFF\xFF\x00"
        );
    }

    #[test]
    fn write_ppm_empty_image() {
        let buf = Buf2::<Color3>::new_default(0, 3);
        let mut out = Vec::new();
        assert_eq!(write_ppm(&mut out, &buf), Err(InvalidDims(0, 3)));
        assert!(out.is_empty());
    }

    #[test]
    fn write_ppm_io_error() {
        struct Full;
        impl Write for Full {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::ErrorKind::StorageFull.into())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let buf = Buf2::<Color3>::new_default(1, 1);
        let res = write_ppm(Full, &buf);
        assert_eq!(res, Err(Io(io::ErrorKind::StorageFull)));
        let msg = res.unwrap_err().to_string();
        assert!(msg.starts_with("error writing ppm image"), "{msg}");
    }
}
