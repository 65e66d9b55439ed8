use std::path::Path;

use image::{ImageError, ImageReader};

use super::{Raster, RasterReader};
use crate::error::Error;

/// Decodes any format the codec can read and normalises it to 8 bit RGB,
/// dropping alpha and palette information.
pub struct CodecImageReader<'a> {
    path: &'a Path,
}

impl<'a> CodecImageReader<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    fn decode_error(&self, error: ImageError) -> Error {
        Error::UnableToDecodeImage(self.path.display().to_string(), error)
    }
}

impl RasterReader for CodecImageReader<'_> {
    fn read_raster(&mut self) -> crate::Result<Raster> {
        let reader = ImageReader::open(self.path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| self.decode_error(ImageError::IoError(e)))?;
        let image = reader.decode().map_err(|e| self.decode_error(e))?;
        log::debug!(
            "Decoded {} ({}x{}, {:?})",
            self.path.display(),
            image.width(),
            image.height(),
            image.color()
        );
        Ok(Raster::from(image.to_rgb8()))
    }
}
