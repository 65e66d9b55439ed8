use std::path::Path;

use image::{ImageFormat, RgbImage};

use super::{Raster, RasterWriter};
use crate::error::Error;

pub struct CodecImageWriter<'a> {
    path: &'a Path,
    format: ImageFormat,
    raster: &'a Raster,
}

impl<'a> CodecImageWriter<'a> {
    pub fn new(path: &'a Path, format: ImageFormat, raster: &'a Raster) -> Self {
        Self {
            path,
            format,
            raster,
        }
    }
}

impl RasterWriter for CodecImageWriter<'_> {
    /// Creates or truncates the target file.
    fn write_raster(&mut self) -> crate::Result<()> {
        let image = RgbImage::from(self.raster);
        image
            .save_with_format(self.path, self.format)
            .map_err(|e| Error::UnableToEncodeImage(self.path.display().to_string(), e))?;
        log::debug!("Encoded {} as {:?}", self.path.display(), self.format);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use image::ImageFormat;

    use super::CodecImageWriter;
    use crate::{color::RGBColorFormat, error::Error, raster::Raster, raster::RasterWriter};

    #[test]
    fn write_png_overwrites_existing_file() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("out.png");
        std::fs::write(&path, b"stale").unwrap();

        let raster = Raster::filled(3, 2, RGBColorFormat::new(9, 8, 7));
        CodecImageWriter::new(&path, ImageFormat::Png, &raster)
            .write_raster()
            .unwrap();

        let written = image::open(&path).unwrap().to_rgb8();
        assert_eq!(written.dimensions(), (3, 2));
        assert!(written.pixels().all(|pixel| pixel.0 == [9, 8, 7]));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("missing").join("out.png");
        let raster = Raster::filled(1, 1, RGBColorFormat::BLACK);

        let result = CodecImageWriter::new(&path, ImageFormat::Png, &raster).write_raster();
        assert!(matches!(result, Err(Error::UnableToEncodeImage(..))));
    }
}
