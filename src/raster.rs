use image::RgbImage;

use crate::color::RGBColorFormat;

pub mod band;
pub mod reader;
pub mod writer;

use band::RowBand;

pub trait RasterReader {
    fn read_raster(&mut self) -> crate::Result<Raster>;
}

pub trait RasterWriter {
    fn write_raster(&mut self) -> crate::Result<()>;
}

/// Row-major grid of 8 bit RGB dots.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    dots: Vec<RGBColorFormat<u8>>,
}

impl Raster {
    pub fn new(width: u32, height: u32, dots: Vec<RGBColorFormat<u8>>) -> Self {
        assert_eq!(
            dots.len(),
            width as usize * height as usize,
            "Number of dots does not match raster size"
        );
        Self {
            width,
            height,
            dots,
        }
    }

    pub fn filled(width: u32, height: u32, colour: RGBColorFormat<u8>) -> Self {
        Self::new(width, height, vec![colour; width as usize * height as usize])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dot(&self, column_index: u32, row_index: u32) -> RGBColorFormat<u8> {
        let index = column_index as usize + row_index as usize * self.width as usize;
        self.dots[index]
    }

    pub fn dots(&self) -> &[RGBColorFormat<u8>] {
        &self.dots
    }

    /// Splits the raster into bands of `band_height` rows; the last band may be shorter.
    pub fn into_bands(self, band_height: u32) -> Vec<RowBand> {
        if self.dots.is_empty() {
            return Vec::new();
        }
        let band_length = self.width as usize * band_height.max(1) as usize;
        self.dots
            .chunks(band_length)
            .enumerate()
            .map(|(index, dots)| RowBand::new(index, self.width, dots.to_vec()))
            .collect()
    }

    /// Reassembles bands in index order, regardless of the order they arrive in.
    pub fn from_bands(width: u32, height: u32, mut bands: Vec<RowBand>) -> Self {
        bands.sort_by_key(RowBand::index);
        let dots = bands.into_iter().flat_map(RowBand::into_dots).collect();
        Self::new(width, height, dots)
    }
}

impl From<RgbImage> for Raster {
    fn from(value: RgbImage) -> Self {
        let (width, height) = value.dimensions();
        let dots = value.pixels().map(|pixel| RGBColorFormat::from(*pixel)).collect();
        Raster::new(width, height, dots)
    }
}

impl From<&Raster> for RgbImage {
    fn from(value: &Raster) -> Self {
        RgbImage::from_fn(value.width, value.height, |column_index, row_index| {
            value.dot(column_index, row_index).into()
        })
    }
}
