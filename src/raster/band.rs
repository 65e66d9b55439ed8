use std::cmp;

use crate::color::RGBColorFormat;

/// A run of full-width rows cut from a [`super::Raster`]. Each band owns its dots,
/// so bands can be filled on different threads without sharing.
#[derive(Clone, Debug, PartialEq)]
pub struct RowBand {
    index: usize,
    width: u32,
    dots: Vec<RGBColorFormat<u8>>,
}

impl RowBand {
    pub fn new(index: usize, width: u32, dots: Vec<RGBColorFormat<u8>>) -> Self {
        Self { index, width, dots }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn height(&self) -> u32 {
        if self.width == 0 {
            return 0;
        }
        (self.dots.len() / self.width as usize) as u32
    }

    pub fn into_dots(self) -> Vec<RGBColorFormat<u8>> {
        self.dots
    }

    fn dot(&self, column_index: u32, row_index: u32) -> RGBColorFormat<u8> {
        self.dots[column_index as usize + row_index as usize * self.width as usize]
    }

    /// Paints a rectangle, clipped to the band bounds.
    pub fn fill_rect(
        &mut self,
        column_index: u32,
        row_index: u32,
        width: u32,
        height: u32,
        colour: RGBColorFormat<u8>,
    ) {
        let last_column = cmp::min(self.width, column_index.saturating_add(width));
        let last_row = cmp::min(self.height(), row_index.saturating_add(height));
        for y in row_index..last_row {
            let row_start = y as usize * self.width as usize;
            self.dots[row_start + column_index as usize..row_start + last_column as usize]
                .fill(colour);
        }
    }

    /// Fills every `step`×`step` block with the colour `choose` picks for the
    /// block's top-left anchor dot.
    pub fn fill_blocks<F>(&mut self, step: u32, choose: F)
    where
        F: Fn(RGBColorFormat<u8>) -> RGBColorFormat<u8>,
    {
        let step = step.max(1);
        for row_index in (0..self.height()).step_by(step as usize) {
            for column_index in (0..self.width).step_by(step as usize) {
                let colour = choose(self.dot(column_index, row_index));
                self.fill_rect(column_index, row_index, step, step, colour);
            }
        }
    }
}
