use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use image::ImageFormat;

use crate::{
    error::Error,
    raster::{reader::CodecImageReader, writer::CodecImageWriter, RasterReader, RasterWriter},
    ConversionArguments, Result,
};

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|current| current.eq_ignore_ascii_case(extension))
}

/// Looks the extension up in the codec registry and keeps it only if an encoder exists.
fn writable_format(extension: &str) -> Result<ImageFormat> {
    ImageFormat::from_extension(extension)
        .filter(ImageFormat::writing_enabled)
        .ok_or_else(|| Error::UnsupportedFormat(extension.to_owned()))
}

/// Re-encodes the input file as `format` next to the original and deletes the
/// original afterwards. Returns the path of the converted file.
///
/// A file that already carries the target extension is returned untouched,
/// even if the codec could not write that format.
pub fn convert_image_format(arguments: &ConversionArguments) -> Result<PathBuf> {
    let input_file = &arguments.input_file;
    if !input_file.exists() {
        return Err(Error::FileNotFound(input_file.display().to_string()));
    }
    let extension = arguments.format.to_ascii_lowercase();
    if has_extension(input_file, &extension) {
        log::warn!(
            "{} is already a {} file, nothing to convert",
            input_file.display(),
            extension
        );
        return Ok(input_file.clone());
    }
    let format = writable_format(&extension)?;

    let raster = CodecImageReader::new(input_file).read_raster()?;
    let output_file = input_file.with_extension(&extension);
    CodecImageWriter::new(&output_file, format, &raster).write_raster()?;
    fs::remove_file(input_file)
        .map_err(|e| Error::UnableToDeleteOriginal(input_file.display().to_string(), e))?;

    log::info!(
        "Converted {} to {}",
        input_file.display(),
        output_file.display()
    );
    Ok(output_file)
}
