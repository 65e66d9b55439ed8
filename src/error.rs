use std::fmt::Display;

use image::ImageError;

#[derive(Debug)]
pub enum Error {
    FileNotFound(String),
    DirectoryNotFound(String),
    UnsupportedFormat(String),
    UnrecognisedColour(String),
    InvalidStep(i64),
    InvalidColourTriple(String),
    UnableToDecodeImage(String, ImageError),
    UnableToEncodeImage(String, ImageError),
    UnableToDeleteOriginal(String, std::io::Error),
    WorkerFailed(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotFound(path) => {
                write!(f, "Image file '{}' does not exist", path)
            }
            Self::DirectoryNotFound(path) => {
                write!(f, "Save folder '{}' does not exist", path)
            }
            Self::UnsupportedFormat(format) => {
                write!(f, "Image file type '{}' is not supported", format)
            }
            Self::UnrecognisedColour(colour) => {
                write!(
                    f,
                    "Unrecognised colour '{}'. Expected one starting with r, g or b.",
                    colour
                )
            }
            Self::InvalidStep(step) => {
                write!(f, "Invalid step amount {}. Step must be at least 1.", step)
            }
            Self::InvalidColourTriple(value) => {
                write!(
                    f,
                    "Invalid colour '{}'. Expected three comma separated values from 0 to 255.",
                    value
                )
            }
            Self::UnableToDecodeImage(path, error) => {
                write!(f, "Unable to decode image '{}': {}", path, error)
            }
            Self::UnableToEncodeImage(path, error) => {
                write!(f, "Unable to encode image '{}': {}", path, error)
            }
            Self::UnableToDeleteOriginal(path, error) => {
                write!(
                    f,
                    "Converted copy was written, but original '{}' could not be deleted: {}",
                    path, error
                )
            }
            Self::WorkerFailed(missing_bands) => {
                write!(
                    f,
                    "Block fill worker failed. {} row band(s) were not processed.",
                    missing_bands
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToDecodeImage(_, error) | Self::UnableToEncodeImage(_, error) => {
                Some(error)
            }
            Self::UnableToDeleteOriginal(_, error) => Some(error),
            _ => None,
        }
    }
}
