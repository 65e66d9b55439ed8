use std::path::PathBuf;

pub use cli::{CLIParser, Operation};
pub use color::{ColourSelector, RGBColorFormat};
pub use converter::convert_image_format;
pub use error::Error;
pub use isolator::{fill_blocks, isolate_colour, BlockPalette};
pub use raster::Raster;

mod cli;
pub mod color;
mod converter;
mod error;
mod isolator;
mod logger;
pub mod raster;

pub type Result<T> = std::result::Result<T, error::Error>;

pub const DEFAULT_TARGET_FORMAT: &str = "png";
pub const DEFAULT_STEP: i64 = 1;

pub struct ConversionArguments {
    pub input_file: PathBuf,
    /// target extension without the leading dot
    pub format: String,
}

impl ConversionArguments {
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            format: DEFAULT_TARGET_FORMAT.to_owned(),
        }
    }
}

pub struct IsolationArguments {
    pub input_file: PathBuf,
    pub output_directory: PathBuf,
    /// only the first character is significant
    pub colour: String,
    pub step: i64,
    pub highlight: RGBColorFormat<u8>,
    pub background: RGBColorFormat<u8>,
    pub number_of_threads: usize,
}

impl IsolationArguments {
    pub fn new(
        input_file: impl Into<PathBuf>,
        output_directory: impl Into<PathBuf>,
        colour: impl Into<String>,
    ) -> Self {
        let palette = BlockPalette::default();
        Self {
            input_file: input_file.into(),
            output_directory: output_directory.into(),
            colour: colour.into(),
            step: DEFAULT_STEP,
            highlight: palette.highlight,
            background: palette.background,
            number_of_threads: 1,
        }
    }
}

/// Runs the operation selected on the command line and returns the path of
/// the file it produced.
pub fn run(operation: &Operation) -> Result<PathBuf> {
    match operation {
        Operation::Convert(arguments) => convert_image_format(arguments),
        Operation::Isolate(arguments) => isolate_colour(arguments),
    }
}
