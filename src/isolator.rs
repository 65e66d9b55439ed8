use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    sync::mpsc,
};

use image::ImageFormat;
use threadpool::ThreadPool;

use crate::{
    color::{ColourSelector, RGBColorFormat},
    error::Error,
    raster::{
        band::RowBand, reader::CodecImageReader, writer::CodecImageWriter, Raster, RasterReader,
        RasterWriter,
    },
    IsolationArguments, Result,
};

const SUPPORTED_EXTENSION: &str = "png";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockPalette {
    pub highlight: RGBColorFormat<u8>,
    pub background: RGBColorFormat<u8>,
}

impl BlockPalette {
    pub fn choose(
        &self,
        selector: ColourSelector,
        anchor: RGBColorFormat<u8>,
    ) -> RGBColorFormat<u8> {
        if selector.is_dominant(anchor) {
            self.highlight
        } else {
            self.background
        }
    }
}

impl Default for BlockPalette {
    fn default() -> Self {
        Self {
            highlight: RGBColorFormat::BLACK,
            background: RGBColorFormat::WHITE,
        }
    }
}

#[derive(Debug)]
struct IsolationPlan {
    selector: ColourSelector,
    step: u32,
    palette: BlockPalette,
    output_file: PathBuf,
}

fn check_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn check_output_directory(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(Error::DirectoryNotFound(path.display().to_string()));
    }
    Ok(())
}

fn check_input_format(path: &Path) -> Result<()> {
    match path.extension().and_then(OsStr::to_str) {
        Some(SUPPORTED_EXTENSION) => Ok(()),
        _ => Err(Error::UnsupportedFormat(path.display().to_string())),
    }
}

fn parse_step(step: i64) -> Result<u32> {
    if step < 1 {
        return Err(Error::InvalidStep(step));
    }
    // a block wider than any image covers it entirely either way
    Ok(u32::try_from(step).unwrap_or(u32::MAX))
}

/// Runs every precondition in order before any image data is touched.
fn plan_isolation(arguments: &IsolationArguments) -> Result<IsolationPlan> {
    check_input_file(&arguments.input_file)?;
    check_output_directory(&arguments.output_directory)?;
    check_input_format(&arguments.input_file)?;
    let selector: ColourSelector = arguments.colour.parse()?;
    let step = parse_step(arguments.step)?;
    let file_name = arguments
        .input_file
        .file_name()
        .ok_or_else(|| Error::FileNotFound(arguments.input_file.display().to_string()))?;
    Ok(IsolationPlan {
        selector,
        step,
        palette: BlockPalette {
            highlight: arguments.highlight,
            background: arguments.background,
        },
        output_file: arguments.output_directory.join(file_name),
    })
}

/// Fills every `step`×`step` block of `raster` with the highlight colour if its
/// anchor dot is dominant in the selected channel, and with the background
/// colour otherwise.
///
/// The raster is cut into bands of `step` rows which are filled on `threadpool`.
/// Blocks never cross band borders, so workers never share dots.
pub fn fill_blocks(
    raster: Raster,
    selector: ColourSelector,
    step: u32,
    palette: BlockPalette,
    threadpool: &ThreadPool,
) -> Result<Raster> {
    let step = step.max(1);
    let width = raster.width();
    let height = raster.height();
    let bands = raster.into_bands(step);
    let number_of_bands = bands.len();
    log::debug!(
        "Filling {} band(s) of {}x{} with {} worker(s)",
        number_of_bands,
        width,
        step,
        threadpool.max_count()
    );

    let (sender, receiver) = mpsc::channel::<RowBand>();
    for mut band in bands {
        let sender = sender.clone();
        threadpool.execute(move || {
            band.fill_blocks(step, |anchor| palette.choose(selector, anchor));
            let _ = sender.send(band);
        });
    }
    drop(sender);

    let filled: Vec<RowBand> = receiver.iter().take(number_of_bands).collect();
    if filled.len() < number_of_bands {
        return Err(Error::WorkerFailed(number_of_bands - filled.len()));
    }
    Ok(Raster::from_bands(width, height, filled))
}

pub fn isolate_colour(arguments: &IsolationArguments) -> Result<PathBuf> {
    let plan = plan_isolation(arguments)?;
    log::info!(
        "Isolating {} in {} (step {}, highlight {}, background {})",
        plan.selector,
        arguments.input_file.display(),
        plan.step,
        plan.palette.highlight,
        plan.palette.background
    );

    let raster = CodecImageReader::new(&arguments.input_file).read_raster()?;
    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    let raster = fill_blocks(raster, plan.selector, plan.step, plan.palette, &threadpool)?;
    CodecImageWriter::new(&plan.output_file, ImageFormat::Png, &raster).write_raster()?;

    log::info!("Wrote {}", plan.output_file.display());
    Ok(plan.output_file)
}
