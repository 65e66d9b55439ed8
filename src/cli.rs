use crate::color::RGBColorFormat;
use crate::{ConversionArguments, IsolationArguments, DEFAULT_STEP, DEFAULT_TARGET_FORMAT};
use clap::{
    arg, crate_description, crate_name, crate_version, value_parser, Arg, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

const CONVERT_COMMAND: &str = "convert";
const ISOLATE_COMMAND: &str = "isolate";

pub enum Operation {
    Convert(ConversionArguments),
    Isolate(IsolationArguments),
}

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = command.subcommand(Self::create_convert_command());
        let command = command.subcommand(Self::create_isolate_command());
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Operation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_operation(&matches)
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .about(crate_description!())
            .subcommand_required(true)
            .arg_required_else_help(true)
    }

    fn create_convert_command() -> Command {
        let command = Command::new(CONVERT_COMMAND)
            .about("Replace an image file with a copy re-encoded in another format");
        let command = Self::register_input_file_argument(command);
        Self::register_format_argument(command)
    }

    fn create_isolate_command() -> Command {
        let command = Command::new(ISOLATE_COMMAND)
            .about("Highlight the parts of a PNG image dominated by red, green or blue");
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_directory_argument(command);
        let command = Self::register_colour_argument(command);
        let command = Self::register_step_argument(command);
        let command = Self::register_highlight_argument(command);
        let command = Self::register_background_argument(command);
        Self::register_threads_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_format_argument(command: Command) -> Command {
        command.arg(Self::create_format_argument())
    }

    fn register_output_directory_argument(command: Command) -> Command {
        command.arg(Self::create_output_directory_argument())
    }

    fn register_colour_argument(command: Command) -> Command {
        command.arg(Self::create_colour_argument())
    }

    fn register_step_argument(command: Command) -> Command {
        command.arg(Self::create_step_argument())
    }

    fn register_highlight_argument(command: Command) -> Command {
        command.arg(Self::create_highlight_argument())
    }

    fn register_background_argument(command: Command) -> Command {
        command.arg(Self::create_background_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the input image")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_format_argument() -> Arg {
        arg!(format: -f --format <FORMAT> "Target file type, e.g. png, jpg, bmp")
            .default_value(DEFAULT_TARGET_FORMAT)
    }

    fn create_output_directory_argument() -> Arg {
        Arg::new("output_directory")
            .help("Existing folder the result is saved to under the input file name")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_colour_argument() -> Arg {
        Arg::new("colour")
            .help("Colour to isolate; only the first letter (r, g or b) counts")
            .required(true)
    }

    fn create_step_argument() -> Arg {
        arg!(-s --step <STEP> "Edge length of the pixelation blocks")
            .default_value(DEFAULT_STEP.to_string())
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64))
    }

    fn create_highlight_argument() -> Arg {
        arg!(--highlight <RGB> "Colour of the isolated parts as r,g,b")
            .default_value(RGBColorFormat::BLACK.to_string())
            .value_parser(parse_colour_triple)
    }

    fn create_background_argument() -> Arg {
        arg!(--background <RGB> "Colour of everything else as r,g,b")
            .default_value(RGBColorFormat::WHITE.to_string())
            .value_parser(parse_colour_triple)
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn extract_operation(matches: &ArgMatches) -> Operation {
        match matches.subcommand() {
            Some((CONVERT_COMMAND, sub_matches)) => {
                Operation::Convert(Self::extract_conversion_arguments(sub_matches))
            }
            Some((ISOLATE_COMMAND, sub_matches)) => {
                Operation::Isolate(Self::extract_isolation_arguments(sub_matches))
            }
            _ => unreachable!("Subcommand is required"),
        }
    }

    fn extract_conversion_arguments(matches: &ArgMatches) -> ConversionArguments {
        ConversionArguments {
            input_file: Self::extract_input_file_argument(matches),
            format: Self::extract_format_argument(matches),
        }
    }

    fn extract_isolation_arguments(matches: &ArgMatches) -> IsolationArguments {
        IsolationArguments {
            input_file: Self::extract_input_file_argument(matches),
            output_directory: Self::extract_output_directory_argument(matches),
            colour: Self::extract_colour_argument(matches),
            step: Self::extract_step_argument(matches),
            highlight: Self::extract_highlight_argument(matches),
            background: Self::extract_background_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_format_argument(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("format")
            .expect("Format must be provided, but was unset.")
            .clone()
    }

    fn extract_output_directory_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_directory")
            .expect("Required argument output_directory not provided")
            .clone()
    }

    fn extract_colour_argument(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("colour")
            .expect("Required argument colour not provided")
            .clone()
    }

    fn extract_step_argument(matches: &ArgMatches) -> i64 {
        matches
            .get_one::<i64>("step")
            .expect("Step must be provided, but was unset.")
            .to_owned()
    }

    fn extract_highlight_argument(matches: &ArgMatches) -> RGBColorFormat<u8> {
        matches
            .get_one::<RGBColorFormat<u8>>("highlight")
            .expect("Highlight colour must be provided, but was unset.")
            .to_owned()
    }

    fn extract_background_argument(matches: &ArgMatches) -> RGBColorFormat<u8> {
        matches
            .get_one::<RGBColorFormat<u8>>("background")
            .expect("Background colour must be provided, but was unset.")
            .to_owned()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_colour_triple(value: &str) -> Result<RGBColorFormat<u8>, String> {
    value.parse().map_err(|e: crate::Error| e.to_string())
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
