use std::{env::args_os, process};

use colour_isolator::{run, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let operation = cli_parser.parse(args_os());
    match run(&operation) {
        Ok(path) => println!("{}", path.display()),
        Err(e) => {
            eprintln!("Operation failed because of: {}", e);
            process::exit(1);
        }
    }
}
