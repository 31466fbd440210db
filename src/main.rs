use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use vellum::{Converter, PipelineError};

/// A simple CLI to convert a markdown file into a PDF.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (input, output) = match args.len() {
        2 => (args[1].clone(), None),
        3 => (args[1].clone(), Some(PathBuf::from(&args[2]))),
        _ => {
            eprintln!("Convert a markdown file to a paginated PDF.");
            eprintln!();
            eprintln!("Usage: {} <path/to/input.md> [path/to/output.pdf]", args[0]);
            process::exit(1);
        }
    };
    let output = output.unwrap_or_else(|| Path::new(&input).with_extension("pdf"));

    let markdown = fs::read_to_string(&input)?;
    let converter = Converter::new();
    converter.generate_to_file(&markdown, &output)?;

    println!("Successfully generated {}", output.display());
    Ok(())
}
