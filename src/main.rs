//! Settlement Engine CLI
//!
//! Prompts for a trip-expense text file name on standard input and writes
//! per-participant settlement adjustments to `<inputFileName>.out` next to
//! the input file.
//!
//! # Usage
//!
//! ```bash
//! echo "trips.txt" | cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use log::warn;
use settlement_engine::{EngineError, Result, SettlementEngine, ValidationError};
use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Write};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let (input_path, engine) = prompt_and_load(&mut stdin.lock(), &mut stdout.lock())?;

    // Only now, after validation, is the output file created
    let output_path = format!("{}.out", input_path);
    let writer = BufWriter::new(File::create(&output_path)?);
    engine.write_output(writer)?;

    Ok(())
}

/// Prompts until the user names a readable `.txt` file that passes
/// validation, then returns the file name and the loaded engine.
///
/// Selection and format errors print a message and re-prompt. A grammar
/// failure after clean validation is unexpected and aborts instead.
fn prompt_and_load<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<(String, SettlementEngine)> {
    loop {
        writeln!(output, "Enter the file name of the input text file:")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(EngineError::NoInput);
        }
        let name = line.trim();

        if name.is_empty() {
            writeln!(output, "Please enter the file name of the text file.\n")?;
            continue;
        }
        if !name.ends_with(".txt") {
            writeln!(output, "The file name must end with \".txt\". Please try again.\n")?;
            continue;
        }

        let contents = match fs::read_to_string(name) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("rejected {:?}: {}", name, e);
                writeln!(output, "File cannot be found. Please try again.\n")?;
                continue;
            }
            Err(e) => {
                warn!("rejected {:?}: {}", name, e);
                writeln!(output, "File is being used by another process. Please try again.\n")?;
                continue;
            }
        };

        let mut engine = SettlementEngine::new();
        match engine.process_str(&contents) {
            Ok(()) => return Ok((name.to_string(), engine)),
            Err(EngineError::Invalid(e)) => {
                warn!("rejected {:?}: {}", name, e);
                writeln!(output, "{}. Please use another file.\n", rejection_message(&e))?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// User-facing message per validation rejection class.
fn rejection_message(error: &ValidationError) -> &'static str {
    match error {
        ValidationError::BlankLine { .. } | ValidationError::MissingTerminator => {
            "File is empty or incorrectly formatted"
        }
        ValidationError::NegativeInteger { .. } => "File contains negative integers",
        ValidationError::NegativeNumber { .. } => "File contains negative numbers",
        ValidationError::NonNumeric { .. } => "File contains non-numeric data",
    }
}
