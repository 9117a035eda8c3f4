//! Interactive console prompts for the batch mode.
//!
//! The batch mode mirrors whole trees, so before touching anything it
//! prints the usage steps and asks for a one-line y/n confirmation.

use std::io::{self, BufRead, Write};
use std::path::Path;

const BANNER_WIDTH: usize = 50;

/// Print the usage instructions shown before a batch run.
pub fn print_instructions(input_root: &Path, output_root: &Path) {
    println!("{}", "-".repeat(BANNER_WIDTH));
    println!("Hello, thank you for using jsift!");
    println!();
    println!("Usage steps:");
    println!(
        "1. Move the files you would like to sift into \"{}\".",
        input_root.display()
    );
    println!(
        "2. Listings will be written to \"{}\", mirroring the input tree.",
        output_root.display()
    );
}

/// Ask the y/n confirmation question.
///
/// Returns false when the user declines or stdin closes before an answer
/// arrives.
pub fn confirm() -> io::Result<bool> {
    print!("3. Input 'y' when ready or 'n' to quit: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y"))
}
