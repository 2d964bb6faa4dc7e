//! Print the XMP schema groups of a PDF or raw XMP file
//!
//! Usage: `cargo run --example read_groups -- <file.pdf|file.xmp>`

use std::env;
use std::fs::File;
use std::io::BufReader;

use xmpgroups::{files::pdf, GroupContainer, XmpExtractor};

fn read_groups() -> Result<(), Box<dyn std::error::Error>> {
    // There should be only one argument: a path to a file to be read.
    let args: Vec<String> = env::args().collect();

    let path = match args.len() {
        // args[0] = path to executable
        2 => Ok(&args[1]),
        n => Err(format!(
            "expected 1 argument (file name), got {} arguments",
            n - 1
        )),
    }?;

    let mut file = File::open(path)?;
    let groups: Option<GroupContainer> = if pdf::is_pdf(&mut file)? {
        pdf::extract_pdf(BufReader::new(file))?
    } else {
        Some(XmpExtractor::new().extract(BufReader::new(file))?)
    };

    match groups {
        Some(groups) if !groups.is_empty() => print!("{}", groups),
        _ => println!("No XMP metadata found in {}", path),
    }

    Ok(())
}

fn main() {
    if let Err(err) = read_groups() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
