use clap::Parser;
use log::LevelFilter;
use romgen_core::writer::OUTPUT_PATH;
use romgen_core::{program_rom, RomConfig};
use simple_logger::SimpleLogger;
use std::path::Path;

/// Writes a 64K-cell EEPROM image to out.bin.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() {
    Args::parse();

    if let Err(error) = SimpleLogger::new().with_level(LevelFilter::Warn).init() {
        eprintln!("Could not set up logging: {error}");
    }

    let config = RomConfig::default();

    let image = match program_rom(&config, Path::new(OUTPUT_PATH)) {
        Ok(image) => image,
        Err(error) => {
            eprintln!("Could not program ROM image: {error}");
            std::process::exit(1);
        }
    };

    println!("ROM size (cells): {}", image.len());
    println!("Size of data (bytes): {}", image.byte_len());
}
