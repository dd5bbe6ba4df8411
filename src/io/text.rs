//! Text dump of real-valued sequences
//!
//! One value per line in scientific notation with enough digits to
//! round-trip an `f32`. Only meant for inspecting raw bit sequences.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Write one value per line
pub fn write_levels<W: Write>(values: &[f32], mut writer: W) -> Result<()> {
    for value in values {
        writeln!(writer, "{:.8e}", value)?;
    }
    writer.flush()?;
    Ok(())
}

/// Parse one value per line, skipping blank lines
pub fn read_levels<R: BufRead>(reader: R) -> Result<Vec<f32>> {
    let mut values = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse::<f32>().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: {:?}: {}", line_no + 1, trimmed, e),
            )
        })?;
        values.push(value);
    }
    Ok(values)
}

pub fn write_levels_file<P: AsRef<Path>>(values: &[f32], path: P) -> Result<()> {
    let file = File::create(path)?;
    write_levels(values, BufWriter::new(file))
}

pub fn read_levels_file<P: AsRef<Path>>(path: P) -> Result<Vec<f32>> {
    let file = File::open(path)?;
    read_levels(BufReader::new(file))
}
