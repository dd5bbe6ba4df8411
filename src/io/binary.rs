//! Binary waveform files
//!
//! Layout: `re, im` as consecutive 32-bit IEEE-754 floats per sample,
//! native byte order, no header, no length field. A file of N samples is
//! exactly `8 * N` bytes.

use byteorder::{ByteOrder, NativeEndian, ReadBytesExt, WriteBytesExt};
use rustfft::num_complex::Complex32;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::Result;
use crate::waveform::Waveform;

/// Bytes per complex sample (2 x f32)
pub const BYTES_PER_SAMPLE: usize = 8;

const MAX_PREALLOCATED_SAMPLES: usize = 64 * 1024;

/// Write every sample of `waveform` to `writer`
pub fn write_waveform<W: Write>(waveform: &Waveform, mut writer: W) -> Result<()> {
    for sample in waveform.samples() {
        writer.write_f32::<NativeEndian>(sample.re)?;
        writer.write_f32::<NativeEndian>(sample.im)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read samples back from `reader`
///
/// `Some(n)` reads exactly `n` samples. `None` reads to end of stream and
/// rejects a trailing partial sample.
pub fn read_waveform<R: Read>(mut reader: R, count: Option<usize>) -> Result<Waveform> {
    match count {
        Some(n) => {
            // Count is caller input; reserve at most one buffer's worth up front
            let mut samples = Vec::with_capacity(n.min(MAX_PREALLOCATED_SAMPLES));
            for _ in 0..n {
                let re = reader.read_f32::<NativeEndian>()?;
                let im = reader.read_f32::<NativeEndian>()?;
                samples.push(Complex32::new(re, im));
            }
            Ok(Waveform::new(samples))
        }
        None => {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes)?;

            if bytes.len() % BYTES_PER_SAMPLE != 0 {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "{} bytes is not a whole number of {}-byte samples",
                        bytes.len(),
                        BYTES_PER_SAMPLE
                    ),
                )
                .into());
            }

            let samples = bytes
                .chunks_exact(BYTES_PER_SAMPLE)
                .map(|chunk| {
                    Complex32::new(
                        NativeEndian::read_f32(&chunk[..4]),
                        NativeEndian::read_f32(&chunk[4..]),
                    )
                })
                .collect();
            Ok(Waveform::new(samples))
        }
    }
}

/// Create (or truncate) `path` and write the waveform to it
pub fn write_waveform_file<P: AsRef<Path>>(waveform: &Waveform, path: P) -> Result<()> {
    let file = File::create(path)?;
    write_waveform(waveform, BufWriter::new(file))
}

/// Read a waveform file, optionally only its first `count` samples
pub fn read_waveform_file<P: AsRef<Path>>(path: P, count: Option<usize>) -> Result<Waveform> {
    let file = File::open(path)?;
    read_waveform(BufReader::new(file), count)
}
