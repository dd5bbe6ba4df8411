//! Waveform and sequence serialization
//!
//! - `binary`: flat complex sample files consumed by the correlation tooling
//! - `text`: one value per line, for inspecting raw sequences

pub mod binary;
pub mod text;

pub use binary::{read_waveform, read_waveform_file, write_waveform, write_waveform_file};
pub use text::{read_levels, read_levels_file, write_levels, write_levels_file};
