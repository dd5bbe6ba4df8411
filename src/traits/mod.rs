//! Core DSP traits for waveform preparation
//!
//! The formatter only needs to know the shaping kernel; everything
//! else in the pipeline is plain data.

mod pulse_shape;

pub use pulse_shape::PulseShape;
