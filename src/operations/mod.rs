//! Buffer operations, one trait per concern.
//!
//! - [`traits`] - trait definitions
//! - [`editing`] - time-domain editing (reverse, trim, cut, concat, mix)
//! - [`statistics`] - loudness measurement (RMS)
//! - [`processing`] - amplitude shaping (gain, normalize)
//!
//! Every operation is a pure function over its validated inputs: receivers
//! and operands are never mutated, and results come back as new buffers.

pub mod editing;
pub mod processing;
pub mod statistics;
pub mod traits;

pub use traits::{AudioEditing, AudioProcessing, AudioStatistics};
