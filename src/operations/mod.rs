//! Buffer transforms and analysis.
//!
//! The operation set is organized into focused traits, each gated by a Cargo
//! feature of the same name as its module:
//!
//! - [`traits`] - Trait definitions
//! - [`statistics`] - RMS measurement
//! - [`processing`] - Gain, saturating addition, ranged mixing, normalisation
//! - [`editing`] - Concatenation, range exclusion, reversal, fades
//!
//! ## Quick Start
//!
//! ```rust
//! use sample_buffer::{BufferEditing, BufferProcessing, BufferStatistics, MonoBuffer};
//!
//! # fn run() -> Result<(), sample_buffer::BufferError> {
//! let audio = MonoBuffer::<i16>::from_frames_with_rate(&[1, 2, 3], 44100);
//!
//! let louder = audio.gain(2.0);
//! let rms = louder.rms()?;
//! let normalized = louder.normalize(rms, 1000.0)?;
//! let joined = audio.concat(&normalized);
//! assert_eq!(joined.len(), 6);
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```

pub mod traits;

#[cfg(feature = "editing")]
pub mod editing;
#[cfg(feature = "processing")]
pub mod processing;
#[cfg(feature = "statistics")]
pub mod statistics;

#[cfg(feature = "editing")]
pub use traits::BufferEditing;
#[cfg(feature = "processing")]
pub use traits::BufferProcessing;
#[cfg(feature = "statistics")]
pub use traits::BufferStatistics;
