// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)] // Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_const_for_fn)] // Suggests making eligible functions `const`
#![deny(missing_docs)] // Documentation is a must for release

//! # SampleBuffer
//!
//! In-memory audio sample buffers over fixed-width signed integers, with a small
//! closed set of editing transforms: concatenation, gain, saturating addition,
//! range exclusion, reversal, ranged mixing, RMS normalisation and linear fades.
//!
//! There is no I/O here. Buffers are built from and handed back as in-memory
//! frame sequences; decoding, playback and resampling belong to the caller.
//!
//! ## Features
//!
//! - `statistics`: [`BufferStatistics`] (RMS)
//! - `processing`: [`BufferProcessing`] (gain, add, ranged add, normalize)
//! - `editing`: [`BufferEditing`] (concat, exclude range, reverse, fades)
//! - `serialization`: serde support for [`SampleBuffer`]
//!
//! The first three are on by default; `full` enables everything.
//!
//! ## Error Handling
//!
//! Fallible operations return [`BufferResult`]:
//!
//! ```rust
//! use sample_buffer::{BufferError, BufferProcessing, MonoBuffer};
//!
//! let a = MonoBuffer::<i16>::from_frames(&[1, 2, 3]);
//! let b = MonoBuffer::<i16>::from_frames(&[1, 2]);
//!
//! match a.add(&b) {
//!     Ok(_) => unreachable!(),
//!     Err(BufferError::LengthMismatch { left, right }) => assert_eq!((left, right), (3, 2)),
//!     Err(other) => panic!("unexpected error: {other}"),
//! }
//! ```
//!
//! ## Quick Start
//!
//! ### Creating Buffers
//!
//! ```rust
//! use sample_buffer::{MonoBuffer, StereoBuffer};
//!
//! // Three mono frames at 44.1 kHz
//! let mono = MonoBuffer::<i16>::from_frames_with_rate(&[100, -200, 300], 44100);
//!
//! // Stereo frames are (left, right) pairs
//! let stereo = StereoBuffer::<i8>::from_frames(&[(1, 2), (3, 4)]);
//!
//! // Silence with no sample rate
//! let silent = MonoBuffer::<i32>::new(1024);
//! assert_eq!(silent.sample_rate(), 0);
//! ```
//!
//! ### Operators
//!
//! ```rust
//! use sample_buffer::StereoBuffer;
//!
//! let a = StereoBuffer::<i16>::from_frames(&[(1, 2), (20000, 3)]);
//! let b = StereoBuffer::<i16>::from_frames(&[(5, 6), (20000, 7)]);
//!
//! let joined = &a | &b; // concatenation
//! assert_eq!(joined.len(), 4);
//!
//! let quieter = &a * (0.5, 1.0); // per-channel gain
//! assert_eq!(quieter.frame_at(1).unwrap(), (10000, 3));
//!
//! let mixed = (&a + &b).unwrap(); // saturating addition
//! assert_eq!(mixed.frame_at(1).unwrap(), (i16::MAX, 10));
//!
//! let cut = &joined ^ (1..=2); // remove frames 1 and 2
//! assert_eq!(cut.frames(), vec![(1, 2), (20000, 7)]);
//! ```
//!
//! ### Loudness
//!
//! ```rust
//! use sample_buffer::{BufferProcessing, BufferStatistics, MonoBuffer};
//!
//! let audio = MonoBuffer::<i8>::from_frames(&[1, 2, 3]);
//! let rms = audio.rms().unwrap(); // sqrt(14 / 3)
//! let louder = audio.normalize(rms, 7.0).unwrap();
//! assert_eq!(louder.frame_at(0).unwrap(), 3);
//! ```
//!
//! ## Overflow
//!
//! Additive operations clamp only the positive side: a sum at or above
//! `S::MAX` becomes `S::MAX`, a sum below `S::MIN` wraps. Scaling (gain,
//! normalisation, fades) truncates toward zero and wraps on overflow. See
//! [`AudioSample`].
//!
//! ## License
//!
//! MIT License

mod channels;
mod error;
mod repr;

#[cfg(any(feature = "statistics", feature = "processing", feature = "editing"))]
pub mod operations;

/// Core traits for sample types.
pub mod traits;

pub use crate::channels::{ChannelLayout, Mono, Stereo};
pub use crate::error::{BufferError, BufferResult};
#[cfg(feature = "editing")]
pub use crate::operations::BufferEditing;
#[cfg(feature = "processing")]
pub use crate::operations::BufferProcessing;
#[cfg(feature = "statistics")]
pub use crate::operations::BufferStatistics;
pub use crate::repr::{MonoBuffer, SampleBuffer, StereoBuffer};
pub use crate::traits::AudioSample;

/// Left channel index.
pub const LEFT: usize = 0;
/// Right channel index.
pub const RIGHT: usize = 1;
