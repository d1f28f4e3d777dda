//! Trait definitions for the buffer operation set.
//!
//! Operations are split by concern, each trait behind its own Cargo feature:
//!
//! - [`BufferStatistics`] (`statistics`): loudness measurement
//! - [`BufferProcessing`] (`processing`): gain, mixing and normalisation
//! - [`BufferEditing`] (`editing`): time-domain cutting, joining and envelopes
//!
//! All of them are implemented for [`SampleBuffer`](crate::SampleBuffer).

#[cfg(any(feature = "processing", feature = "editing"))]
use std::ops::RangeInclusive;

#[cfg(any(feature = "statistics", feature = "processing"))]
use crate::BufferResult;
#[cfg(any(feature = "statistics", feature = "processing", feature = "editing"))]
use crate::{AudioSample, ChannelLayout};

/// Statistical analysis of a buffer.
#[cfg(feature = "statistics")]
pub trait BufferStatistics<S: AudioSample, L: ChannelLayout> {
    /// Root-mean-square level of each channel.
    ///
    /// `sqrt(sum(x^2) / N)` computed in `f64` over the raw integer values.
    /// Mono returns a single level, stereo a `(left, right)` pair.
    ///
    /// # Errors
    /// [`BufferError::EmptyBuffer`](crate::BufferError::EmptyBuffer) when the
    /// buffer has no frames.
    fn rms(&self) -> BufferResult<L::Level>;
}

/// Level changes and mixing.
///
/// Every method returns a new buffer carrying the sample rate of `self`.
#[cfg(feature = "processing")]
pub trait BufferProcessing<S: AudioSample, L: ChannelLayout> {
    /// Multiplies every sample by the gain for its channel.
    ///
    /// Products are truncated toward zero and narrowed with wrapping; there is
    /// no saturation.
    fn gain(&self, gain: L::Gain) -> Self
    where
        Self: Sized;

    /// Sample-wise addition that clamps positive overflow to `S::MAX`.
    ///
    /// Negative overflow is not clamped, see
    /// [`AudioSample::saturating_high_add`].
    ///
    /// # Errors
    /// [`BufferError::LengthMismatch`](crate::BufferError::LengthMismatch)
    /// when the buffers differ in length.
    fn add(&self, other: &Self) -> BufferResult<Self>
    where
        Self: Sized;

    /// Mixes the window `range` of `self` with the window `other_range` of
    /// `other` using [`add`](Self::add).
    ///
    /// Both ranges are inclusive. The result holds `range.end() - range.start() + 1`
    /// frames.
    ///
    /// # Errors
    /// - [`BufferError::InvalidRange`](crate::BufferError::InvalidRange) if a
    ///   range starts after it ends
    /// - [`BufferError::IndexOutOfRange`](crate::BufferError::IndexOutOfRange)
    ///   if a range reaches past its buffer
    /// - [`BufferError::LengthMismatch`](crate::BufferError::LengthMismatch)
    ///   if the two windows differ in width
    fn ranged_add(
        &self,
        range: RangeInclusive<usize>,
        other: &Self,
        other_range: RangeInclusive<usize>,
    ) -> BufferResult<Self>
    where
        Self: Sized;

    /// Scales each channel by `desired_rms / current_rms`.
    ///
    /// `current_rms` is supplied by the caller (usually from
    /// `BufferStatistics::rms`), it is not recomputed here.
    ///
    /// # Errors
    /// [`BufferError::DivisionByZero`](crate::BufferError::DivisionByZero)
    /// when any component of `current_rms` is zero.
    fn normalize(&self, current_rms: L::Level, desired_rms: f64) -> BufferResult<Self>
    where
        Self: Sized;
}

/// Time-domain editing operations.
///
/// Everything except [`reverse`](Self::reverse) returns a new buffer with the
/// sample rate of `self`.
#[cfg(feature = "editing")]
pub trait BufferEditing<S: AudioSample, L: ChannelLayout> {
    /// Returns `self` followed by `other`.
    fn concat(&self, other: &Self) -> Self
    where
        Self: Sized;

    /// Removes the inclusive window `range`, keeping every other frame in order.
    ///
    /// Parts of the window beyond the end of the buffer remove nothing.
    fn exclude_range(&self, range: RangeInclusive<usize>) -> Self
    where
        Self: Sized;

    /// Reverses the frame order in place.
    fn reverse(&mut self);

    /// Linear ramp up over the first `seconds * sample_rate` frames.
    ///
    /// Frame `k - 1` is scaled by `k / ramp_length` for `k` in
    /// `1..ramp_length`; every later frame is left untouched.
    fn fade_in(&self, seconds: u32) -> Self
    where
        Self: Sized;

    /// Linear ramp down over the first `seconds * sample_rate` frames.
    ///
    /// Frame `k - 1` is scaled by `1 - k / ramp_length` for `k` in
    /// `1..ramp_length`. Like [`fade_in`](Self::fade_in) the ramp covers the
    /// leading window only; frames after it keep their full amplitude.
    fn fade_out(&self, seconds: u32) -> Self
    where
        Self: Sized;
}
