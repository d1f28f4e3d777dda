//! Channel layouts: the type-level switch between mono and stereo buffers.
//!
//! A [`SampleBuffer`](crate::SampleBuffer) is generic over a layout marker that
//! fixes how many channels it stores and what one frame looks like:
//!
//! | Layout     | Frame      | Gain         | RMS level    |
//! |------------|------------|--------------|--------------|
//! | [`Mono`]   | `S`        | `f32`        | `f64`        |
//! | [`Stereo`] | `(S, S)`   | `(f32, f32)` | `(f64, f64)` |
//!
//! Stereo tuples are always ordered `(left, right)`.

use crate::{AudioSample, LEFT, RIGHT};
use std::fmt::Debug;

mod private {
    pub trait Sealed {}

    impl Sealed for super::Mono {}
    impl Sealed for super::Stereo {}
}

/// Describes how frames of a buffer split into per-channel samples.
///
/// This trait is sealed; [`Mono`] and [`Stereo`] are the only layouts.
pub trait ChannelLayout:
    private::Sealed + Copy + Debug + Default + PartialEq + Eq + Send + Sync + 'static
{
    /// Number of channels stored per frame.
    const CHANNELS: usize;
    /// Human-readable layout name.
    const NAME: &'static str;

    /// One time slice of audio.
    type Frame<S: AudioSample>: Copy + Debug + PartialEq + Send + Sync;
    /// Per-channel gain factors.
    type Gain: Copy + Debug;
    /// Per-channel loudness levels, as returned by `rms`.
    type Level: Copy + Debug + PartialEq;

    /// Returns the sample of `frame` on `channel`.
    ///
    /// `channel` must be below [`Self::CHANNELS`].
    fn channel_of<S: AudioSample>(frame: &Self::Frame<S>, channel: usize) -> S;

    /// Builds a frame by asking `f` for each channel in order.
    fn frame_from_fn<S: AudioSample>(f: impl FnMut(usize) -> S) -> Self::Frame<S>;

    /// Returns the gain factor applied to `channel`.
    fn gain_of(gain: &Self::Gain, channel: usize) -> f32;

    /// Returns the level component for `channel`.
    fn level_of(level: &Self::Level, channel: usize) -> f64;

    /// Builds a level by asking `f` for each channel in order.
    fn level_from_fn(f: impl FnMut(usize) -> f64) -> Self::Level;
}

/// Single-channel layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mono;

/// Two-channel layout with frames ordered `(left, right)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Stereo;

impl ChannelLayout for Mono {
    const CHANNELS: usize = 1;
    const NAME: &'static str = "mono";

    type Frame<S: AudioSample> = S;
    type Gain = f32;
    type Level = f64;

    #[inline]
    fn channel_of<S: AudioSample>(frame: &Self::Frame<S>, _channel: usize) -> S {
        *frame
    }

    #[inline]
    fn frame_from_fn<S: AudioSample>(mut f: impl FnMut(usize) -> S) -> Self::Frame<S> {
        f(0)
    }

    #[inline]
    fn gain_of(gain: &f32, _channel: usize) -> f32 {
        *gain
    }

    #[inline]
    fn level_of(level: &f64, _channel: usize) -> f64 {
        *level
    }

    #[inline]
    fn level_from_fn(mut f: impl FnMut(usize) -> f64) -> f64 {
        f(0)
    }
}

impl ChannelLayout for Stereo {
    const CHANNELS: usize = 2;
    const NAME: &'static str = "stereo";

    type Frame<S: AudioSample> = (S, S);
    type Gain = (f32, f32);
    type Level = (f64, f64);

    #[inline]
    fn channel_of<S: AudioSample>(frame: &Self::Frame<S>, channel: usize) -> S {
        match channel {
            LEFT => frame.0,
            _ => frame.1,
        }
    }

    #[inline]
    fn frame_from_fn<S: AudioSample>(mut f: impl FnMut(usize) -> S) -> Self::Frame<S> {
        let left = f(LEFT);
        let right = f(RIGHT);
        (left, right)
    }

    #[inline]
    fn gain_of(gain: &(f32, f32), channel: usize) -> f32 {
        match channel {
            LEFT => gain.0,
            _ => gain.1,
        }
    }

    #[inline]
    fn level_of(level: &(f64, f64), channel: usize) -> f64 {
        match channel {
            LEFT => level.0,
            _ => level.1,
        }
    }

    #[inline]
    fn level_from_fn(mut f: impl FnMut(usize) -> f64) -> (f64, f64) {
        let left = f(LEFT);
        let right = f(RIGHT);
        (left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stereo_frame_round_trips_through_channels() {
        let frame = (3i16, -4i16);
        let rebuilt = Stereo::frame_from_fn(|channel| Stereo::channel_of::<i16>(&frame, channel));
        assert_eq!(rebuilt, frame);
        assert_eq!(Stereo::channel_of::<i16>(&frame, RIGHT), -4);
    }

    #[test]
    fn test_mono_ignores_channel_index() {
        assert_eq!(Mono::channel_of::<i8>(&7, 0), 7);
        assert_eq!(Mono::gain_of(&0.5, 0), 0.5);
        assert_eq!(Mono::CHANNELS, 1);
    }

    #[test]
    fn test_stereo_components_are_independent() {
        let gain = (0.25f32, 2.0f32);
        assert_eq!(Stereo::gain_of(&gain, LEFT), 0.25);
        assert_eq!(Stereo::gain_of(&gain, RIGHT), 2.0);

        let level = Stereo::level_from_fn(|channel| channel as f64 + 1.0);
        assert_eq!(level, (1.0, 2.0));
        assert_eq!(Stereo::level_of(&level, RIGHT), 2.0);
    }
}
