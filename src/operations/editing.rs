//! Time-domain editing operations for SampleBuffer.
//!
//! This module implements the BufferEditing trait: joining, cutting out a
//! window, reversing, and the linear fade envelopes.

use std::ops::RangeInclusive;

use super::traits::BufferEditing;
use crate::{AudioSample, ChannelLayout, SampleBuffer};
use ndarray::{Array2, Axis, s};
use tracing::{debug, trace};

/// Helper function to convert whole seconds to a frame count
fn seconds_to_frames(seconds: u32, sample_rate: u32) -> u64 {
    u64::from(seconds) * u64::from(sample_rate)
}

impl<S: AudioSample, L: ChannelLayout> SampleBuffer<S, L> {
    /// Scales the leading ramp window by `envelope(k / ramp_length)` for ramp
    /// position `k` in `1..ramp_length` (frame index `k - 1`).
    fn apply_leading_ramp<F>(&self, seconds: u32, envelope: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let ramp_length = seconds_to_frames(seconds, self.sample_rate);
        let mut data = self.data.to_owned();

        // A ramp of 0 or 1 frames has no positions to scale.
        if ramp_length > 1 {
            let positions = ramp_length - 1;
            let window = usize::try_from(positions).map_or(self.len(), |p| p.min(self.len()));
            if (window as u64) < positions {
                debug!(
                    ramp_length,
                    frames = self.len(),
                    "fade ramp is longer than the buffer, clipping"
                );
            }

            let ramp = ramp_length as f64;
            for ((_, index), sample) in data.slice_mut(s![.., ..window]).indexed_iter_mut() {
                let position = (index + 1) as f64 / ramp;
                *sample = sample.scale_truncating(envelope(position));
            }
        }

        self.derive(data)
    }
}

impl<S: AudioSample, L: ChannelLayout> BufferEditing<S, L> for SampleBuffer<S, L> {
    fn concat(&self, other: &Self) -> Self {
        let split = self.len();
        let total = split + other.len();
        trace!(left = split, right = other.len(), "concatenating buffers");

        let mut joined = Array2::<S>::zeros((L::CHANNELS, total));
        joined.slice_mut(s![.., ..split]).assign(&self.data);
        joined.slice_mut(s![.., split..]).assign(&other.data);
        self.derive(joined)
    }

    fn exclude_range(&self, range: RangeInclusive<usize>) -> Self {
        let kept: Vec<usize> = (0..self.len())
            .filter(|index| !range.contains(index))
            .collect();
        self.derive(self.data.select(Axis(1), &kept))
    }

    fn reverse(&mut self) {
        self.data.invert_axis(Axis(1));
    }

    fn fade_in(&self, seconds: u32) -> Self {
        self.apply_leading_ramp(seconds, |position| position)
    }

    fn fade_out(&self, seconds: u32) -> Self {
        self.apply_leading_ramp(seconds, |position| 1.0 - position)
    }
}
