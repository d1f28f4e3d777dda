//! Level and mixing operations for SampleBuffer.
//!
//! Gain and normalisation both reduce to [`AudioSample::scale_truncating`]
//! with a per-channel factor; addition and ranged mixing reduce to
//! [`AudioSample::saturating_high_add`].

use std::ops::RangeInclusive;

use super::traits::BufferProcessing;
use crate::{AudioSample, BufferError, BufferResult, ChannelLayout, SampleBuffer};
use ndarray::{Zip, s};
use tracing::debug;

impl<S: AudioSample, L: ChannelLayout> SampleBuffer<S, L> {
    /// Copies the inclusive window `range` into a new buffer.
    fn window(&self, range: &RangeInclusive<usize>) -> BufferResult<Self> {
        let (start, end) = (*range.start(), *range.end());
        if start > end {
            return Err(BufferError::InvalidRange { start, end });
        }
        if end >= self.len() {
            return Err(BufferError::IndexOutOfRange {
                index: end,
                len: self.len(),
            });
        }
        Ok(self.derive(self.data.slice(s![.., start..=end]).to_owned()))
    }
}

impl<S: AudioSample, L: ChannelLayout> BufferProcessing<S, L> for SampleBuffer<S, L> {
    fn gain(&self, gain: L::Gain) -> Self {
        self.map_channels(|channel, sample| {
            sample.scale_truncating(f64::from(L::gain_of(&gain, channel)))
        })
    }

    fn add(&self, other: &Self) -> BufferResult<Self> {
        if self.len() != other.len() {
            debug!(
                left = self.len(),
                right = other.len(),
                "refusing to add buffers of different lengths"
            );
            return Err(BufferError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }

        let mut data = self.data.to_owned();
        Zip::from(&mut data)
            .and(&other.data)
            .for_each(|lhs, &rhs| *lhs = lhs.saturating_high_add(rhs));
        Ok(self.derive(data))
    }

    fn ranged_add(
        &self,
        range: RangeInclusive<usize>,
        other: &Self,
        other_range: RangeInclusive<usize>,
    ) -> BufferResult<Self> {
        let lhs = self.window(&range)?;
        let rhs = other.window(&other_range)?;
        lhs.add(&rhs)
    }

    fn normalize(&self, current_rms: L::Level, desired_rms: f64) -> BufferResult<Self> {
        let mut ratios = Vec::with_capacity(L::CHANNELS);
        for channel in 0..L::CHANNELS {
            let current = L::level_of(&current_rms, channel);
            if current == 0.0 {
                debug!(channel, "refusing to normalise against a zero RMS level");
                return Err(BufferError::DivisionByZero { channel });
            }
            ratios.push(desired_rms / current);
        }

        Ok(self.map_channels(|channel, sample| sample.scale_truncating(ratios[channel])))
    }
}
