//! Core sample buffer representation.
//!
//! [`SampleBuffer<S, L>`] pairs a run of integer samples with a sample rate.
//! `S` is the integer sample type and `L` the [`ChannelLayout`] ([`Mono`] or
//! [`Stereo`]).
//!
//! # Memory Layout
//!
//! Samples live in an `Array2<S>` of shape `(channels, frames)`: one row per
//! channel, one column per frame. Frames are assembled from a column on access,
//! which lets every transform work one channel row at a time regardless of
//! layout.
//!
//! # Value Semantics
//!
//! Every transform returns a new buffer that owns its storage. The single
//! in-place operation is `reverse`, which needs `&mut self`.
//!
//! ```rust
//! use sample_buffer::{MonoBuffer, StereoBuffer};
//!
//! let mono = MonoBuffer::<i16>::from_frames_with_rate(&[1, 2, 3], 44100);
//! assert_eq!(mono.len(), 3);
//! assert_eq!(mono.sample_rate(), 44100);
//!
//! let stereo = StereoBuffer::<i8>::from_frames(&[(1, 2), (3, 4)]);
//! assert_eq!(stereo.frame_at(1).unwrap(), (3, 4));
//! assert_eq!(stereo.interleaved(), vec![1, 2, 3, 4]);
//! ```

use std::marker::PhantomData;

use ndarray::{Array2, ArrayView1};

use crate::{AudioSample, BufferError, BufferResult, ChannelLayout, Mono, Stereo};

/// An owned run of audio frames with its sample rate.
///
/// A `sample_rate` of `0` means the rate was never set.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer<S: AudioSample, L: ChannelLayout = Mono> {
    pub(crate) data: Array2<S>,
    pub(crate) sample_rate: u32,
    layout: PhantomData<L>,
}

/// Single-channel buffer.
pub type MonoBuffer<S> = SampleBuffer<S, Mono>;
/// Two-channel buffer with `(left, right)` frames.
pub type StereoBuffer<S> = SampleBuffer<S, Stereo>;

impl<S: AudioSample, L: ChannelLayout> Default for SampleBuffer<S, L> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<S: AudioSample, L: ChannelLayout> SampleBuffer<S, L> {
    /// Creates a buffer of `capacity` silent frames with no sample rate.
    pub fn new(capacity: usize) -> Self {
        Self::from_channels(Array2::zeros((L::CHANNELS, capacity)), 0)
    }

    /// Creates a buffer holding a copy of `frames`, with no sample rate.
    pub fn from_frames(frames: &[L::Frame<S>]) -> Self {
        Self::from_frames_with_rate(frames, 0)
    }

    /// Creates a buffer holding a copy of `frames` at `sample_rate`.
    pub fn from_frames_with_rate(frames: &[L::Frame<S>], sample_rate: u32) -> Self {
        let data = Array2::from_shape_fn((L::CHANNELS, frames.len()), |(channel, index)| {
            L::channel_of(&frames[index], channel)
        });
        Self::from_channels(data, sample_rate)
    }

    pub(crate) fn from_channels(data: Array2<S>, sample_rate: u32) -> Self {
        debug_assert_eq!(data.nrows(), L::CHANNELS);
        Self {
            data,
            sample_rate,
            layout: PhantomData,
        }
    }

    /// Wraps freshly computed channel data in a buffer carrying this buffer's
    /// sample rate.
    pub(crate) fn derive(&self, data: Array2<S>) -> Self {
        Self::from_channels(data, self.sample_rate)
    }

    /// Applies `f(channel, sample)` to every sample, returning a new buffer.
    pub(crate) fn map_channels<F>(&self, f: F) -> Self
    where
        F: Fn(usize, S) -> S,
    {
        let mut data = self.data.to_owned();
        for ((channel, _), sample) in data.indexed_iter_mut() {
            *sample = f(channel, *sample);
        }
        self.derive(data)
    }

    /// Returns the number of frames.
    pub fn len(&self) -> usize {
        self.data.ncols()
    }

    /// Returns true if the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of channels per frame.
    pub const fn num_channels(&self) -> usize {
        L::CHANNELS
    }

    /// Returns the total number of samples across all channels.
    pub fn total_samples(&self) -> usize {
        self.num_channels() * self.len()
    }

    /// Returns the sample rate in Hz, or `0` if it was never set.
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Returns the duration in seconds, or `None` when the sample rate is unset.
    pub fn duration_seconds(&self) -> Option<f64> {
        (self.sample_rate != 0).then(|| self.len() as f64 / f64::from(self.sample_rate))
    }

    fn check_index(&self, index: usize) -> BufferResult<()> {
        if index >= self.len() {
            return Err(BufferError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    fn frame_unchecked(&self, index: usize) -> L::Frame<S> {
        L::frame_from_fn(|channel| self.data[[channel, index]])
    }

    /// Returns the frame at `index`.
    ///
    /// # Errors
    /// [`BufferError::IndexOutOfRange`] when `index >= len()`.
    pub fn frame_at(&self, index: usize) -> BufferResult<L::Frame<S>> {
        self.check_index(index)?;
        Ok(self.frame_unchecked(index))
    }

    /// Overwrites the frame at `index`.
    ///
    /// # Errors
    /// [`BufferError::IndexOutOfRange`] when `index >= len()`.
    pub fn set_frame(&mut self, index: usize, frame: L::Frame<S>) -> BufferResult<()> {
        self.check_index(index)?;
        for channel in 0..L::CHANNELS {
            self.data[[channel, index]] = L::channel_of(&frame, channel);
        }
        Ok(())
    }

    /// Returns an owned copy of every frame in playback order.
    pub fn frames(&self) -> Vec<L::Frame<S>> {
        self.iter_frames().collect()
    }

    /// Iterates over frames in playback order.
    pub fn iter_frames(&self) -> impl ExactSizeIterator<Item = L::Frame<S>> + '_ {
        (0..self.len()).map(move |index| self.frame_unchecked(index))
    }

    /// Returns a read-only view of one channel.
    ///
    /// # Errors
    /// [`BufferError::IndexOutOfRange`] when `channel >= num_channels()`.
    pub fn channel(&self, channel: usize) -> BufferResult<ArrayView1<'_, S>> {
        if channel >= L::CHANNELS {
            return Err(BufferError::IndexOutOfRange {
                index: channel,
                len: L::CHANNELS,
            });
        }
        Ok(self.data.row(channel))
    }

    /// Returns all samples frame by frame (`L, R, L, R, ...` for stereo).
    pub fn interleaved(&self) -> Vec<S> {
        self.data.t().iter().copied().collect()
    }

    /// Returns the interleaved samples as native-endian bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        S::slice_to_bytes(&self.interleaved())
    }
}

#[cfg(feature = "editing")]
impl<S: AudioSample, L: ChannelLayout> std::ops::BitOr for &SampleBuffer<S, L> {
    type Output = SampleBuffer<S, L>;

    /// Concatenation, see [`BufferEditing::concat`](crate::BufferEditing::concat).
    fn bitor(self, rhs: Self) -> Self::Output {
        crate::BufferEditing::concat(self, rhs)
    }
}

#[cfg(feature = "editing")]
impl<S: AudioSample, L: ChannelLayout> std::ops::BitXor<std::ops::RangeInclusive<usize>>
    for &SampleBuffer<S, L>
{
    type Output = SampleBuffer<S, L>;

    /// Range exclusion, see
    /// [`BufferEditing::exclude_range`](crate::BufferEditing::exclude_range).
    fn bitxor(self, rhs: std::ops::RangeInclusive<usize>) -> Self::Output {
        crate::BufferEditing::exclude_range(self, rhs)
    }
}

#[cfg(feature = "processing")]
impl<S: AudioSample, L: ChannelLayout> std::ops::Mul<L::Gain> for &SampleBuffer<S, L> {
    type Output = SampleBuffer<S, L>;

    /// Gain, see [`BufferProcessing::gain`](crate::BufferProcessing::gain).
    fn mul(self, rhs: L::Gain) -> Self::Output {
        crate::BufferProcessing::gain(self, rhs)
    }
}

#[cfg(feature = "processing")]
impl<S: AudioSample, L: ChannelLayout> std::ops::Add for &SampleBuffer<S, L> {
    type Output = BufferResult<SampleBuffer<S, L>>;

    /// Saturating addition, see [`BufferProcessing::add`](crate::BufferProcessing::add).
    fn add(self, rhs: Self) -> Self::Output {
        crate::BufferProcessing::add(self, rhs)
    }
}

#[cfg(feature = "serialization")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename = "SampleBuffer")]
struct SerializedBuffer<S> {
    sample_rate: u32,
    channels: Vec<Vec<S>>,
}

#[cfg(feature = "serialization")]
impl<S: AudioSample> SerializedBuffer<S> {
    fn capture<L: ChannelLayout>(buffer: &SampleBuffer<S, L>) -> Self {
        Self {
            sample_rate: buffer.sample_rate,
            channels: buffer
                .data
                .axis_iter(ndarray::Axis(0))
                .map(|row| row.to_vec())
                .collect(),
        }
    }

    fn restore<L: ChannelLayout>(self) -> BufferResult<SampleBuffer<S, L>> {
        if self.channels.len() != L::CHANNELS {
            return Err(BufferError::ChannelMismatch {
                expected: L::CHANNELS,
                found: self.channels.len(),
            });
        }
        let frames = self.channels.first().map_or(0, Vec::len);
        if let Some(uneven) = self.channels.iter().find(|lane| lane.len() != frames) {
            return Err(BufferError::LengthMismatch {
                left: frames,
                right: uneven.len(),
            });
        }
        let data = Array2::from_shape_fn((L::CHANNELS, frames), |(channel, index)| {
            self.channels[channel][index]
        });
        Ok(SampleBuffer::from_channels(data, self.sample_rate))
    }
}

#[cfg(feature = "serialization")]
impl<S, L> serde::Serialize for SampleBuffer<S, L>
where
    S: AudioSample + serde::Serialize,
    L: ChannelLayout,
{
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serde::Serialize::serialize(&SerializedBuffer::capture(self), serializer)
    }
}

#[cfg(feature = "serialization")]
impl<'de, S, L> serde::Deserialize<'de> for SampleBuffer<S, L>
where
    S: AudioSample + serde::Deserialize<'de>,
    L: ChannelLayout,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <SerializedBuffer<S> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        raw.restore().map_err(<D::Error as serde::de::Error>::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_new_is_silent_and_rate_unset() {
        let mono = MonoBuffer::<i8>::new(4);
        assert_eq!(mono.frames(), vec![0, 0, 0, 0]);
        assert_eq!(mono.sample_rate(), 0);
        assert_eq!(mono.duration_seconds(), None);

        let stereo = StereoBuffer::<i16>::new(2);
        assert_eq!(stereo.frames(), vec![(0, 0), (0, 0)]);
        assert_eq!(stereo.num_channels(), 2);
        assert_eq!(stereo.total_samples(), 4);
    }

    #[test]
    fn test_new_with_zero_capacity() {
        let audio = MonoBuffer::<i8>::new(0);
        assert!(audio.is_empty());
        assert_eq!(audio, MonoBuffer::default());
    }

    #[test]
    fn test_from_frames_preserves_order() {
        let audio = MonoBuffer::<i8>::from_frames(&[1, 2, 3]);
        assert_eq!(audio.len(), 3);
        assert_eq!(audio.frames(), vec![1, 2, 3]);
        assert_eq!(audio.sample_rate(), 0);
    }

    #[test]
    fn test_from_frames_with_rate() {
        let audio = MonoBuffer::<i8>::from_frames_with_rate(&[1, 2, 3], 6);
        assert_eq!(audio.sample_rate(), 6);
        assert_eq!(audio.frames(), vec![1, 2, 3]);
        assert_eq!(audio.duration_seconds(), Some(0.5));
    }

    #[test]
    fn test_stereo_storage_is_channel_major() {
        let audio = StereoBuffer::<i16>::from_frames(&[(1, 2), (3, 4), (5, 6)]);
        assert_eq!(audio.data, array![[1i16, 3, 5], [2, 4, 6]]);
        assert_eq!(audio.channel(crate::LEFT).unwrap(), array![1i16, 3, 5]);
        assert_eq!(audio.channel(crate::RIGHT).unwrap(), array![2i16, 4, 6]);
    }

    #[test]
    fn test_frame_at_and_set_frame() {
        let mut audio = StereoBuffer::<i8>::from_frames(&[(1, 2), (3, 4)]);
        assert_eq!(audio.frame_at(0).unwrap(), (1, 2));

        audio.set_frame(1, (-5, 6)).unwrap();
        assert_eq!(audio.frames(), vec![(1, 2), (-5, 6)]);
    }

    #[test]
    fn test_out_of_range_access_fails() {
        let mut audio = MonoBuffer::<i8>::from_frames(&[1, 2, 3]);
        assert_eq!(
            audio.frame_at(3),
            Err(BufferError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(audio.set_frame(10, 0).is_err());
        assert_eq!(audio.frames(), vec![1, 2, 3]);

        assert_eq!(
            audio.channel(1).unwrap_err(),
            BufferError::IndexOutOfRange { index: 1, len: 1 }
        );
    }

    #[test]
    fn test_frames_returns_independent_copy() {
        let mut audio = MonoBuffer::<i16>::from_frames(&[1, 2]);
        let snapshot = audio.frames();
        audio.set_frame(0, 9).unwrap();
        assert_eq!(snapshot, vec![1, 2]);
    }

    #[test]
    fn test_clone_owns_its_storage() {
        let audio = MonoBuffer::<i16>::from_frames_with_rate(&[1, 2, 3], 8000);
        let mut copy = audio.clone();
        copy.set_frame(0, 100).unwrap();
        assert_eq!(audio.frame_at(0).unwrap(), 1);
        assert_eq!(copy.sample_rate(), 8000);
    }

    #[test]
    fn test_interleaved_and_bytes() {
        let audio = StereoBuffer::<i16>::from_frames(&[(1, -1), (2, -2)]);
        assert_eq!(audio.interleaved(), vec![1, -1, 2, -2]);

        let bytes = audio.to_bytes();
        assert_eq!(bytes.len(), 8);
        assert_eq!(&bytes[..2], &1i16.to_ne_bytes());
        assert_eq!(&bytes[2..4], &(-1i16).to_ne_bytes());
    }

    #[test]
    fn test_iter_frames_is_exact_size() {
        let audio = StereoBuffer::<i32>::from_frames(&[(1, 2), (3, 4), (5, 6)]);
        let iter = audio.iter_frames();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.last(), Some((5, 6)));
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn test_serde_round_trip_keeps_rate_and_frames() {
        let audio = StereoBuffer::<i16>::from_frames_with_rate(&[(1, 2), (3, 4)], 48000);
        let json = serde_json::to_string(&audio).unwrap();
        assert_eq!(json, r#"{"sample_rate":48000,"channels":[[1,3],[2,4]]}"#);

        let back: StereoBuffer<i16> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, audio);
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn test_deserialize_rejects_wrong_layout() {
        let json = r#"{"sample_rate":0,"channels":[[1,3],[2,4]]}"#;
        assert!(serde_json::from_str::<MonoBuffer<i16>>(json).is_err());

        let ragged = r#"{"sample_rate":0,"channels":[[1,3],[2]]}"#;
        assert!(serde_json::from_str::<StereoBuffer<i16>>(ragged).is_err());
    }
}
