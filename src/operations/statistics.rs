//! Statistical analysis operations for SampleBuffer.

use super::traits::BufferStatistics;
use crate::{AudioSample, BufferError, BufferResult, ChannelLayout, SampleBuffer};
use ndarray::Axis;

impl<S: AudioSample, L: ChannelLayout> BufferStatistics<S, L> for SampleBuffer<S, L> {
    fn rms(&self) -> BufferResult<L::Level> {
        if self.is_empty() {
            return Err(BufferError::EmptyBuffer("rms"));
        }

        let frames = self.len() as f64;
        let lanes = self.data.axis_iter(Axis(0));
        let mean_squares: Vec<f64> = lanes
            .map(|lane| {
                let sum_of_squares = lane.fold(0.0, |acc, &x| {
                    let x = x.as_f64();
                    acc + x * x
                });
                sum_of_squares / frames
            })
            .collect();

        Ok(L::level_from_fn(|channel| mean_squares[channel].sqrt()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MonoBuffer, StereoBuffer};
    use approx_eq::assert_approx_eq;

    #[test]
    fn test_rms_mono() {
        let audio = MonoBuffer::<i8>::from_frames(&[1, 2, 3]);
        let rms = audio.rms().unwrap();
        assert_approx_eq!(rms, (14.0f64 / 3.0).sqrt(), 1e-12);
        assert_approx_eq!(rms, 2.160, 1e-3);
    }

    #[test]
    fn test_rms_of_silence_is_zero() {
        let audio = MonoBuffer::<i16>::new(64);
        assert_eq!(audio.rms().unwrap(), 0.0);
    }

    #[test]
    fn test_rms_stereo_per_channel() {
        let audio = StereoBuffer::<i8>::from_frames(&[(1, 2), (3, 4)]);
        let (left, right) = audio.rms().unwrap();
        assert_approx_eq!(left, (10.0f64 / 2.0).sqrt(), 1e-12);
        assert_approx_eq!(right, (20.0f64 / 2.0).sqrt(), 1e-12);
    }

    #[test]
    fn test_rms_handles_extreme_values_without_overflow() {
        let audio = MonoBuffer::<i64>::from_frames(&[i64::MIN, i64::MAX]);
        let rms = audio.rms().unwrap();
        assert!(rms.is_finite());
        assert!(rms > 9.2e18);
    }

    #[test]
    fn test_rms_of_empty_buffer_fails() {
        let audio = StereoBuffer::<i16>::new(0);
        assert_eq!(audio.rms(), Err(BufferError::EmptyBuffer("rms")));
    }
}
