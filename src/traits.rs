//! Core traits describing the integer sample types a buffer can hold.

use bytemuck::NoUninit;
use num_traits::{PrimInt, Signed};
use std::fmt::{Debug, Display};

/// Core trait defining the interface for audio sample types.
///
/// Implemented for the fixed-width signed integers `i8`, `i16`, `i32` and `i64`.
/// Besides the representable range it carries the two arithmetic primitives every
/// buffer transform is built from: [`saturating_high_add`](Self::saturating_high_add)
/// and [`scale_truncating`](Self::scale_truncating). Both are applied one channel
/// value at a time, so mono and stereo share the same arithmetic.
pub trait AudioSample:
    // Standard library traits
    Copy
    + Default
    + Display
    + Debug
    + Send
    + Sync
    + 'static

    // External crate traits
    + PrimInt // num-traits: fixed-width integer arithmetic, zero/one, bounds
    + Signed // num-traits: signed types only
    + NoUninit // bytemuck: safe to view as raw bytes
{
    /// Maximum representable value for this sample type.
    const MAX: Self;
    /// Minimum representable value for this sample type.
    const MIN: Self;
    /// Bit depth of this sample type.
    const BITS: u8;
    /// Label used for display and log purposes.
    const LABEL: &'static str;

    /// Widens this sample into the `i128` domain used for intermediate sums.
    fn to_wide(self) -> i128;

    /// Narrows an `i128` back to this type with two's-complement wrapping,
    /// the same as an `as` cast.
    fn from_wide_wrapping(wide: i128) -> Self;

    /// Returns the raw (not normalised) value as `f64`.
    fn as_f64(self) -> f64;

    /// Adds two samples, clamping only the upper bound.
    ///
    /// The sum is formed in `i128`. A sum at or above [`Self::MAX`] yields
    /// `MAX`; anything else is narrowed as-is, so a sum below [`Self::MIN`]
    /// wraps around instead of clamping to `MIN`.
    ///
    /// ```
    /// use sample_buffer::AudioSample;
    ///
    /// assert_eq!(20_000i16.saturating_high_add(20_000), i16::MAX);
    /// assert_eq!((-100i8).saturating_high_add(-100), 56);
    /// ```
    #[inline]
    fn saturating_high_add(self, other: Self) -> Self {
        let sum = self.to_wide() + other.to_wide();
        if sum >= Self::MAX.to_wide() {
            Self::MAX
        } else {
            Self::from_wide_wrapping(sum)
        }
    }

    /// Multiplies the sample by `factor` in floating point and truncates
    /// toward zero.
    ///
    /// No saturation is applied: a product outside the representable range
    /// wraps when narrowed back to `Self`.
    ///
    /// ```
    /// use sample_buffer::AudioSample;
    ///
    /// assert_eq!(3i8.scale_truncating(0.5), 1);
    /// assert_eq!((-3i8).scale_truncating(0.5), -1);
    /// ```
    #[inline]
    fn scale_truncating(self, factor: f64) -> Self {
        let scaled = (self.as_f64() * factor).trunc();
        Self::from_wide_wrapping(scaled as i128)
    }

    #[inline]
    /// Convert a slice of samples into a byte vector in native-endian order.
    fn slice_to_bytes(samples: &[Self]) -> Vec<u8> {
        Vec::from(bytemuck::cast_slice::<Self, u8>(samples))
    }
}

macro_rules! impl_audio_sample {
    ($($type:ty),+ $(,)?) => {
        $(
            impl AudioSample for $type {
                const MAX: Self = <$type>::MAX;
                const MIN: Self = <$type>::MIN;
                const BITS: u8 = <$type>::BITS as u8;
                const LABEL: &'static str = stringify!($type);

                #[inline(always)]
                fn to_wide(self) -> i128 {
                    self as i128
                }

                #[inline(always)]
                fn from_wide_wrapping(wide: i128) -> Self {
                    wide as $type
                }

                #[inline(always)]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}

impl_audio_sample!(i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_and_bits() {
        assert_eq!(<i8 as AudioSample>::MAX, 127);
        assert_eq!(<i16 as AudioSample>::MIN, -32768);
        assert_eq!(<i32 as AudioSample>::BITS, 32);
        assert_eq!(<i64 as AudioSample>::LABEL, "i64");
    }

    #[test]
    fn test_saturating_high_add_clamps_positive_overflow() {
        assert_eq!(100i8.saturating_high_add(27), i8::MAX);
        assert_eq!(100i8.saturating_high_add(100), i8::MAX);
        assert_eq!(i64::MAX.saturating_high_add(1), i64::MAX);
        assert_eq!(1i16.saturating_high_add(2), 3);
    }

    #[test]
    fn test_saturating_high_add_wraps_negative_overflow() {
        // -200 narrowed to i8
        assert_eq!((-100i8).saturating_high_add(-100), 56);
        assert_eq!(i16::MIN.saturating_high_add(-1), i16::MAX);
        assert_eq!((-100i8).saturating_high_add(-28), i8::MIN);
    }

    #[test]
    fn test_scale_truncating() {
        assert_eq!(1i8.scale_truncating(0.5), 0);
        assert_eq!(2i8.scale_truncating(0.5), 1);
        assert_eq!(3i8.scale_truncating(0.5), 1);
        assert_eq!((-7i16).scale_truncating(0.5), -3);
        assert_eq!(100i32.scale_truncating(0.0), 0);
    }

    #[test]
    fn test_scale_truncating_wraps_instead_of_saturating() {
        // 300 narrowed to i8
        assert_eq!(100i8.scale_truncating(3.0), 44);
    }

    #[test]
    fn test_slice_to_bytes_is_native_endian() {
        let bytes = i16::slice_to_bytes(&[1, -1]);
        let mut expected = 1i16.to_ne_bytes().to_vec();
        expected.extend_from_slice(&(-1i16).to_ne_bytes());
        assert_eq!(bytes, expected);
    }
}
