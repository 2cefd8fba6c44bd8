//! # Primitive Types
//!
//! The SBE primitive set and the default bounds the schema assigns to each
//! width.
//!
//! | Kind     | Null value | Min          | Max          |
//! |----------|------------|--------------|--------------|
//! | unsigned | `MAX`      | `0`          | `MAX - 1`    |
//! | signed   | `MIN`      | `MIN + 1`    | `MAX`        |
//! | float    | `NaN`      | `-MAX`       | `MAX`        |
//!
//! The null value is always outside `[min, max]`, so it can stand for
//! "absent" without colliding with a legal reading.

use std::fmt;
use std::io::{Read, Write};

use super::error::SbeResult;
use super::marshal::{WireRead, WireWrite};

/// A fixed-width value that can appear in a message's fixed block.
pub trait Primitive:
    Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Encoded width in bytes.
    const SIZE: usize;
    /// Default minimum legal value.
    const MIN_VALUE: Self;
    /// Default maximum legal value.
    const MAX_VALUE: Self;
    /// Default null sentinel.
    const NULL_VALUE: Self;

    /// Reads one value from the stream.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::ShortRead` or `SbeError::Io` on stream failure.
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> SbeResult<Self>;

    /// Writes this value to the stream.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::Io` on stream failure.
    fn write_to<W: Write + ?Sized>(self, writer: &mut W) -> SbeResult<()>;

    /// Converts a wide integer into this type if it is representable.
    fn from_i128(value: i128) -> Option<Self>;

    /// Sentinel comparison. Identical to `==` except that NaN matches NaN.
    #[inline]
    fn is_same(self, other: Self) -> bool {
        self == other
    }
}

/// Unsigned primitives usable as choice-set encodings.
pub trait Unsigned: Primitive {
    /// Number of addressable bits.
    const BITS: u32;

    /// Widens to `u64` without loss.
    fn to_u64(self) -> u64;

    /// Narrows from `u64`, dropping bits above [`Unsigned::BITS`].
    fn from_u64_truncating(bits: u64) -> Self;
}

macro_rules! unsigned_primitive {
    ($($ty:ty => $read:ident, $write:ident);* $(;)?) => {
        $(
            impl Primitive for $ty {
                const SIZE: usize = size_of::<$ty>();
                const MIN_VALUE: Self = 0;
                const MAX_VALUE: Self = <$ty>::MAX - 1;
                const NULL_VALUE: Self = <$ty>::MAX;

                #[inline]
                fn read_from<R: Read + ?Sized>(reader: &mut R) -> SbeResult<Self> {
                    reader.$read()
                }

                #[inline]
                fn write_to<W: Write + ?Sized>(self, writer: &mut W) -> SbeResult<()> {
                    writer.$write(self)
                }

                #[inline]
                fn from_i128(value: i128) -> Option<Self> {
                    Self::try_from(value).ok()
                }
            }

            impl Unsigned for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn to_u64(self) -> u64 {
                    u64::from(self)
                }

                #[inline]
                #[allow(clippy::cast_possible_truncation)]
                fn from_u64_truncating(bits: u64) -> Self {
                    bits as $ty
                }
            }
        )*
    };
}

macro_rules! signed_primitive {
    ($($ty:ty => $read:ident, $write:ident);* $(;)?) => {
        $(
            impl Primitive for $ty {
                const SIZE: usize = size_of::<$ty>();
                const MIN_VALUE: Self = <$ty>::MIN + 1;
                const MAX_VALUE: Self = <$ty>::MAX;
                const NULL_VALUE: Self = <$ty>::MIN;

                #[inline]
                fn read_from<R: Read + ?Sized>(reader: &mut R) -> SbeResult<Self> {
                    reader.$read()
                }

                #[inline]
                fn write_to<W: Write + ?Sized>(self, writer: &mut W) -> SbeResult<()> {
                    writer.$write(self)
                }

                #[inline]
                fn from_i128(value: i128) -> Option<Self> {
                    Self::try_from(value).ok()
                }
            }
        )*
    };
}

macro_rules! float_primitive {
    ($($ty:ty => $read:ident, $write:ident);* $(;)?) => {
        $(
            impl Primitive for $ty {
                const SIZE: usize = size_of::<$ty>();
                const MIN_VALUE: Self = -<$ty>::MAX;
                const MAX_VALUE: Self = <$ty>::MAX;
                const NULL_VALUE: Self = <$ty>::NAN;

                #[inline]
                fn read_from<R: Read + ?Sized>(reader: &mut R) -> SbeResult<Self> {
                    reader.$read()
                }

                #[inline]
                fn write_to<W: Write + ?Sized>(self, writer: &mut W) -> SbeResult<()> {
                    writer.$write(self)
                }

                #[inline]
                #[allow(clippy::cast_precision_loss)]
                fn from_i128(value: i128) -> Option<Self> {
                    Some(value as $ty)
                }

                #[inline]
                fn is_same(self, other: Self) -> bool {
                    (self.is_nan() && other.is_nan()) || self.to_bits() == other.to_bits()
                }
            }
        )*
    };
}

unsigned_primitive! {
    u8 => read_u8, write_u8;
    u16 => read_u16, write_u16;
    u32 => read_u32, write_u32;
    u64 => read_u64, write_u64;
}

signed_primitive! {
    i8 => read_i8, write_i8;
    i16 => read_i16, write_i16;
    i32 => read_i32, write_i32;
    i64 => read_i64, write_i64;
}

float_primitive! {
    f32 => read_f32, write_f32;
    f64 => read_f64, write_f64;
}
