//! # Primitive Marshaller
//!
//! Little-endian reads and writes of fixed-width values over any
//! [`std::io::Read`] / [`std::io::Write`].
//!
//! This is the only layer that touches the byte stream. It knows nothing
//! about null values, bounds or schema versions; it only moves bytes and
//! advances the stream cursor.

use std::io::{self, ErrorKind, Read, Write};

use super::error::{SbeError, SbeResult};

macro_rules! read_le {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Reads a little-endian `", stringify!($ty), "`.")]
            ///
            /// # Errors
            ///
            /// Returns `SbeError::ShortRead` if the stream ends early.
            #[inline]
            fn $name(&mut self) -> SbeResult<$ty> {
                let mut bytes = [0u8; size_of::<$ty>()];
                self.read_bytes(&mut bytes)?;
                Ok(<$ty>::from_le_bytes(bytes))
            }
        )*
    };
}

macro_rules! write_le {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Writes a little-endian `", stringify!($ty), "`.")]
            ///
            /// # Errors
            ///
            /// Returns `SbeError::Io` if the sink rejects the bytes.
            #[inline]
            fn $name(&mut self, value: $ty) -> SbeResult<()> {
                self.write_bytes(&value.to_le_bytes())
            }
        )*
    };
}

/// Reading side of the marshaller, implemented for every [`Read`].
pub trait WireRead: Read {
    /// Fills `buffer` completely from the stream.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::ShortRead` if the stream yields fewer bytes than
    /// `buffer.len()`, or `SbeError::Io` if it fails.
    fn read_bytes(&mut self, buffer: &mut [u8]) -> SbeResult<()> {
        let needed = buffer.len();
        let mut filled = 0;
        while filled < needed {
            let Some(rest) = buffer.get_mut(filled..) else {
                break;
            };
            match self.read(rest) {
                Ok(0) => {
                    return Err(SbeError::ShortRead {
                        needed,
                        read: filled,
                    });
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Discards exactly `count` bytes.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::ShortRead` if the stream ends before `count` bytes.
    fn skip(&mut self, count: u64) -> SbeResult<()> {
        let copied = io::copy(&mut Read::take(&mut *self, count), &mut io::sink())?;
        if copied < count {
            return Err(SbeError::ShortRead {
                needed: usize::try_from(count).unwrap_or(usize::MAX),
                read: usize::try_from(copied).unwrap_or(usize::MAX),
            });
        }
        Ok(())
    }

    read_le! {
        read_u8 => u8,
        read_u16 => u16,
        read_u32 => u32,
        read_u64 => u64,
        read_i8 => i8,
        read_i16 => i16,
        read_i32 => i32,
        read_i64 => i64,
        read_f32 => f32,
        read_f64 => f64,
    }
}

impl<R: Read + ?Sized> WireRead for R {}

/// Writing side of the marshaller, implemented for every [`Write`].
pub trait WireWrite: Write {
    /// Writes all of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::Io` if the sink rejects the bytes.
    fn write_bytes(&mut self, bytes: &[u8]) -> SbeResult<()> {
        self.write_all(bytes)?;
        Ok(())
    }

    write_le! {
        write_u8 => u8,
        write_u16 => u16,
        write_u32 => u32,
        write_u64 => u64,
        write_i8 => i8,
        write_i16 => i16,
        write_i32 => i32,
        write_i64 => i64,
        write_f32 => f32,
        write_f64 => f64,
    }
}

impl<W: Write + ?Sized> WireWrite for W {}
