//! Overlays a typed read/write cursor onto a caller-owned byte buffer.
//!
//! A [`ByteCursor`] converts fixed-width scalars (integers of every width, `f32` and `f64`) to
//! and from their byte representation, in either [`Endian::LsbFirst`] or [`Endian::MsbFirst`]
//! order. The produced layout does not depend on the host's native byte order.
//!
//! Consecutive operations of the same kind advance contiguously. Switching from writing to
//! reading (or back) rewinds the cursor to the start of the buffer first, so a record can be
//! packed and then unpacked without an explicit [`ByteCursor::reset`]:
//!
//! ```
//! use struct_cursor::{ByteCursor, Endian};
//!
//! let mut buf = [0u8; 5];
//! let mut c = ByteCursor::with_endian(&mut buf[..], Endian::MsbFirst);
//! c.write(7u8)?.write(0x11223344u32)?;
//! assert_eq!(c.read::<u8>()?, 7);
//! assert_eq!(c.read::<u32>()?, 0x11223344);
//! assert_eq!(buf, [7, 0x11, 0x22, 0x33, 0x44]);
//! # Ok::<(), struct_cursor::CursorError>(())
//! ```
//!
//! Every access is bounds-checked. An access that does not fit returns
//! [`CursorError::OutOfBounds`] and leaves the cursor and the buffer unchanged.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod cursor;
mod endian;
mod scalar;


pub use cursor::{ByteCursor, CursorError, Mode, Result};
pub use endian::Endian;
pub use scalar::Scalar;
