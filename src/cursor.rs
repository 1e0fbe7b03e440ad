use core::ops::Range;

use zerocopy::{FromZeros, IntoBytes};

use crate::{Endian, Scalar};

/// Result of a cursor operation.
pub type Result<T> = core::result::Result<T, CursorError>;

/// The kind of the most recent successful operation on a [`ByteCursor`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Mode {
    /// Nothing has been read or written since construction.
    Idle,
    /// The last operation was a write.
    Writing,
    /// The last operation was a read.
    Reading,
}

/// A read/write position over a byte buffer that the caller owns.
///
/// `B` is anything that exposes a byte slice: `&mut [u8]`, `[u8; N]`, `Vec<u8>`, and so on.
/// Reading requires `B: AsRef<[u8]>`; writing requires `B: AsMut<[u8]>`, so a cursor over
/// `&[u8]` is read-only.
///
/// Writes and reads each advance the position by the width of the value. When the kind of
/// operation changes (a read after a write, or a write after a read), the position is first
/// rewound to 0. [`reset`](Self::reset) rewinds without changing the tracked [`Mode`].
#[derive(Clone, Debug)]
pub struct ByteCursor<B> {
    buf: B,
    endian: Endian,
    pos: usize,
    mode: Mode,
}

impl<B> ByteCursor<B> {
    /// Creates a cursor at position 0 using [`Endian::LsbFirst`].
    pub fn new(buf: B) -> Self {
        Self::with_endian(buf, Endian::default())
    }

    /// Creates a cursor at position 0 using the given byte order.
    pub fn with_endian(buf: B, endian: Endian) -> Self {
        Self {
            buf,
            endian,
            pos: 0,
            mode: Mode::Idle,
        }
    }

    /// Binds the cursor to a different buffer and rewinds to position 0.
    ///
    /// The byte order and the tracked mode are kept.
    pub fn rebind(&mut self, buf: B) -> &mut Self {
        self.replace_buffer(buf);
        self
    }

    /// Like [`rebind`](Self::rebind), but hands back the previously bound buffer.
    pub fn replace_buffer(&mut self, buf: B) -> B {
        tracing::trace!(pos = self.pos, "rebinding cursor buffer");
        self.reset();
        core::mem::replace(&mut self.buf, buf)
    }

    /// Rewinds to position 0. The tracked mode is not changed.
    pub fn reset(&mut self) -> &mut Self {
        self.pos = 0;
        self
    }

    /// Accesses the bound buffer
    pub fn buffer(&self) -> &B {
        &self.buf
    }

    /// Accesses the bound buffer mutably
    pub fn buffer_mut(&mut self) -> &mut B {
        &mut self.buf
    }

    /// Extracts the bound buffer
    pub fn into_inner(self) -> B {
        self.buf
    }

    /// Offset of the next byte to be read or written, ignoring any pending direction-change
    /// rewind.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The byte order chosen at construction.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// The kind of the most recent successful operation.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Where an operation of kind `next` will start.
    fn start_for(&self, next: Mode) -> usize {
        match (self.mode, next) {
            (Mode::Writing, Mode::Reading) | (Mode::Reading, Mode::Writing) => 0,
            _ => self.pos,
        }
    }

    /// Checks that `width` bytes starting at `start` fit in a buffer of `len` bytes.
    fn span(start: usize, width: usize, len: usize) -> Result<Range<usize>> {
        match start.checked_add(width) {
            Some(end) if end <= len => Ok(start..end),
            _ => {
                tracing::debug!(offset = start, width, len, "cursor access out of bounds");
                Err(CursorError::OutOfBounds {
                    offset: start,
                    width,
                    len,
                })
            }
        }
    }

    /// Records that an operation of kind `next` completed, ending just before `end`.
    fn commit(&mut self, next: Mode, end: usize) {
        if self.mode != next && self.mode != Mode::Idle {
            tracing::trace!(from = ?self.mode, to = ?next, "direction changed, cursor rewound");
        }
        self.mode = next;
        self.pos = end;
    }
}

impl<B: AsRef<[u8]>> ByteCursor<B> {
    /// Length of the bound buffer, in bytes.
    pub fn len(&self) -> usize {
        self.buf.as_ref().len()
    }

    /// Returns `true` if the bound buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bytes from the current position to the end of the buffer.
    ///
    /// Empty if the buffer was shrunk below the position through [`buffer_mut`](Self::buffer_mut).
    pub fn remaining(&self) -> &[u8] {
        self.buf.as_ref().get(self.pos..).unwrap_or(&[])
    }

    /// Decodes a `T` at the current position and advances past it.
    ///
    /// If the previous operation was a write, decoding starts at offset 0 instead.
    pub fn read<T: Scalar>(&mut self) -> Result<T> {
        let data = self.buf.as_ref();
        let range = Self::span(self.start_for(Mode::Reading), T::WIDTH, data.len())?;
        let end = range.end;

        let mut le = T::Le::new_zeroed();
        self.endian.transfer(&data[range], le.as_mut_bytes());

        self.commit(Mode::Reading, end);
        Ok(T::from_lsb_first(le))
    }

    /// Decodes a `T` into `out`. Equivalent to `*out = self.read()?`, but chains.
    ///
    /// On failure `out` is not modified.
    pub fn read_into<T: Scalar>(&mut self, out: &mut T) -> Result<&mut Self> {
        *out = self.read()?;
        Ok(self)
    }
}

impl<B: AsMut<[u8]>> ByteCursor<B> {
    /// Encodes `value` at the current position and advances past it.
    ///
    /// If the previous operation was a read, encoding starts at offset 0 instead. Returns the
    /// cursor so that fields can be packed in sequence:
    ///
    /// ```
    /// # use struct_cursor::ByteCursor;
    /// let mut buf = [0u8; 3];
    /// ByteCursor::new(&mut buf[..]).write(1u8)?.write(0x0302u16)?;
    /// assert_eq!(buf, [1, 2, 3]);
    /// # Ok::<(), struct_cursor::CursorError>(())
    /// ```
    pub fn write<T: Scalar>(&mut self, value: T) -> Result<&mut Self> {
        let start = self.start_for(Mode::Writing);
        let endian = self.endian;
        let data = self.buf.as_mut();
        let range = Self::span(start, T::WIDTH, data.len())?;
        let end = range.end;

        let le = value.to_lsb_first();
        endian.transfer(le.as_bytes(), &mut data[range]);

        self.commit(Mode::Writing, end);
        Ok(self)
    }
}

/// Error type for `ByteCursor`
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum CursorError {
    /// The value does not fit between `offset` and the end of the buffer.
    ///
    /// `offset` is where the access would have started, after any direction-change rewind.
    /// Nothing was read or written and the cursor was not moved.
    OutOfBounds {
        /// Start of the rejected access.
        offset: usize,
        /// Width of the value, in bytes.
        width: usize,
        /// Length of the bound buffer.
        len: usize,
    },
}

impl core::error::Error for CursorError {}

impl core::fmt::Display for CursorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfBounds { offset, width, len } => write!(
                f,
                "{width}-byte access at offset {offset} exceeds buffer of {len} bytes"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl From<CursorError> for std::io::Error {
    fn from(e: CursorError) -> Self {
        std::io::Error::new(std::io::ErrorKind::UnexpectedEof, e)
    }
}
