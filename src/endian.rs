/// Byte order used by a [`ByteCursor`](crate::ByteCursor). Fixed when the cursor is created.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Endian {
    /// Most significant byte at the lowest offset ("big-endian").
    MsbFirst,
    /// Least significant byte at the lowest offset ("little-endian").
    #[default]
    LsbFirst,
}

impl Endian {
    /// The byte order of the host.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endian = Endian::LsbFirst;

    /// The byte order of the host.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endian = Endian::MsbFirst;

    /// Returns `true` if this is the host's byte order.
    pub fn is_native(self) -> bool {
        self == Self::NATIVE
    }

    /// Copies `src` into `dst`, ascending for `LsbFirst` and descending for `MsbFirst`.
    ///
    /// The descending copy is its own inverse, so the same routine encodes (value bytes into the
    /// buffer window) and decodes (buffer window into value bytes). Both slices must have the
    /// same length.
    #[inline(always)]
    pub(crate) fn transfer(self, src: &[u8], dst: &mut [u8]) {
        debug_assert_eq!(src.len(), dst.len());
        match self {
            Self::LsbFirst => dst.copy_from_slice(src),
            Self::MsbFirst => {
                for (d, s) in dst.iter_mut().rev().zip(src) {
                    *d = *s;
                }
            }
        }
    }
}
