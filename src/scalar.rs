use zerocopy::byteorder::{F32, F64, I128, I16, I32, I64, LE, U128, U16, U32, U64};
use zerocopy::{FromBytes, Immutable, IntoBytes};

/// A fixed-width scalar that a [`ByteCursor`](crate::ByteCursor) can read and write.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `u128`, their signed counterparts, `f32` and
/// `f64`. This trait is sealed; composite types must be packed field by field.
pub trait Scalar: Copy + private::Sealed {
    /// The value's least-significant-first representation. Its bytes are the "source bytes"
    /// of the copy, with byte 0 being the least significant.
    type Le: FromBytes + IntoBytes + Immutable;

    /// Encoded size in bytes.
    const WIDTH: usize = core::mem::size_of::<Self>();

    /// Converts to the least-significant-first representation.
    fn to_lsb_first(self) -> Self::Le;

    /// Converts from the least-significant-first representation.
    fn from_lsb_first(le: Self::Le) -> Self;
}

mod private {
    pub trait Sealed {}
}

macro_rules! impl_scalar {
    ($($ty:ty => $le:ty,)*) => {
        $(
            impl private::Sealed for $ty {}

            impl Scalar for $ty {
                type Le = $le;

                #[inline(always)]
                fn to_lsb_first(self) -> $le {
                    <$le>::new(self)
                }

                #[inline(always)]
                fn from_lsb_first(le: $le) -> $ty {
                    le.get()
                }
            }
        )*
    };
}

impl_scalar! {
    u16 => U16<LE>,
    u32 => U32<LE>,
    u64 => U64<LE>,
    u128 => U128<LE>,
    i16 => I16<LE>,
    i32 => I32<LE>,
    i64 => I64<LE>,
    i128 => I128<LE>,
    f32 => F32<LE>,
    f64 => F64<LE>,
}

// Single bytes have no order.
macro_rules! impl_scalar_byte {
    ($($ty:ty),*) => {
        $(
            impl private::Sealed for $ty {}

            impl Scalar for $ty {
                type Le = $ty;

                #[inline(always)]
                fn to_lsb_first(self) -> $ty {
                    self
                }

                #[inline(always)]
                fn from_lsb_first(le: $ty) -> $ty {
                    le
                }
            }
        )*
    };
}

impl_scalar_byte!(u8, i8);
