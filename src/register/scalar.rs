//! Typed lane scalars and their textual rendering

use super::lane::LaneKind;
use std::fmt;

/// One lane read out of a register, tagged with its interpretation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
}

impl Scalar {
    pub fn kind(&self) -> LaneKind {
        match self {
            Scalar::I8(_) => LaneKind::I8,
            Scalar::U8(_) => LaneKind::U8,
            Scalar::I16(_) => LaneKind::I16,
            Scalar::U16(_) => LaneKind::U16,
            Scalar::I32(_) => LaneKind::I32,
            Scalar::U32(_) => LaneKind::U32,
            Scalar::I64(_) => LaneKind::I64,
            Scalar::U64(_) => LaneKind::U64,
            Scalar::F32(_) => LaneKind::F32,
            Scalar::F64(_) => LaneKind::F64,
        }
    }

    /// Render the scalar for a lane box.
    ///
    /// Integers print in decimal, or as `0x` followed by the minimal lowercase
    /// hex digits of the lane's own bit pattern (`-1i8` is `0xff`, not
    /// `0xffffffff`). Floats ignore `hex` and print with a fixed, wide
    /// precision so rounding artifacts stay visible.
    pub fn format(&self, hex: bool) -> String {
        if hex {
            match self {
                Scalar::I8(v) => format!("0x{:x}", v),
                Scalar::U8(v) => format!("0x{:x}", v),
                Scalar::I16(v) => format!("0x{:x}", v),
                Scalar::U16(v) => format!("0x{:x}", v),
                Scalar::I32(v) => format!("0x{:x}", v),
                Scalar::U32(v) => format!("0x{:x}", v),
                Scalar::I64(v) => format!("0x{:x}", v),
                Scalar::U64(v) => format!("0x{:x}", v),
                Scalar::F32(_) | Scalar::F64(_) => self.to_string(),
            }
        } else {
            self.to_string()
        }
    }

    /// Grey level for value-intensity rendering: the most significant byte of
    /// an integer lane. Floats have no intensity.
    pub fn intensity(&self) -> Option<u8> {
        match *self {
            Scalar::I8(v) => Some(v as u8),
            Scalar::U8(v) => Some(v),
            Scalar::I16(v) => Some(((v as u16) >> 8) as u8),
            Scalar::U16(v) => Some((v >> 8) as u8),
            Scalar::I32(v) => Some(((v as u32) >> 24) as u8),
            Scalar::U32(v) => Some((v >> 24) as u8),
            Scalar::I64(v) => Some(((v as u64) >> 56) as u8),
            Scalar::U64(v) => Some((v >> 56) as u8),
            Scalar::F32(_) | Scalar::F64(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::I8(v) => write!(f, "{}", v),
            Scalar::U8(v) => write!(f, "{}", v),
            Scalar::I16(v) => write!(f, "{}", v),
            Scalar::U16(v) => write!(f, "{}", v),
            Scalar::I32(v) => write!(f, "{}", v),
            Scalar::U32(v) => write!(f, "{}", v),
            Scalar::I64(v) => write!(f, "{}", v),
            Scalar::U64(v) => write!(f, "{}", v),
            Scalar::F32(v) => write!(f, "{:.12}", v),
            Scalar::F64(v) => write!(f, "{:.16}", v),
        }
    }
}

/// Native scalar types that can be stored in and read back from a lane.
///
/// Lanes are stored little-endian, lane 0 at byte offset 0.
pub trait LaneScalar: Copy {
    const KIND: LaneKind;

    fn read_le(bytes: &[u8]) -> Self;
    fn write_le(self, out: &mut [u8]);
    fn into_scalar(self) -> Scalar;
}

macro_rules! impl_lane_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl LaneScalar for $ty {
                const KIND: LaneKind = LaneKind::$variant;

                fn read_le(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$ty>()];
                    buf.copy_from_slice(&bytes[..std::mem::size_of::<$ty>()]);
                    <$ty>::from_le_bytes(buf)
                }

                fn write_le(self, out: &mut [u8]) {
                    let bytes = self.to_le_bytes();
                    out[..bytes.len()].copy_from_slice(&bytes);
                }

                fn into_scalar(self) -> Scalar {
                    Scalar::$variant(self)
                }
            }
        )*
    };
}

impl_lane_scalar! {
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}
