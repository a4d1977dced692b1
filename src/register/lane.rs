//! Lane interpretations and register sizes

use std::fmt;

/// How the bits of a register are split into lanes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl LaneKind {
    pub const ALL: [LaneKind; 10] = [
        LaneKind::I8,
        LaneKind::U8,
        LaneKind::I16,
        LaneKind::U16,
        LaneKind::I32,
        LaneKind::U32,
        LaneKind::I64,
        LaneKind::U64,
        LaneKind::F32,
        LaneKind::F64,
    ];

    /// Width of one lane in bytes
    pub fn byte_width(self) -> usize {
        match self {
            LaneKind::I8 | LaneKind::U8 => 1,
            LaneKind::I16 | LaneKind::U16 => 2,
            LaneKind::I32 | LaneKind::U32 | LaneKind::F32 => 4,
            LaneKind::I64 | LaneKind::U64 | LaneKind::F64 => 8,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, LaneKind::F32 | LaneKind::F64)
    }

    /// The raw vector family this kind can be read out of
    pub fn family(self) -> BitFamily {
        match self {
            LaneKind::F32 => BitFamily::Float32,
            LaneKind::F64 => BitFamily::Float64,
            _ => BitFamily::Integer,
        }
    }

    /// Short Rust-style name (`u8`, `i32`, `f64`, ...)
    pub fn name(self) -> &'static str {
        match self {
            LaneKind::I8 => "i8",
            LaneKind::U8 => "u8",
            LaneKind::I16 => "i16",
            LaneKind::U16 => "u16",
            LaneKind::I32 => "i32",
            LaneKind::U32 => "u32",
            LaneKind::I64 => "i64",
            LaneKind::U64 => "u64",
            LaneKind::F32 => "f32",
            LaneKind::F64 => "f64",
        }
    }
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Total register width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterSize {
    Bits128,
    Bits256,
}

impl RegisterSize {
    pub fn bytes(self) -> usize {
        match self {
            RegisterSize::Bits128 => 16,
            RegisterSize::Bits256 => 32,
        }
    }

    /// Map a byte count onto a supported register size
    pub fn from_bytes(bytes: usize) -> Option<Self> {
        match bytes {
            16 => Some(RegisterSize::Bits128),
            32 => Some(RegisterSize::Bits256),
            _ => None,
        }
    }
}

/// The three raw vector families a bit pattern can come from.
///
/// Mirrors the integer / single / double vector types of the SSE and AVX
/// instruction sets. Lane kinds never cross families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitFamily {
    Integer,
    Float32,
    Float64,
}

impl BitFamily {
    pub fn admits(self, kind: LaneKind) -> bool {
        kind.family() == self
    }
}

impl fmt::Display for BitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitFamily::Integer => f.write_str("integer"),
            BitFamily::Float32 => f.write_str("single-precision float"),
            BitFamily::Float64 => f.write_str("double-precision float"),
        }
    }
}
