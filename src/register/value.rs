//! Register values: a raw bit pattern plus its lane interpretation
//!
//! A [`RawVector`] is what a SIMD intrinsic hands back: up to 256 bits tagged
//! only with the vector family it came from. A [`RegisterValue`] pairs that
//! pattern with a [`LaneKind`], which fixes the lane count and how each lane
//! is extracted. The bits are never modified after construction, so the same
//! pattern can be re-tagged at another width with [`RegisterValue::reinterpret`].
//!
//! `RegisterValue` has no `PartialEq`: identical bits under two
//! lane kinds are different values, and lanes are compared one at a time
//! through [`crate::viewer::oracle::same`].

use super::errors::RegisterError;
use super::lane::{BitFamily, LaneKind, RegisterSize};
use super::scalar::{LaneScalar, Scalar};

/// Size of the backing buffer, large enough for a 256-bit register
pub const MAX_REGISTER_BYTES: usize = 32;

/// Untyped register contents
#[derive(Debug, Clone, Copy)]
pub struct RawVector {
    family: BitFamily,
    size: RegisterSize,
    bytes: [u8; MAX_REGISTER_BYTES],
}

impl RawVector {
    /// Build from lanes in lane-index order (lane 0 first, i.e. memory order)
    pub fn from_lanes<T: LaneScalar>(lanes: &[T]) -> Result<Self, RegisterError> {
        let width = T::KIND.byte_width();
        let total = lanes.len() * width;
        let size = RegisterSize::from_bytes(total)
            .ok_or(RegisterError::UnsupportedSize { bytes: total })?;

        let mut bytes = [0u8; MAX_REGISTER_BYTES];
        for (lane, chunk) in lanes.iter().zip(bytes.chunks_exact_mut(width)) {
            lane.write_le(chunk);
        }

        Ok(RawVector {
            family: T::KIND.family(),
            size,
            bytes,
        })
    }

    /// Build from lanes listed most significant first, the argument order of
    /// `_mm256_set_*` / `_mm_set_*`
    pub fn from_lanes_msb_first<T: LaneScalar>(lanes: &[T]) -> Result<Self, RegisterError> {
        let reversed: Vec<T> = lanes.iter().rev().copied().collect();
        Self::from_lanes(&reversed)
    }

    /// Build from a little-endian memory image of the register
    pub fn from_bytes(family: BitFamily, bytes: &[u8]) -> Result<Self, RegisterError> {
        let size = RegisterSize::from_bytes(bytes.len())
            .ok_or(RegisterError::UnsupportedSize { bytes: bytes.len() })?;
        let mut buf = [0u8; MAX_REGISTER_BYTES];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(RawVector {
            family,
            size,
            bytes: buf,
        })
    }

    pub fn family(&self) -> BitFamily {
        self.family
    }

    pub fn size(&self) -> RegisterSize {
        self.size
    }

    /// The significant bytes, little-endian
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.size.bytes()]
    }
}

/// A register's bits together with the lane kind used to read them
#[derive(Debug, Clone, Copy)]
pub struct RegisterValue {
    kind: LaneKind,
    raw: RawVector,
}

impl RegisterValue {
    /// Tag a raw vector with a lane kind. The kind must belong to the raw
    /// vector's family; integers and floats never convert into each other.
    pub fn new(raw: RawVector, kind: LaneKind) -> Result<Self, RegisterError> {
        if !raw.family.admits(kind) {
            return Err(RegisterError::KindMismatch {
                family: raw.family,
                kind,
            });
        }
        Ok(RegisterValue { kind, raw })
    }

    /// Build a register whose lane kind is implied by the scalar type
    pub fn from_lanes<T: LaneScalar>(lanes: &[T]) -> Result<Self, RegisterError> {
        Self::new(RawVector::from_lanes(lanes)?, T::KIND)
    }

    /// Same bits, different lane kind
    pub fn reinterpret(&self, kind: LaneKind) -> Result<Self, RegisterError> {
        Self::new(self.raw, kind)
    }

    pub fn kind(&self) -> LaneKind {
        self.kind
    }

    pub fn size(&self) -> RegisterSize {
        self.raw.size
    }

    pub fn raw(&self) -> &RawVector {
        &self.raw
    }

    pub fn lane_count(&self) -> usize {
        self.raw.size.bytes() / self.kind.byte_width()
    }

    /// Lane indices in display order: most significant lane first
    pub fn display_order(&self) -> impl Iterator<Item = usize> {
        (0..self.lane_count()).rev()
    }

    /// Read one lane.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.lane_count()`. An out-of-range lane is a
    /// layout bug, never user input.
    pub fn lane(&self, index: usize) -> Scalar {
        match self.try_lane(index) {
            Ok(scalar) => scalar,
            Err(e) => panic!("{}", e),
        }
    }

    /// Read one lane, reporting an out-of-range index as an error
    pub fn try_lane(&self, index: usize) -> Result<Scalar, RegisterError> {
        let lane_count = self.lane_count();
        if index >= lane_count {
            return Err(RegisterError::LaneOutOfRange { index, lane_count });
        }

        Ok(match self.kind {
            LaneKind::I8 => self.read::<i8>(index),
            LaneKind::U8 => self.read::<u8>(index),
            LaneKind::I16 => self.read::<i16>(index),
            LaneKind::U16 => self.read::<u16>(index),
            LaneKind::I32 => self.read::<i32>(index),
            LaneKind::U32 => self.read::<u32>(index),
            LaneKind::I64 => self.read::<i64>(index),
            LaneKind::U64 => self.read::<u64>(index),
            LaneKind::F32 => self.read::<f32>(index),
            LaneKind::F64 => self.read::<f64>(index),
        })
    }

    fn read<T: LaneScalar>(&self, index: usize) -> Scalar {
        let width = T::KIND.byte_width();
        let offset = index * width;
        T::read_le(&self.raw.bytes[offset..offset + width]).into_scalar()
    }
}
