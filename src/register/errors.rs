//! Error types for register construction and lane access
//!
//! Every variant describes a broken call site rather than bad user input: the
//! viewer only ever sees values the host program built itself.

use super::lane::{BitFamily, LaneKind};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// Lane kind requested over a bit pattern of the wrong family
    KindMismatch { family: BitFamily, kind: LaneKind },

    /// Register byte size other than 16 or 32
    UnsupportedSize { bytes: usize },

    /// Lane index past the end of the register
    LaneOutOfRange { index: usize, lane_count: usize },
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::KindMismatch { family, kind } => {
                write!(
                    f,
                    "Cannot read {} lanes out of a {} register",
                    kind, family
                )
            }
            RegisterError::UnsupportedSize { bytes } => {
                write!(
                    f,
                    "Unsupported register size: {} bytes (expected 16 or 32)",
                    bytes
                )
            }
            RegisterError::LaneOutOfRange { index, lane_count } => {
                write!(
                    f,
                    "Lane index {} out of range for a register with {} lanes",
                    index, lane_count
                )
            }
        }
    }
}

impl std::error::Error for RegisterError {}
