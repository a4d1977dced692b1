//! Per-row render flags

use bitflags::bitflags;

bitflags! {
    /// Independent rendering toggles baked into a row when it is pushed
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RenderFlags: u8 {
        /// Integer lanes print in hexadecimal
        const HEX = 1 << 0;
        /// Outline drawn around the whole register
        const BORDERED = 1 << 1;
        /// Tint lanes in groups of the highlight granularity
        const GRANULARITY_OVERLAY = 1 << 2;
        /// Colour integer lanes by their value
        const VALUE_INTENSITY = 1 << 3;
    }
}
