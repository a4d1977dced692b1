//! Double-buffered hover tracking
//!
//! Rows are laid out and drawn in a single pass, so the lane under the pointer
//! is only known once the frame is finished. Highlighting therefore works off
//! the previous frame's answer:
//!
//! ```text
//! frame N   : draw, compare against last_address (= frame N-1's hover)
//!             record hit into frame_address
//! flush     : last_address <- frame_address, frame_address <- empty
//! frame N+1 : draw, compare against last_address (= frame N's hover)
//! ```
//!
//! Highlights lag pointer movement by exactly one frame.

use super::oracle::{same, LaneAddress};
use log::debug;

#[derive(Debug, Clone, Default)]
pub struct HoverState {
    frame_address: Option<LaneAddress>,
    last_address: Option<LaneAddress>,
    frame_hits: usize,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lane under the pointer during the previous frame
    pub fn last(&self) -> Option<&LaneAddress> {
        self.last_address.as_ref()
    }

    /// Lane found under the pointer so far this frame
    pub fn current(&self) -> Option<&LaneAddress> {
        self.frame_address.as_ref()
    }

    /// Record a lane box that contains the pointer.
    ///
    /// Boxes should never overlap, but if several do the one recorded last
    /// wins: within a row that is the least significant of the overlapping
    /// lanes, across rows the row pushed last.
    pub fn record(&mut self, address: LaneAddress) {
        self.frame_hits += 1;
        if let Some(previous) = &self.frame_address {
            debug!(
                "overlapping lane boxes under pointer: {} replaces {} ({} hits this frame)",
                address.describe(false),
                previous.describe(false),
                self.frame_hits
            );
        }
        self.frame_address = Some(address);
    }

    /// Whether `address` holds the value hovered last frame
    pub fn is_linked(&self, address: &LaneAddress) -> bool {
        self.last_address
            .as_ref()
            .is_some_and(|last| same(last, address))
    }

    /// End-of-frame transition
    pub fn advance(&mut self) {
        self.last_address = self.frame_address.take();
        self.frame_hits = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::RegisterValue;

    fn address(index: usize) -> LaneAddress {
        let value = RegisterValue::from_lanes(&[10u32, 11, 12, 13]).unwrap();
        LaneAddress::new(value, index)
    }

    #[test]
    fn test_advance_moves_frame_into_last() {
        let mut hover = HoverState::new();
        hover.record(address(2));
        assert!(hover.last().is_none());

        hover.advance();
        assert_eq!(hover.last().map(|a| a.index()), Some(2));
        assert!(hover.current().is_none());

        hover.advance();
        assert!(hover.last().is_none());
    }

    #[test]
    fn test_last_record_wins() {
        let mut hover = HoverState::new();
        hover.record(address(3));
        hover.record(address(1));
        hover.advance();
        assert_eq!(hover.last().map(|a| a.index()), Some(1));
    }

    #[test]
    fn test_is_linked_uses_previous_frame() {
        let mut hover = HoverState::new();
        hover.record(address(0));
        assert!(!hover.is_linked(&address(0)));
        hover.advance();
        assert!(hover.is_linked(&address(0)));
        assert!(!hover.is_linked(&address(1)));
    }
}
