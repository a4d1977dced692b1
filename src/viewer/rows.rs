//! The per-frame row stack
//!
//! Rows are appended in push order and never reordered. A row's vertical
//! position is its index in the stack and nothing else, so a spacer row is
//! simply a row that draws nothing.

use super::flags::RenderFlags;
use crate::register::{RegisterSize, RegisterValue};

/// One line of the display
#[derive(Debug, Clone)]
pub enum DisplayRow {
    /// A register's lanes; `flags` are fixed when the row is pushed
    Register {
        value: RegisterValue,
        flags: RenderFlags,
    },
    /// A labelled bar standing for the operation between input and output rows
    Operation {
        label: String,
        lane_bytes: usize,
        size: RegisterSize,
    },
    Spacer,
    GranularityPicker,
}

#[derive(Debug, Default)]
pub struct RowStack {
    rows: Vec<DisplayRow>,
}

impl RowStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row; it lands at index `len()` before the push
    pub fn push(&mut self, row: DisplayRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop every row but keep the allocation for the next frame
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_keep_push_order() {
        let mut stack = RowStack::new();
        stack.push(DisplayRow::Spacer);
        stack.push(DisplayRow::GranularityPicker);
        assert_eq!(stack.len(), 2);
        assert!(matches!(stack.rows()[1], DisplayRow::GranularityPicker));

        stack.clear();
        assert!(stack.is_empty());
        stack.push(DisplayRow::Spacer);
        assert!(matches!(stack.rows()[0], DisplayRow::Spacer));
    }
}
