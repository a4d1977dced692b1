//! Lane addressing and the "same value" test behind hover highlighting

use crate::register::RegisterValue;

/// One lane of one register value; the index is checked on construction
#[derive(Debug, Clone, Copy)]
pub struct LaneAddress {
    value: RegisterValue,
    index: usize,
}

impl LaneAddress {
    /// # Panics
    ///
    /// Panics if `index` is not a lane of `value`.
    pub fn new(value: RegisterValue, index: usize) -> Self {
        assert!(
            index < value.lane_count(),
            "lane index {} out of range for {} lanes",
            index,
            value.lane_count()
        );
        LaneAddress { value, index }
    }

    pub fn value(&self) -> &RegisterValue {
        &self.value
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Short description for status lines, e.g. `u32 lane 5 = 6`
    pub fn describe(&self, hex: bool) -> String {
        format!(
            "{} lane {} = {}",
            self.value.kind(),
            self.index,
            self.value.lane(self.index).format(hex)
        )
    }
}

/// Whether two lanes hold the same value.
///
/// Lanes of different kinds are never the same, whatever their bits. Within
/// a kind the scalars compare with ordinary `==`, so NaN never matches.
pub fn same(a: &LaneAddress, b: &LaneAddress) -> bool {
    if a.value.kind() != b.value.kind() {
        return false;
    }
    a.value.lane(a.index) == b.value.lane(b.index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::LaneKind;

    #[test]
    fn test_same_value_different_position() {
        let a = RegisterValue::from_lanes(&[1u16, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let b = RegisterValue::from_lanes(&[8u16, 7, 6, 5, 4, 3, 2, 1]).unwrap();
        assert!(same(&LaneAddress::new(a, 0), &LaneAddress::new(b, 7)));
        assert!(!same(&LaneAddress::new(a, 0), &LaneAddress::new(b, 0)));
    }

    #[test]
    fn test_nan_is_never_same() {
        let v = RegisterValue::from_lanes(&[f64::NAN, 1.0]).unwrap();
        assert!(!same(&LaneAddress::new(v, 0), &LaneAddress::new(v, 0)));
        assert!(same(&LaneAddress::new(v, 1), &LaneAddress::new(v, 1)));
    }

    #[test]
    #[should_panic(expected = "lane index 4 out of range for 4 lanes")]
    fn test_address_outside_register_panics() {
        let v = RegisterValue::from_lanes(&[1i32, 2, 3, 4]).unwrap();
        LaneAddress::new(v, 4);
    }

    #[test]
    fn test_accessors() {
        let v = RegisterValue::from_lanes(&[1i32, 2, 3, 4]).unwrap();
        let address = LaneAddress::new(v, 2);
        assert_eq!(address.index(), 2);
        assert_eq!(address.value().kind(), LaneKind::I32);
    }

    #[test]
    fn test_describe() {
        let v = RegisterValue::from_lanes(&[255u8; 16])
            .unwrap()
            .reinterpret(LaneKind::I8)
            .unwrap();
        assert_eq!(LaneAddress::new(v, 3).describe(false), "i8 lane 3 = -1");
        assert_eq!(LaneAddress::new(v, 3).describe(true), "i8 lane 3 = 0xff");
    }
}
