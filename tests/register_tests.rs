// Register value model: construction, lane extraction and formatting

use simd_viewer::register::{
    BitFamily, LaneKind, LaneScalar, RawVector, RegisterError, RegisterSize, RegisterValue,
};
use simd_viewer::viewer::{same, LaneAddress};

/// Build a register from `lanes`, then check that reading lanes in index
/// order gives them back and that display order is the reverse
fn assert_round_trip<T: LaneScalar>(lanes: &[T], size: RegisterSize) {
    let value = RegisterValue::from_lanes(lanes).expect("register construction failed");
    assert_eq!(value.kind(), T::KIND);
    assert_eq!(value.size(), size);
    assert_eq!(value.lane_count(), lanes.len());

    let expected: Vec<_> = lanes.iter().map(|l| l.into_scalar()).collect();
    let extracted: Vec<_> = (0..value.lane_count()).map(|i| value.lane(i)).collect();
    assert_eq!(extracted, expected, "{} round trip", T::KIND);

    let displayed: Vec<_> = value.display_order().map(|i| value.lane(i)).collect();
    let mut reversed = expected.clone();
    reversed.reverse();
    assert_eq!(displayed, reversed, "{} display order", T::KIND);
}

macro_rules! round_trip {
    ($ty:ty, $count:expr, $size:expr) => {{
        let lanes: Vec<$ty> = (0..$count)
            .map(|i| (i as $ty) * (3 as $ty) + (1 as $ty))
            .collect();
        assert_round_trip(&lanes, $size);
    }};
}

#[test]
fn test_round_trip_every_kind_and_size() {
    round_trip!(i8, 16, RegisterSize::Bits128);
    round_trip!(i8, 32, RegisterSize::Bits256);
    round_trip!(u8, 16, RegisterSize::Bits128);
    round_trip!(u8, 32, RegisterSize::Bits256);
    round_trip!(i16, 8, RegisterSize::Bits128);
    round_trip!(i16, 16, RegisterSize::Bits256);
    round_trip!(u16, 8, RegisterSize::Bits128);
    round_trip!(u16, 16, RegisterSize::Bits256);
    round_trip!(i32, 4, RegisterSize::Bits128);
    round_trip!(i32, 8, RegisterSize::Bits256);
    round_trip!(u32, 4, RegisterSize::Bits128);
    round_trip!(u32, 8, RegisterSize::Bits256);
    round_trip!(i64, 2, RegisterSize::Bits128);
    round_trip!(i64, 4, RegisterSize::Bits256);
    round_trip!(u64, 2, RegisterSize::Bits128);
    round_trip!(u64, 4, RegisterSize::Bits256);
    round_trip!(f32, 4, RegisterSize::Bits128);
    round_trip!(f32, 8, RegisterSize::Bits256);
    round_trip!(f64, 2, RegisterSize::Bits128);
    round_trip!(f64, 4, RegisterSize::Bits256);
}

#[test]
fn test_round_trip_extremes() {
    let bytes = [i8::MIN, -1, 0, i8::MAX, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    assert_round_trip(&bytes, RegisterSize::Bits128);
    assert_round_trip(&[u64::MAX, 0], RegisterSize::Bits128);
    assert_round_trip(&[f32::MIN_POSITIVE, -0.0, f32::INFINITY, 1e-30], RegisterSize::Bits128);
}

#[test]
fn test_cross_kind_never_same() {
    let lanes = [1u32, 2, 3, 4, 5, 6, 7, 8];
    let unsigned = RegisterValue::from_lanes(&lanes).unwrap();
    let raw = RawVector::from_lanes(&lanes).unwrap();
    let signed = RegisterValue::new(raw, LaneKind::I32).unwrap();

    assert_eq!(unsigned.raw().as_bytes(), signed.raw().as_bytes());
    for i in 0..8 {
        for j in 0..8 {
            assert!(!same(
                &LaneAddress::new(unsigned, i),
                &LaneAddress::new(signed, j)
            ));
        }
    }

    // Same kind, same bits: equal lane for lane
    for i in 0..8 {
        assert!(same(
            &LaneAddress::new(unsigned, i),
            &LaneAddress::new(unsigned, i)
        ));
    }
}

#[test]
fn test_kind_must_match_family() {
    let ints = RawVector::from_lanes(&[1u32; 8]).unwrap();
    let singles = RawVector::from_lanes(&[1.0f32; 8]).unwrap();
    let doubles = RawVector::from_lanes(&[1.0f64; 4]).unwrap();

    assert_eq!(ints.family(), BitFamily::Integer);
    assert_eq!(singles.family(), BitFamily::Float32);
    assert_eq!(doubles.family(), BitFamily::Float64);

    assert_eq!(
        RegisterValue::new(ints, LaneKind::F32).unwrap_err(),
        RegisterError::KindMismatch {
            family: BitFamily::Integer,
            kind: LaneKind::F32
        }
    );
    assert!(RegisterValue::new(singles, LaneKind::U32).is_err());
    assert!(RegisterValue::new(singles, LaneKind::F64).is_err());
    assert!(RegisterValue::new(doubles, LaneKind::F32).is_err());

    // Integer bits may be read at any integer width
    for kind in LaneKind::ALL.iter().filter(|k| !k.is_float()) {
        assert!(RegisterValue::new(ints, *kind).is_ok());
    }
}

#[test]
fn test_unsupported_sizes() {
    assert_eq!(
        RegisterValue::from_lanes(&[1u8; 8]).unwrap_err(),
        RegisterError::UnsupportedSize { bytes: 8 }
    );
    assert_eq!(
        RawVector::from_lanes(&[1u64; 8]).unwrap_err(),
        RegisterError::UnsupportedSize { bytes: 64 }
    );
    assert!(RawVector::from_bytes(BitFamily::Integer, &[0u8; 24]).is_err());
    assert_eq!(
        RawVector::from_bytes(BitFamily::Integer, &[0u8; 16])
            .unwrap()
            .size(),
        RegisterSize::Bits128
    );
}

#[test]
fn test_try_lane_out_of_range() {
    let value = RegisterValue::from_lanes(&[0i16; 8]).unwrap();
    assert_eq!(
        value.try_lane(8).unwrap_err(),
        RegisterError::LaneOutOfRange {
            index: 8,
            lane_count: 8
        }
    );
    assert!(value.try_lane(7).is_ok());
}

#[test]
#[should_panic(expected = "Lane index 4 out of range")]
fn test_lane_out_of_range_panics() {
    let value = RegisterValue::from_lanes(&[0.0f32; 4]).unwrap();
    value.lane(4);
}

#[test]
fn test_reinterpret_changes_lane_count_not_bits() {
    let value = RegisterValue::from_lanes(&[0x0102_0304u32; 8]).unwrap();
    let halves = value.reinterpret(LaneKind::U16).unwrap();
    assert_eq!(halves.lane_count(), 16);
    assert_eq!(halves.lane(0).format(true), "0x304");
    assert_eq!(halves.lane(1).format(true), "0x102");
    assert_eq!(halves.raw().as_bytes(), value.raw().as_bytes());
}

#[test]
fn test_lane_formatting() {
    let value = RegisterValue::from_lanes(&[-1i64, 255]).unwrap();
    assert_eq!(value.lane(0).format(false), "-1");
    assert_eq!(value.lane(0).format(true), "0xffffffffffffffff");
    assert_eq!(value.lane(1).format(true), "0xff");

    let floats = RegisterValue::from_lanes(&[0.1f32, 0.5, 1.0, -2.0]).unwrap();
    assert_eq!(floats.lane(0).format(true), format!("{:.12}", 0.1f32));
    assert_eq!(floats.lane(3).format(false), "-2.000000000000");

    let doubles = RegisterValue::from_lanes(&[0.1f64, 1.0 / 3.0]).unwrap();
    assert_eq!(doubles.lane(0).format(false), "0.1000000000000000");
    assert_eq!(doubles.lane(1).format(true), "0.3333333333333333");
}

#[test]
fn test_error_messages() {
    let err = RegisterError::KindMismatch {
        family: BitFamily::Float32,
        kind: LaneKind::U8,
    };
    assert_eq!(
        err.to_string(),
        "Cannot read u8 lanes out of a single-precision float register"
    );
    assert_eq!(
        RegisterError::UnsupportedSize { bytes: 8 }.to_string(),
        "Unsupported register size: 8 bytes (expected 16 or 32)"
    );
}
