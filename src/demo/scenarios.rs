//! Scenario bodies: each pushes one frame's worth of rows

use super::ops;
use crate::register::{BitFamily, LaneKind, RawVector, RegisterError, RegisterSize, RegisterValue};
use crate::viewer::Viewer;

fn sequence<const N: usize>(start: u8) -> [u8; N] {
    let mut out = [0u8; N];
    for (i, b) in out.iter_mut().enumerate() {
        *b = start.wrapping_add(i as u8);
    }
    out
}

/// Byte interleaving with the granularity picker on top
pub fn unpack(sv: &mut Viewer) -> Result<(), RegisterError> {
    sv.push_granularity_picker();

    // _mm256_set_epi8(1, 2, ..., 32): 1 lands in the most significant byte
    let value0 = RawVector::from_lanes_msb_first(&sequence::<32>(1))?;
    let value1 = RawVector::from_lanes_msb_first(&sequence::<32>(33))?;
    let a: [u8; 32] = to_array(value0.as_bytes());
    let b: [u8; 32] = to_array(value1.as_bytes());

    let value0 = RegisterValue::new(value0, LaneKind::U8)?;
    let value1 = RegisterValue::new(value1, LaneKind::U8)?;

    sv.push_register(value0);
    sv.push_register(value1);
    sv.push_operation("_mm256_unpacklo_epi8", LaneKind::U8);
    sv.push_register_bold(RegisterValue::from_lanes(&ops::unpacklo_epi8(&a, &b))?);

    sv.push_spacer();

    sv.push_register(value0);
    sv.push_register(value1);
    sv.push_operation("_mm256_unpackhi_epi8", LaneKind::U8);
    sv.push_register_bold(RegisterValue::from_lanes(&ops::unpackhi_epi8(&a, &b))?);

    Ok(())
}

/// 64-bit equality mask, shown in hex
pub fn compare(sv: &mut Viewer) -> Result<(), RegisterError> {
    let a = [4i64, 3, -127, 1];
    let b = [8i64, 3, 6, 0x12345678ABCDEF];

    let value0 = RegisterValue::from_lanes(&a)?;
    let value1 = RegisterValue::from_lanes(&b)?;
    sv.push_register(value0);
    sv.push_register(value1);
    sv.push_operation("_mm256_cmpeq_epi64", LaneKind::I64);

    sv.set_hex_mode();
    sv.push_register_bold(RegisterValue::from_lanes(&ops::cmpeq_epi64(&a, &b))?);

    sv.push_spacer();
    sv.set_decimal_mode();
    sv.push_register(value1);

    Ok(())
}

/// Single and double precision arithmetic with visible rounding
pub fn float(sv: &mut Viewer) -> Result<(), RegisterError> {
    let a = [0.1f32, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];
    let b = [0.2f32, 0.1, 0.7, 1e-8, 0.5, 1e8, 0.3, 0.1];
    sv.push_register(RegisterValue::from_lanes(&a)?);
    sv.push_register(RegisterValue::from_lanes(&b)?);
    sv.push_operation("_mm256_add_ps", LaneKind::F32);
    sv.push_register_bold(RegisterValue::from_lanes(&ops::add_ps(&a, &b))?);

    sv.push_spacer();

    let c = [0.1f64, 1.0 / 3.0, 2f64.sqrt(), f64::NAN];
    let d = [3.0f64, 3.0, 2f64.sqrt(), 1.0];
    sv.push_register(RegisterValue::from_lanes(&c)?);
    sv.push_register(RegisterValue::from_lanes(&d)?);
    sv.push_operation("_mm256_mul_pd", LaneKind::F64);
    sv.push_register_bold(RegisterValue::from_lanes(&ops::mul_pd(&c, &d))?);

    Ok(())
}

/// 128-bit shuffles and saturating adds
pub fn shuffle(sv: &mut Viewer) -> Result<(), RegisterError> {
    let a = [10i32, 20, 30, 40];
    sv.push_register(RegisterValue::from_lanes(&a)?);
    sv.push_operation_sized(
        "_mm_shuffle_epi32(_MM_SHUFFLE(0, 1, 2, 3))",
        LaneKind::I32,
        RegisterSize::Bits128,
    );
    sv.push_register_bold(RegisterValue::from_lanes(&ops::shuffle_epi32(
        &a,
        ops::mm_shuffle(0, 1, 2, 3),
    ))?);
    sv.push_operation_sized(
        "_mm_shuffle_epi32(_MM_SHUFFLE(2, 3, 0, 1))",
        LaneKind::I32,
        RegisterSize::Bits128,
    );
    sv.push_register_bold(RegisterValue::from_lanes(&ops::shuffle_epi32(
        &a,
        ops::mm_shuffle(2, 3, 0, 1),
    ))?);

    sv.push_spacer();

    let x: [u8; 16] = sequence(240);
    let y = [8u8; 16];
    sv.push_register(RegisterValue::from_lanes(&x)?);
    sv.push_register(RegisterValue::from_lanes(&y)?);
    sv.push_operation_sized("_mm_adds_epu8", LaneKind::U8, RegisterSize::Bits128);
    sv.enable_value_intensity();
    sv.push_register_bold(RegisterValue::from_lanes(&ops::adds_epu8(&x, &y))?);

    Ok(())
}

/// One bit pattern read at every integer width. Hovering a lane only ever
/// links lanes of the same kind.
pub fn reinterpret(sv: &mut Viewer) -> Result<(), RegisterError> {
    sv.push_granularity_picker();

    // Bytes as _mm256_loadu_si256 would find them in memory
    let memory: [u8; 32] = [
        0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01, 0x00, 0xff, 0xee, 0xdd, 0xcc, 0xbb, 0xaa, 0x99,
        0x88, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0xff, 0xff,
        0xff, 0x7f,
    ];
    let pattern = RegisterValue::new(
        RawVector::from_bytes(BitFamily::Integer, &memory)?,
        LaneKind::U64,
    )?;

    for kind in [
        LaneKind::U8,
        LaneKind::I8,
        LaneKind::U16,
        LaneKind::I16,
        LaneKind::U32,
        LaneKind::I32,
        LaneKind::U64,
        LaneKind::I64,
    ] {
        sv.push_register(pattern.reinterpret(kind)?);
    }

    sv.push_spacer();
    sv.set_hex_mode();
    sv.push_register_bold(pattern.reinterpret(LaneKind::U32)?);
    sv.enable_value_intensity();
    sv.push_register(pattern.reinterpret(LaneKind::U8)?);

    Ok(())
}

fn to_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[..N]);
    out
}
