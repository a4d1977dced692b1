//! Portable stand-ins for a few SSE/AVX2 intrinsics
//!
//! Arrays are in lane-index order (lane 0 first). The 256-bit unpack
//! operations work within each 128-bit half, like the hardware does.

pub fn unpacklo_epi8(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    unpack_epi8(a, b, 0)
}

pub fn unpackhi_epi8(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    unpack_epi8(a, b, 8)
}

fn unpack_epi8(a: &[u8; 32], b: &[u8; 32], from: usize) -> [u8; 32] {
    let mut out = [0u8; 32];
    for half in [0, 16] {
        for i in 0..8 {
            out[half + 2 * i] = a[half + from + i];
            out[half + 2 * i + 1] = b[half + from + i];
        }
    }
    out
}

/// All-ones lane where equal, zero elsewhere
pub fn cmpeq_epi64(a: &[i64; 4], b: &[i64; 4]) -> [u64; 4] {
    lanewise(a, b, |x, y| if x == y { u64::MAX } else { 0 })
}

pub fn add_ps(a: &[f32; 8], b: &[f32; 8]) -> [f32; 8] {
    lanewise(a, b, |x, y| x + y)
}

pub fn mul_pd(a: &[f64; 4], b: &[f64; 4]) -> [f64; 4] {
    lanewise(a, b, |x, y| x * y)
}

/// `_mm_shuffle_epi32`: lane `i` takes source lane `(imm >> 2i) & 3`
pub fn shuffle_epi32(a: &[i32; 4], imm: u8) -> [i32; 4] {
    let mut out = [0i32; 4];
    for (i, lane) in out.iter_mut().enumerate() {
        *lane = a[((imm >> (2 * i)) & 3) as usize];
    }
    out
}

/// `_MM_SHUFFLE(z, y, x, w)`
pub const fn mm_shuffle(z: u8, y: u8, x: u8, w: u8) -> u8 {
    (z << 6) | (y << 4) | (x << 2) | w
}

pub fn adds_epu8(a: &[u8; 16], b: &[u8; 16]) -> [u8; 16] {
    lanewise(a, b, u8::saturating_add)
}

/// Apply `op` to each pair of lanes
fn lanewise<T, U, const N: usize>(a: &[T; N], b: &[T; N], op: impl Fn(T, T) -> U) -> [U; N]
where
    T: Copy,
    U: Copy + Default,
{
    let mut out = [U::default(); N];
    for ((lane, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *lane = op(x, y);
    }
    out
}
