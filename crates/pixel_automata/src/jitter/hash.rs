//! Deterministic integer hashing for reproducible per-cell randomness.
//!
//! Naming follows `hash{inputs}{outputs}{input_type}{output_type}{bits}`, so
//! `hash41uu64` takes four `u64`s and returns one `u64`.

/// Multiply-xorshift mixing for 64-bit values.
#[inline]
pub(crate) fn mix64(mut h: u64) -> u64 {
  h = h.wrapping_mul(0x517c_c1b7_2722_0a95);
  h ^= h >> 32;
  h = h.wrapping_mul(0x517c_c1b7_2722_0a95);
  h ^= h >> 32;
  h
}

#[inline]
pub fn hash41uu64(a: u64, b: u64, c: u64, d: u64) -> u64 {
  mix64(a ^ b.rotate_left(16) ^ c.rotate_left(32) ^ d.rotate_left(48))
}
