//! Arithmetic modulo a word-sized modulus.
//!
//! Every routine expects `modulus < 2^32`, so the product of two reduced
//! operands always fits in a `u64`.

pub const MOD: u64 = 1_000_000_007;

#[inline]
pub fn add_mod(a: u64, b: u64, modulus: u64) -> u64 {
    (a % modulus + b % modulus) % modulus
}

#[inline]
pub fn sub_mod(a: u64, b: u64, modulus: u64) -> u64 {
    (a % modulus + modulus - b % modulus) % modulus
}

#[inline]
pub fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    (a % modulus) * (b % modulus) % modulus
}
