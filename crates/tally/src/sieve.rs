//! Harmonic sieves over `1..=limit`.
//!
//! Every divisor `d` walks its multiples `d, 2d, 3d, ...` and deposits a weight
//! on each one, for `O(limit log limit)` work in total. Index 0 is always zero.

use crate::modular::add_mod;

/// Deposits `weight(d, k)` on `k` for every divisor `d` of every `k <= limit`.
pub fn sieve<F>(limit: usize, modulus: Option<u64>, mut weight: F) -> Vec<u64>
where
    F: FnMut(usize, usize) -> u64,
{
    let mut acc = vec![0u64; limit + 1];
    for d in 1..=limit {
        for k in (d..=limit).step_by(d) {
            let w = weight(d, k);
            acc[k] = match modulus {
                Some(modulus) => add_mod(acc[k], w, modulus),
                None => acc[k] + w,
            };
        }
    }
    log::trace!("sieved {limit} values");
    acc
}

/// `counts[k]` is the number of positive divisors of `k`.
pub fn divisor_counts(limit: usize) -> Vec<u64> {
    sieve(limit, None, |_, _| 1)
}

/// `weights[k]` is the sum of `d + k / d` over the divisors `d` of `k`,
/// i.e. the total semi-perimeter of all `d x (k / d)` rectangles of area `k`.
pub fn divisor_weights(limit: usize, modulus: u64) -> Vec<u64> {
    sieve(limit, Some(modulus), |d, k| (d + k / d) as u64)
}
