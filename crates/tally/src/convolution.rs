//! Sums over splits of a budget `L` between two weighted sides.
//!
//! The inner sum over the second side is never enumerated: it is always a
//! single lookup into a prefix array. Two shapes:
//!
//! * multiplicative, `u * v <= L`: `sum_u w(u) * P[L / u]`
//! * additive, `u + v <= L`: `sum_u c(u) * P[L - u]`

use crate::{
    modular::{add_mod, mul_mod},
    prefix::PrefixSum,
    sieve::{divisor_counts, divisor_weights},
};

/// `sum_{u=1..=L} weights[u] * prefix[L / u] (mod modulus)`, one term per `u`.
pub fn multiplicative_convolution(
    weights: &[u64],
    prefix: &PrefixSum,
    limit: usize,
    modulus: u64,
) -> u64 {
    assert!(weights.len() > limit, "weights do not cover {limit}");
    assert!(prefix.len() > limit, "prefix does not cover {limit}");

    let mut ans = 0;
    for u in 1..=limit {
        let term = mul_mod(weights[u], prefix.at(limit / u), modulus);
        ans = add_mod(ans, term, modulus);
    }
    ans
}

/// Same sum as [`multiplicative_convolution`], but walking the `O(sqrt L)` blocks
/// of `u` that share the quotient `L / u`. Each block `[lo, hi]` contributes
/// `(W[hi] - W[lo - 1]) * P[L / lo]`, where `W` is the prefix of the `u`-side weights.
pub fn multiplicative_convolution_blocked(
    weight_prefix: &PrefixSum,
    prefix: &PrefixSum,
    limit: usize,
    modulus: u64,
) -> u64 {
    assert!(weight_prefix.len() > limit, "weight prefix does not cover {limit}");
    assert!(prefix.len() > limit, "prefix does not cover {limit}");

    let mut ans = 0;
    let mut lo = 1;
    while lo <= limit {
        let quotient = limit / lo;
        let hi = limit / quotient;
        let block = weight_prefix.sum(lo..hi + 1);
        ans = add_mod(ans, mul_mod(block, prefix.at(quotient), modulus), modulus);
        lo = hi + 1;
    }
    ans
}

/// `sum_{u=1..L-1} counts[u] * prefix[L - u] (mod modulus)`.
pub fn additive_convolution(
    counts: &[u64],
    prefix: &PrefixSum,
    limit: usize,
    modulus: u64,
) -> u64 {
    if limit < 2 {
        return 0;
    }
    assert!(counts.len() >= limit, "counts do not cover {}", limit - 1);
    assert!(prefix.len() >= limit, "prefix does not cover {}", limit - 1);

    let mut ans = 0;
    for u in 1..limit {
        let term = mul_mod(counts[u], prefix.at(limit - u), modulus);
        ans = add_mod(ans, term, modulus);
    }
    ans
}

/// Sum over all pairs of rectangles with areas `u * v <= L` of the product of
/// their resonance energies, where the energy of an area is the total
/// semi-perimeter of the rectangles with that area.
pub fn rectangle_resonance(limit: usize, modulus: u64) -> u64 {
    let energy = divisor_weights(limit, modulus);
    let prefix = PrefixSum::modular(&energy, modulus);
    let ans = multiplicative_convolution(&energy, &prefix, limit, modulus);
    log::debug!("rectangle resonance for {limit}: {ans}");
    ans
}

/// Like [`rectangle_resonance`], summing over quotient blocks.
pub fn rectangle_resonance_blocked(limit: usize, modulus: u64) -> u64 {
    let energy = divisor_weights(limit, modulus);
    let prefix = PrefixSum::modular(&energy, modulus);
    let ans = multiplicative_convolution_blocked(&prefix, &prefix, limit, modulus);
    log::debug!("rectangle resonance (blocked) for {limit}: {ans}");
    ans
}

/// Number of positive integer vectors `(a, b)`, `(c, d)` with `a * b + c * d <= L`.
pub fn dot_product_inequality(limit: usize, modulus: u64) -> u64 {
    let counts = divisor_counts(limit);
    let prefix = PrefixSum::modular(&counts, modulus);
    let ans = additive_convolution(&counts, &prefix, limit, modulus);
    log::debug!("dot product inequality for {limit}: {ans}");
    ans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modular::MOD;
    use proptest::prelude::*;

    fn brute_multiplicative(weights: &[u64], limit: usize, modulus: u64) -> u64 {
        let mut ans = 0;
        for u in 1..=limit {
            for v in 1..=limit {
                if u * v <= limit {
                    ans = add_mod(ans, mul_mod(weights[u], weights[v], modulus), modulus);
                }
            }
        }
        ans
    }

    fn brute_dot_product(limit: usize) -> u64 {
        let mut ans = 0;
        for a in 1..=limit {
            for b in 1..=limit {
                for c in 1..=limit {
                    for d in 1..=limit {
                        if a * b + c * d <= limit {
                            ans += 1;
                        }
                    }
                }
            }
        }
        ans
    }

    #[test]
    fn test_resonance_single_term() {
        // Only u = v = 1, whose energy is 1 + 1.
        assert_eq!(rectangle_resonance(1, MOD), 4);
        assert_eq!(rectangle_resonance_blocked(1, MOD), 4);
    }

    #[test]
    fn test_resonance_known_values() {
        assert_eq!(rectangle_resonance(2, MOD), 28);
        assert_eq!(rectangle_resonance(10, MOD), 1200);
    }

    #[test]
    fn test_plain_count_single_term() {
        let counts = divisor_counts(1);
        let prefix = PrefixSum::modular(&counts, MOD);
        assert_eq!(multiplicative_convolution(&counts, &prefix, 1, MOD), 1);
    }

    #[test]
    fn test_dot_product_small() {
        assert_eq!(dot_product_inequality(0, MOD), 0);
        assert_eq!(dot_product_inequality(1, MOD), 0);
        assert_eq!(dot_product_inequality(2, MOD), 1);
        assert_eq!(dot_product_inequality(3, MOD), 5);
    }

    #[test]
    fn test_dot_product_matches_enumeration() {
        for limit in 0..=14 {
            assert_eq!(
                dot_product_inequality(limit, MOD),
                brute_dot_product(limit),
                "L = {limit}"
            );
        }
    }

    #[test]
    fn test_multiplicative_matches_brute_force() {
        for limit in 1..=50 {
            let energy = divisor_weights(limit, MOD);
            let prefix = PrefixSum::modular(&energy, MOD);
            assert_eq!(
                multiplicative_convolution(&energy, &prefix, limit, MOD),
                brute_multiplicative(&energy, limit, MOD),
                "L = {limit}"
            );

            let counts = divisor_counts(limit);
            let prefix = PrefixSum::modular(&counts, MOD);
            assert_eq!(
                multiplicative_convolution(&counts, &prefix, limit, MOD),
                brute_multiplicative(&counts, limit, MOD),
                "L = {limit}"
            );
        }
    }

    #[test]
    fn test_small_modulus_reduces_every_step() {
        let limit = 40;
        let energy = divisor_weights(limit, 97);
        let plain = crate::sieve::sieve(limit, None, |d, k| (d + k / d) as u64);
        let expected = brute_multiplicative(&plain, limit, 97);
        assert_eq!(rectangle_resonance(limit, 97), expected);
        assert!(energy.iter().all(|&e| e < 97));
    }

    #[test]
    #[should_panic]
    fn test_short_prefix_is_rejected() {
        let counts = divisor_counts(5);
        let prefix = PrefixSum::modular(&counts[..3], MOD);
        multiplicative_convolution(&counts, &prefix, 5, MOD);
    }

    proptest! {
        #[test]
        fn prop_blocked_matches_per_term(limit in 1usize..3000) {
            prop_assert_eq!(
                rectangle_resonance_blocked(limit, MOD),
                rectangle_resonance(limit, MOD)
            );
        }

        #[test]
        fn prop_blocked_with_arbitrary_weights(
            weights in proptest::collection::vec(0u64..MOD, 2..200),
        ) {
            let limit = weights.len() - 1;
            let weight_prefix = PrefixSum::modular(&weights, MOD);
            let other: Vec<u64> = weights.iter().rev().copied().collect();
            let prefix = PrefixSum::modular(&other, MOD);
            let mut expected = 0;
            for u in 1..=limit {
                expected = add_mod(expected, mul_mod(weights[u], prefix.at(limit / u), MOD), MOD);
            }
            prop_assert_eq!(
                multiplicative_convolution_blocked(&weight_prefix, &prefix, limit, MOD),
                expected
            );
        }
    }
}
