use std::ops::Range;

use crate::modular::{add_mod, sub_mod};

/// What the prefix array holds at index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    /// `P[0] = 0`; the value at index 0 is ignored.
    #[default]
    Zero,
    /// `P[0] = A[0]`.
    Carry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrefixOptions {
    pub modulus: Option<u64>,
    pub origin: Origin,
}

/// Running totals `P[k] = P[k - 1] + A[k]`, built in a single pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSum {
    sums: Vec<u64>,
    modulus: Option<u64>,
}

impl PrefixSum {
    pub fn build(values: &[u64], options: PrefixOptions) -> Self {
        let PrefixOptions { modulus, origin } = options;
        let sums: Vec<u64> = values
            .iter()
            .enumerate()
            .map(|(i, &x)| if i == 0 && origin == Origin::Zero { 0 } else { x })
            .scan(0u64, |sum, x| {
                *sum = match modulus {
                    Some(modulus) => add_mod(*sum, x, modulus),
                    None => *sum + x,
                };
                Some(*sum)
            })
            .collect();
        PrefixSum { sums, modulus }
    }

    pub fn plain(values: &[u64]) -> Self {
        Self::build(values, PrefixOptions::default())
    }

    pub fn modular(values: &[u64], modulus: u64) -> Self {
        Self::build(
            values,
            PrefixOptions {
                modulus: Some(modulus),
                ..Default::default()
            },
        )
    }

    pub fn at(&self, k: usize) -> u64 {
        self.sums[k]
    }

    pub fn len(&self) -> usize {
        self.sums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.sums
    }

    /// Total of the aggregated values at the indices in `range`.
    pub fn sum(&self, range: Range<usize>) -> u64 {
        assert!(range.end <= self.sums.len());
        if range.is_empty() {
            return 0;
        }
        let upper = self.sums[range.end - 1];
        let lower = if range.start == 0 {
            0
        } else {
            self.sums[range.start - 1]
        };
        match self.modulus {
            Some(modulus) => sub_mod(upper, lower, modulus),
            None => upper - lower,
        }
    }
}
