//! Contribution-order counting: diagonal pairs in a grid, harmonic divisor
//! sieves, prefix aggregation and the convolutions built on top of them.

pub mod convolution;
pub mod diagonal;
pub mod grid;
pub mod modular;
pub mod prefix;
pub mod scan;
pub mod sieve;

pub use convolution::{
    additive_convolution, dot_product_inequality, multiplicative_convolution,
    multiplicative_convolution_blocked, rectangle_resonance, rectangle_resonance_blocked,
};
pub use diagonal::{
    count_diagonal_pairs, count_diagonal_pairs_streamed, ContributionCounter, DiagonalCounter,
    DiagonalKey, DiagonalScan,
};
pub use grid::{Grid, NotAGridError};
pub use modular::MOD;
pub use prefix::{Origin, PrefixOptions, PrefixSum};
pub use scan::{ScanError, Scanner};
pub use sieve::{divisor_counts, divisor_weights, sieve};
