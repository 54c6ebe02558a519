//! Counting equal-valued cell pairs that share a diagonal.
//!
//! Cells are observed in row-major order. Each new cell first asks how many
//! earlier cells carry its key and only then records itself, so every pair is
//! counted exactly once, by its later cell. Main (`r - c`) and anti (`r + c`)
//! diagonals are tallied independently and the two counts are summed.

use std::{collections::HashMap, hash::Hash, io::BufRead, str::FromStr};

use crate::{
    grid::Grid,
    scan::{ScanError, Scanner},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagonalKey<V> {
    pub diagonal: i64,
    pub value: V,
}

impl<V> DiagonalKey<V> {
    pub fn main(row: usize, col: usize, value: V) -> Self {
        Self {
            diagonal: row as i64 - col as i64,
            value,
        }
    }

    pub fn anti(row: usize, col: usize, value: V) -> Self {
        Self {
            diagonal: row as i64 + col as i64,
            value,
        }
    }
}

/// Occurrence counts per key. Lookups of unseen keys return zero and leave the map untouched.
#[derive(Debug)]
pub struct ContributionCounter<V> {
    counts: HashMap<DiagonalKey<V>, u64>,
}

impl<V: Eq + Hash> Default for ContributionCounter<V> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<V: Eq + Hash> ContributionCounter<V> {
    pub fn count(&self, key: &DiagonalKey<V>) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn record(&mut self, key: DiagonalKey<V>) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Number of distinct keys seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Online pair counter fed one cell at a time.
#[derive(Debug)]
pub struct DiagonalCounter<V> {
    main: ContributionCounter<V>,
    anti: ContributionCounter<V>,
    total: u64,
}

impl<V: Eq + Hash + Clone> Default for DiagonalCounter<V> {
    fn default() -> Self {
        Self {
            main: ContributionCounter::default(),
            anti: ContributionCounter::default(),
            total: 0,
        }
    }
}

impl<V: Eq + Hash + Clone> DiagonalCounter<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cell and returns how many previously observed cells it pairs with.
    pub fn observe(&mut self, row: usize, col: usize, value: V) -> u64 {
        let main_key = DiagonalKey::main(row, col, value.clone());
        let anti_key = DiagonalKey::anti(row, col, value);

        let contribution = self.main.count(&main_key) + self.anti.count(&anti_key);
        self.main.record(main_key);
        self.anti.record(anti_key);

        self.total += contribution;
        contribution
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

pub fn count_diagonal_pairs<V: Eq + Hash + Clone>(grid: &Grid<V>) -> u64 {
    let mut counter = DiagonalCounter::new();
    for ((row, col), value) in grid.cells() {
        counter.observe(row, col, value.clone());
    }
    counter.total()
}

/// Outcome of a streamed scan. `complete` is false when the input ended early,
/// in which case `answer` covers only the first `cells` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiagonalScan {
    pub answer: u64,
    pub cells: usize,
    pub complete: bool,
}

/// Reads `n m` followed by `n * m` values and counts pairs as the values arrive.
///
/// Running out of input is not an error: the pairs found so far are returned.
/// Malformed tokens and read failures are.
pub fn count_diagonal_pairs_streamed<V, R>(
    scanner: &mut Scanner<R>,
) -> Result<DiagonalScan, ScanError>
where
    V: FromStr + Eq + Hash + Clone,
    R: BufRead,
{
    let mut scan = DiagonalScan::default();
    if !scanner.has_more()? {
        return Ok(scan);
    }
    let rows: usize = scanner.next()?;
    if !scanner.has_more()? {
        return Ok(scan);
    }
    let cols: usize = scanner.next()?;
    let expected = rows.saturating_mul(cols);
    log::debug!("scanning {rows}x{cols} grid");

    let mut counter = DiagonalCounter::new();
    for row in 0..rows {
        for col in 0..cols {
            if !scanner.has_more()? {
                log::debug!("input ended after {} of {expected} cells", scan.cells);
                scan.answer = counter.total();
                return Ok(scan);
            }
            let value: V = scanner.next()?;
            counter.observe(row, col, value);
            scan.cells += 1;
        }
    }

    scan.answer = counter.total();
    scan.complete = true;
    Ok(scan)
}
