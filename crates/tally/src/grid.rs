use std::{fmt, ops::Index};

/// Row-major two dimensional storage with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    inner: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Grid<T> {
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Iterates `((row, col), value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let cols = self.cols;
        self.inner
            .iter()
            .enumerate()
            .map(move |(i, value)| ((i / cols, i % cols), value))
    }

    fn inner_index(&self, index: (usize, usize)) -> usize {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "cell {index:?} outside {}x{} grid",
            self.rows,
            self.cols
        );
        index.0 * self.cols + index.1
    }
}

#[derive(Debug)]
pub struct NotAGridError;

impl fmt::Display for NotAGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rows have different lengths")
    }
}

impl std::error::Error for NotAGridError {}

impl<T> TryFrom<Vec<Vec<T>>> for Grid<T> {
    type Error = NotAGridError;

    fn try_from(value: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        let rows = value.len();
        if rows == 0 {
            return Ok(Grid {
                inner: Vec::new(),
                rows: 0,
                cols: 0,
            });
        }
        let cols = value[0].len();
        for row in &value[1..] {
            if row.len() != cols {
                return Err(NotAGridError);
            }
        }
        Ok(Grid {
            inner: value.into_iter().flatten().collect(),
            rows,
            cols,
        })
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.inner[self.inner_index(index)]
    }
}
