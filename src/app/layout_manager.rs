//! Arrangement of the per-core graphs.

use crate::constants::CORE_GRAPH_ROWS;

/// The grid the per-core graphs are drawn in, below the total graph.
///
/// Cores fill the grid row-major, so core `i` goes in row `i / columns` and
/// column `i % columns`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: usize,
    pub columns: usize,
}

impl GridLayout {
    /// Lay out `core_count` graphs in a grid at least [`CORE_GRAPH_ROWS`] rows
    /// tall, with half as many columns as there are cores.
    pub fn from_core_count(core_count: usize) -> Self {
        let columns = (core_count / 2).max(1);
        let rows = core_count.div_ceil(columns).max(CORE_GRAPH_ROWS);

        Self { rows, columns }
    }

    /// The number of cells in the grid.
    pub fn cells(&self) -> usize {
        self.rows * self.columns
    }

    /// The `(row, column)` of the `index`-th core, if it fits.
    pub fn cell(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.cells()).then(|| (index / self.columns, index % self.columns))
    }
}
