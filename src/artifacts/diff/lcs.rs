//! Dynamic-programming LCS fallback
//!
//! Fills an `(N+1)×(M+1)` table of suffix LCS lengths and walks it from the
//! origin. O(N·M) time and space, so it is only meant for small inputs (a few
//! thousand lines) or for cross-checking the Myers implementation. It shares
//! the deletion-first tie-break: when skipping an element of `a` keeps the
//! remaining LCS as long as skipping an element of `b`, the deletion wins.

use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, Edit};
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LcsDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

/// Suffix LCS lengths, row-major, `width = b.len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    width: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    fn at(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }

    /// Length of the longest common subsequence of the full inputs.
    pub fn lcs_len(&self) -> usize {
        self.cells.first().copied().unwrap_or_default()
    }
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for LcsDiff<'d, T> {
    type Trace = LcsTable;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let (n, m) = (self.a.len(), self.b.len());
        let width = m + 1;
        let mut cells = vec![0; (n + 1) * width];

        for i in (0..n).rev() {
            for j in (0..m).rev() {
                cells[i * width + j] = if self.a[i] == self.b[j] {
                    cells[(i + 1) * width + j + 1] + 1
                } else {
                    cells[(i + 1) * width + j].max(cells[i * width + j + 1])
                };
            }
        }

        LcsTable { width, cells }
    }

    fn diff(&self) -> Vec<Edit<T>> {
        let table = self.compute_shortest_edit();
        let (n, m) = (self.a.len(), self.b.len());
        let mut diff = Vec::with_capacity(n + m);
        let (mut i, mut j) = (0, 0);

        while i < n && j < m {
            if self.a[i] == self.b[j] {
                diff.push(Edit::Equal {
                    value: self.a[i].clone(),
                });
                i += 1;
                j += 1;
            } else if table.at(i + 1, j) >= table.at(i, j + 1) {
                diff.push(Edit::Delete {
                    value: self.a[i].clone(),
                });
                i += 1;
            } else {
                diff.push(Edit::Insert {
                    value: self.b[j].clone(),
                });
                j += 1;
            }
        }

        diff.extend(self.a[i..].iter().map(|value| Edit::Delete {
            value: value.clone(),
        }));
        diff.extend(self.b[j..].iter().map(|value| Edit::Insert {
            value: value.clone(),
        }));

        diff
    }

    fn edit_distance(&self) -> usize {
        self.a.len() + self.b.len() - 2 * self.compute_shortest_edit().lcs_len()
    }
}
