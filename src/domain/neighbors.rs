//! Neighbour resolution for the eight-connected board.
//!
//! A bounded board clips neighbours that fall off an edge; a toroidal board
//! wraps each axis modulo its length. The result is a set: on boards with a
//! dimension of 1 or 2 the wrapped offsets land on repeated indices (and can
//! land on the cell itself), which collapse to a single entry.

/// Edge handling for neighbour lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Topology {
    /// Cells past the edge do not exist.
    #[default]
    Bounded,
    /// Opposite edges are adjacent.
    Toroidal,
}

impl Topology {
    pub const fn from_unbounded(unbounded: bool) -> Self {
        if unbounded { Topology::Toroidal } else { Topology::Bounded }
    }

    pub const fn is_unbounded(self) -> bool {
        matches!(self, Topology::Toroidal)
    }

    /// Resolve one axis coordinate, `None` when it falls off a bounded edge.
    fn resolve_axis(self, value: isize, len: usize) -> Option<usize> {
        let n = len as isize;
        if (0..n).contains(&value) {
            return Some(value as usize);
        }
        match self {
            Topology::Bounded => None,
            Topology::Toroidal => Some(value.rem_euclid(n) as usize),
        }
    }
}

const OFFSETS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Linear indices of the neighbours of `index` on a `rows x cols` board,
/// sorted ascending with duplicates removed.
///
/// Callers pass an index already checked against a non-empty grid; the
/// public entry point is [`Grid::neighbors`](super::Grid::neighbors).
pub(crate) fn neighbors_of(index: usize, rows: usize, cols: usize, topology: Topology) -> Vec<usize> {
    debug_assert!(index < rows * cols);
    let row = (index / cols) as isize;
    let col = (index % cols) as isize;

    let mut result: Vec<usize> = OFFSETS_8
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = topology.resolve_axis(row + dr, rows)?;
            let c = topology.resolve_axis(col + dc, cols)?;
            Some(r * cols + c)
        })
        .collect();
    result.sort_unstable();
    result.dedup();
    result
}
