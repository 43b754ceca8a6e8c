use gridtrace_core::{Coord, Grid};

/// A fixed, ordered list of move offsets.
///
/// The order is part of each strategy's observable behaviour: it decides
/// tie-breaks and therefore which path is found and in which order cells
/// appear in the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSet(&'static [Coord]);

impl MoveSet {
    /// Up, right, down, down-right, left, up-left.
    ///
    /// Used by BFS, DFS, DLS, IDDFS and bidirectional BFS.
    pub const SIX_WAY: MoveSet = MoveSet(&[
        Coord::new(-1, 0),
        Coord::new(0, 1),
        Coord::new(1, 0),
        Coord::new(1, 1),
        Coord::new(0, -1),
        Coord::new(-1, -1),
    ]);

    /// Up, right, down, left, then down-right, up-left, down-left, up-right.
    ///
    /// Used by uniform-cost search.
    pub const EIGHT_WAY: MoveSet = MoveSet(&[
        Coord::new(-1, 0),
        Coord::new(0, 1),
        Coord::new(1, 0),
        Coord::new(0, -1),
        Coord::new(1, 1),
        Coord::new(-1, -1),
        Coord::new(1, -1),
        Coord::new(-1, 1),
    ]);

    /// The offsets, in expansion order.
    #[inline]
    pub fn offsets(self) -> &'static [Coord] {
        self.0
    }

    /// Number of offsets.
    #[inline]
    pub fn len(self) -> usize {
        self.0.len()
    }

    /// Always `false` for the provided sets.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// The `i`-th offset, if any.
    #[inline]
    pub fn get(self, i: usize) -> Option<Coord> {
        self.0.get(i).copied()
    }

    /// Whether `to` is one step from `from` under this move set.
    pub fn connects(self, from: Coord, to: Coord) -> bool {
        self.0.contains(&(to - from))
    }
}

/// Cached successor computation helper.
///
/// Enumerates the successors of a cell in move-set order, keeping only those
/// that are in bounds and free.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the passable successors of `p` under `moves`, in move order.
    pub fn expand(&mut self, grid: &Grid, p: Coord, moves: MoveSet) -> &[Coord] {
        self.buf.clear();
        for &d in moves.offsets() {
            let n = p + d;
            // `is_free` checks bounds before reading the cell.
            if grid.is_free(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_way_order() {
        let offs: Vec<(i32, i32)> = MoveSet::SIX_WAY
            .offsets()
            .iter()
            .map(|&c| c.into())
            .collect();
        assert_eq!(offs, vec![(-1, 0), (0, 1), (1, 0), (1, 1), (0, -1), (-1, -1)]);
    }

    #[test]
    fn eight_way_covers_all_directions() {
        let mut offs: Vec<Coord> = MoveSet::EIGHT_WAY.offsets().to_vec();
        assert_eq!(offs[..4], [
            Coord::new(-1, 0),
            Coord::new(0, 1),
            Coord::new(1, 0),
            Coord::new(0, -1)
        ]);
        offs.sort();
        offs.dedup();
        assert_eq!(offs.len(), 8);
        assert!(!offs.contains(&Coord::ZERO));
    }

    #[test]
    fn expand_filters_blocked_and_out_of_bounds() {
        let grid = Grid::parse("..\n#.").unwrap();
        let mut nb = Neighbors::new();
        // From (0,0): up/left out of bounds, down blocked, right and down-right free.
        let got = nb.expand(&grid, Coord::new(0, 0), MoveSet::SIX_WAY).to_vec();
        assert_eq!(got, vec![Coord::new(0, 1), Coord::new(1, 1)]);
    }

    #[test]
    fn six_way_lacks_anti_diagonal() {
        // Down-right and up-left are moves, down-left and up-right are not.
        let m = MoveSet::SIX_WAY;
        assert!(m.connects(Coord::new(0, 0), Coord::new(1, 1)));
        assert!(!m.connects(Coord::new(0, 1), Coord::new(1, 0)));
        assert!(MoveSet::EIGHT_WAY.connects(Coord::new(0, 1), Coord::new(1, 0)));
    }
}
