//! Path reconstruction from parent pointers.

use gridtrace_core::Coord;

use crate::state::ParentMap;

/// Follow parent pointers from `from` up to its root, returning
/// `[from, parent(from), ..., root]`.
///
/// A coordinate missing from the map ends the walk as if it were a root.
pub(crate) fn walk_to_root(parents: &ParentMap, from: Coord) -> Vec<Coord> {
    let mut walk = vec![from];
    let mut cur = from;
    while let Some(Some(prev)) = parents.get(cur) {
        walk.push(prev);
        cur = prev;
    }
    walk
}

/// The root-to-`terminal` route recorded in `parents`.
pub(crate) fn reconstruct(parents: &ParentMap, terminal: Coord) -> Vec<Coord> {
    let mut path = walk_to_root(parents, terminal);
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NodeMap;
    use gridtrace_core::Bounds;

    fn chain() -> ParentMap {
        let mut p: ParentMap = NodeMap::new(Bounds::new(3, 3));
        p.insert(Coord::new(0, 0), None);
        p.insert(Coord::new(0, 1), Some(Coord::new(0, 0)));
        p.insert(Coord::new(1, 2), Some(Coord::new(0, 1)));
        p
    }

    #[test]
    fn reconstruct_root_to_terminal() {
        assert_eq!(
            reconstruct(&chain(), Coord::new(1, 2)),
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 2)]
        );
    }

    #[test]
    fn walk_terminal_to_root() {
        assert_eq!(
            walk_to_root(&chain(), Coord::new(0, 1)),
            vec![Coord::new(0, 1), Coord::new(0, 0)]
        );
    }

    #[test]
    fn root_alone() {
        assert_eq!(reconstruct(&chain(), Coord::new(0, 0)), vec![Coord::new(0, 0)]);
    }
}
