//! The occupancy [`Grid`] searched by every strategy.
//!
//! A grid is built once by the caller and is read-only afterwards: there are
//! no mutation methods. Construction validates the input, so a `Grid` value
//! is always rectangular and non-empty.

use std::fmt;

use crate::geom::{Bounds, BoundsIter, Coord};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Free,
    Blocked,
}

impl Cell {
    /// Whether the cell is blocked.
    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Cell::Blocked)
    }

    /// Text form: `.` for free, `#` for blocked.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Free => '.',
            Cell::Blocked => '#',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' | '0' => Some(Cell::Free),
            '#' | '1' => Some(Cell::Blocked),
            _ => None,
        }
    }
}

/// Errors raised while building or querying a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows, or its rows have no columns.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// An integer cell value other than 0 (free) or 1 (blocked).
    InvalidValue { value: u8, pos: Coord },
    /// A text cell other than `.`/`0` (free) or `#`/`1` (blocked).
    InvalidRune { ch: char, pos: Coord },
    /// A cell query outside the grid.
    InvalidCoordinate(Coord),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} columns, expected {expected}"
            ),
            Self::InvalidValue { value, pos } => {
                write!(f, "grid: invalid cell value {value} at {pos}")
            }
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid: invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::InvalidCoordinate(c) => write!(f, "grid: coordinate {c} out of bounds"),
        }
    }
}

impl std::error::Error for GridError {}

/// An immutable rectangular occupancy map.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `rows × cols` grid of free cells.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        Self::from_fn(rows, cols, |_| Cell::Free)
    }

    /// Create a `rows × cols` grid whose cells are produced by `f`, visited
    /// in row-major order.
    pub fn from_fn(rows: i32, cols: i32, mut f: impl FnMut(Coord) -> Cell) -> Result<Self, GridError> {
        let bounds = Bounds::new(rows, cols);
        if bounds.is_empty() {
            return Err(GridError::Empty);
        }
        let cells = bounds.iter().map(&mut f).collect();
        Ok(Self { bounds, cells })
    }

    /// Create a `rows × cols` grid with the given cells blocked.
    pub fn with_blocked(
        rows: i32,
        cols: i32,
        blocked: impl IntoIterator<Item = Coord>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, cols)?;
        for c in blocked {
            let i = grid
                .bounds
                .index(c)
                .ok_or(GridError::InvalidCoordinate(c))?;
            grid.cells[i] = Cell::Blocked;
        }
        Ok(grid)
    }

    /// Build a grid from integer rows: `0` is free, `1` is blocked.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(rows.len() * width);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                let cell = match value {
                    0 => Cell::Free,
                    1 => Cell::Blocked,
                    _ => {
                        return Err(GridError::InvalidValue {
                            value,
                            pos: Coord::new(y as i32, x as i32),
                        });
                    }
                };
                cells.push(cell);
            }
        }
        Ok(Self {
            bounds: Bounds::new(rows.len() as i32, width as i32),
            cells,
        })
    }

    /// Parse a text grid, one line per row. `.` or `0` is free, `#` or `1`
    /// is blocked. Surrounding whitespace on each line is ignored, as are
    /// blank lines.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = lines.first().map(|l| l.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(lines.len() * width);
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::Ragged {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Coord::new(y as i32, x as i32);
                cells.push(Cell::from_char(ch).ok_or(GridError::InvalidRune { ch, pos })?);
            }
        }
        Ok(Self {
            bounds: Bounds::new(lines.len() as i32, width as i32),
            cells,
        })
    }

    /// The bounds covered by this grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// Whether the cell at `c` is blocked.
    ///
    /// Fails with [`GridError::InvalidCoordinate`] when `c` is out of bounds.
    pub fn is_blocked(&self, c: Coord) -> Result<bool, GridError> {
        self.at(c)
            .map(Cell::is_blocked)
            .ok_or(GridError::InvalidCoordinate(c))
    }

    /// Whether `c` is in bounds and free. This is the passability test used
    /// for successor generation.
    #[inline]
    pub fn is_free(&self, c: Coord) -> bool {
        matches!(self.at(c), Some(Cell::Free))
    }

    /// The cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// Count blocked cells.
    pub fn count_blocked(&self) -> usize {
        self.cells.iter().filter(|c| c.is_blocked()).count()
    }

    /// Row-major iterator over `(Coord, Cell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.bounds.cols as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<String>) -> Result<Self, GridError> {
        Self::parse(&rows.join("\n"))
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        grid.to_string().lines().map(str::to_owned).collect()
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Coord, Cell)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: BoundsIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Coord, Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let c = self.inner.next()?;
        Some((c, self.grid.cells[self.grid.bounds.index(c)?]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Coord, Cell);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}
