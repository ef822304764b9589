//! The [`Grid`] type: an immutable rectangular field of cells.
//!
//! A grid is built once from text (or a function) and only read afterwards.
//! Searches borrow it; callers that need a modified map (an obstacle added,
//! a wall removed) take an owned copy with [`Grid::with_cell`] or
//! [`Grid::map`].

use std::fmt;

use crate::error::GridError;
use crate::geom::{Point, Range};

/// A 2D grid of `T` values stored row-major.
///
/// Invariant: `cells.len() == bounds.len()`, so every row has the same width.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T = u8> {
    cells: Vec<T>,
    bounds: Range,
}

impl<T> Grid<T> {
    /// Create a grid by evaluating `f` at every point in row-major order.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> T) -> Self {
        let bounds = Range::sized(width.max(0), height.max(0));
        let cells = bounds.iter().map(&mut f).collect();
        Self { cells, bounds }
    }

    /// Parse text into a grid, converting each byte with `f`.
    ///
    /// Leading and trailing blank lines are ignored; a trailing `\r` on each
    /// line is stripped. Every remaining row must have the width of the first.
    pub fn parse_with(
        text: &str,
        mut f: impl FnMut(Point, u8) -> Result<T, GridError>,
    ) -> Result<Self, GridError> {
        let body = text.trim_matches(|c| c == '\n' || c == '\r');
        if body.is_empty() {
            return Err(GridError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(body.len());
        let mut width = None;
        let mut height = 0usize;

        for (row, line) in body.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line).as_bytes();
            let expected = *width.get_or_insert(line.len());
            if line.len() != expected {
                return Err(GridError::MalformedGrid {
                    row,
                    expected,
                    found: line.len(),
                });
            }
            for (col, &b) in line.iter().enumerate() {
                cells.push(f(Point::new(col as i32, row as i32), b)?);
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            cells,
            bounds: Range::sized(width as i32, height as i32),
        })
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// `(height, width)`, in that order.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height() as usize, self.width() as usize)
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&T> {
        self.bounds.index_of(p).map(|i| &self.cells[i])
    }

    /// Iterate over `(Point, &T)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.bounds.iter().zip(self.cells.iter())
    }

    /// Points whose cell satisfies `pred`, in row-major order.
    pub fn positions<'a>(
        &'a self,
        mut pred: impl FnMut(&T) -> bool + 'a,
    ) -> impl Iterator<Item = Point> + 'a {
        self.iter().filter_map(move |(p, c)| pred(c).then_some(p))
    }

    /// Build a new grid of the same shape from this one.
    pub fn map<U>(&self, mut f: impl FnMut(Point, &T) -> U) -> Grid<U> {
        Grid {
            cells: self.iter().map(|(p, c)| f(p, c)).collect(),
            bounds: self.bounds,
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(width: i32, height: i32, value: T) -> Self {
        Self::from_fn(width, height, |_| value.clone())
    }

    /// Owned copy with the cell at `p` replaced. Out-of-bounds points leave
    /// the copy unchanged.
    pub fn with_cell(&self, p: Point, value: T) -> Self {
        let mut copy = self.clone();
        if let Some(i) = self.bounds.index_of(p) {
            copy.cells[i] = value;
        }
        copy
    }
}

impl<T: PartialEq> Grid<T> {
    /// First point (row-major) holding `value`.
    pub fn find(&self, value: &T) -> Option<Point> {
        self.iter().find(|(_, c)| *c == value).map(|(p, _)| p)
    }

    /// Number of cells equal to `value`.
    pub fn count(&self, value: &T) -> usize {
        self.cells.iter().filter(|c| *c == value).count()
    }
}

impl Grid<u8> {
    /// Parse a character grid.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        Self::parse_with(text, |_, b| Ok(b))
    }

    /// Position of the first `marker` byte, failing with
    /// [`GridError::MissingMarker`] when absent.
    pub fn locate(&self, marker: char) -> Result<Point, GridError> {
        u8::try_from(marker)
            .ok()
            .and_then(|b| self.find(&b))
            .ok_or(GridError::MissingMarker(marker))
    }
}

impl fmt::Display for Grid<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.width().max(1) as usize;
        for row in self.cells.chunks(w) {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}
