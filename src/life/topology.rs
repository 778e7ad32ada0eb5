//! Torus topology: dimensions, coordinates and wrap-around neighbor offsets

use crate::error::{LifeError, Result};

/// Linear key into generation buffers (`y * columns + x`)
pub type CellIndex = usize;

/// Relative `(dx, dy)` offsets of the eight Moore neighbors
pub const NEIGHBOR_MASK: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Grid size in cells. Both axes are non-zero once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDimensions {
    columns: usize,
    rows: usize,
}

impl GridDimensions {
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(LifeError::InvalidDimensions { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    /// Derive dimensions from a drawing surface measured in pixels
    /// (terminal character cells for the terminal surface).
    pub fn from_surface(width: usize, height: usize, cell_size: usize) -> Result<Self> {
        if cell_size == 0 {
            return Err(LifeError::InvalidCellSize);
        }
        Self::new(width / cell_size, height / cell_size)
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.columns * self.rows
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

/// Wrap a coordinate component shifted by at most one step onto `[0, bound)`.
///
/// Only `-1`, `0..bound` and `bound` are valid inputs; this is not a general
/// modulo.
#[inline]
pub fn wrap_axis(point: isize, bound: usize) -> usize {
    debug_assert!(
        point >= -1 && point <= bound as isize,
        "point {point} is more than one step outside [0, {bound})"
    );
    if point == -1 {
        bound - 1
    } else if point == bound as isize {
        0
    } else {
        point as usize
    }
}

/// Apply one mask offset to `coord`, wrapping each axis independently.
#[inline]
pub fn wrap(coord: Coordinate, (dx, dy): (isize, isize), dims: GridDimensions) -> Coordinate {
    Coordinate {
        x: wrap_axis(coord.x as isize + dx, dims.columns),
        y: wrap_axis(coord.y as isize + dy, dims.rows),
    }
}

#[inline]
pub fn cell_index(coord: Coordinate, dims: GridDimensions) -> CellIndex {
    coord.y * dims.columns + coord.x
}

#[inline]
pub fn coordinate_of(index: CellIndex, dims: GridDimensions) -> Coordinate {
    Coordinate {
        x: index % dims.columns,
        y: index / dims.columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_axis_columns() {
        assert_eq!(wrap_axis(-1, 5), 4);
        assert_eq!(wrap_axis(5, 5), 0);
        for x in 0..5 {
            assert_eq!(wrap_axis(x, 5), x as usize);
        }
    }

    #[test]
    fn wrap_axis_rows() {
        assert_eq!(wrap_axis(-1, 4), 3);
        assert_eq!(wrap_axis(4, 4), 0);
        for y in 0..4 {
            assert_eq!(wrap_axis(y, 4), y as usize);
        }
    }

    #[test]
    fn wrap_is_per_axis() {
        let dims = GridDimensions::new(5, 4).unwrap();
        let corner = Coordinate { x: 0, y: 0 };
        assert_eq!(wrap(corner, (-1, -1), dims), Coordinate { x: 4, y: 3 });
        assert_eq!(wrap(corner, (-1, 1), dims), Coordinate { x: 4, y: 1 });

        let far = Coordinate { x: 4, y: 3 };
        assert_eq!(wrap(far, (1, 1), dims), Coordinate { x: 0, y: 0 });
        assert_eq!(wrap(far, (0, 1), dims), Coordinate { x: 4, y: 0 });
    }

    #[test]
    fn single_axis_wraps_onto_itself() {
        assert_eq!(wrap_axis(-1, 1), 0);
        assert_eq!(wrap_axis(1, 1), 0);
    }

    #[test]
    fn index_roundtrip() {
        let dims = GridDimensions::new(5, 4).unwrap();
        for index in 0..dims.total() {
            assert_eq!(cell_index(coordinate_of(index, dims), dims), index);
        }
        assert_eq!(cell_index(Coordinate { x: 2, y: 3 }, dims), 17);
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(
            GridDimensions::new(0, 4),
            Err(LifeError::InvalidDimensions { columns: 0, rows: 4 })
        ));
        assert!(GridDimensions::new(3, 0).is_err());
    }

    #[test]
    fn dimensions_from_surface() {
        let dims = GridDimensions::from_surface(300, 150, 3).unwrap();
        assert_eq!((dims.columns(), dims.rows()), (100, 50));

        assert!(matches!(
            GridDimensions::from_surface(80, 24, 0),
            Err(LifeError::InvalidCellSize)
        ));
        assert!(matches!(
            GridDimensions::from_surface(2, 24, 3),
            Err(LifeError::InvalidDimensions { columns: 0, .. })
        ));
    }
}
