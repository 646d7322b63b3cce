//! Shape catalog and matrix rotation.
//!
//! Each piece is a small matrix of cells. The catalog is immutable `const` data;
//! [`template`] hands out a copy, and [`Shape::rotate_cw`] produces a new value,
//! so nothing a falling piece does can reach back into the catalog.

use crate::types::{Cell, PieceKind};

/// Largest width/height any catalog shape reaches in any orientation.
pub const MAX_SHAPE_DIM: usize = 4;

/// Row-major id matrices, in catalog order (`I` first).
const TEMPLATES: [&[&[u8]]; 7] = [
    &[&[1, 1, 1, 1]],
    &[&[2, 0, 0], &[2, 2, 2]],
    &[&[0, 0, 3], &[3, 3, 3]],
    &[&[4, 4], &[4, 4]],
    &[&[0, 5, 5], &[5, 5, 0]],
    &[&[0, 6, 0], &[6, 6, 6]],
    &[&[7, 7, 0], &[0, 7, 7]],
];

/// A piece matrix. Only the top-left `width × height` region is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [[Cell; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
    width: u8,
    height: u8,
}

impl Shape {
    /// Build a shape from rows of ids (0 = empty, 1-7 = piece kind).
    ///
    /// Rows must be non-empty, equally long, and at most [`MAX_SHAPE_DIM`] in
    /// either direction. Unknown ids are treated as empty.
    pub fn from_ids(rows: &[&[u8]]) -> Self {
        let height = rows.len().min(MAX_SHAPE_DIM);
        let width = rows.first().map_or(0, |r| r.len()).min(MAX_SHAPE_DIM);
        let mut cells = [[None; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().take(height).enumerate() {
            for (x, &id) in row.iter().take(width).enumerate() {
                cells[y][x] = PieceKind::from_id(id);
            }
        }
        Self {
            cells,
            width: width as u8,
            height: height as u8,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at (x, y) within the matrix; `None` outside it.
    pub fn get(&self, x: u8, y: u8) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y as usize][x as usize]
    }

    /// Occupied sub-cells as `(dx, dy, kind)` offsets from the top-left corner.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, PieceKind)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).filter_map(move |x| {
                self.cells[y as usize][x as usize].map(|kind| (x as i8, y as i8, kind))
            })
        })
    }

    /// Rotate 90° clockwise: transpose, then reverse each row.
    ///
    /// The new matrix is `height` wide and `width` tall.
    pub fn rotate_cw(&self) -> Shape {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut cells = [[None; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, row) in cells.iter_mut().enumerate().take(w) {
            for (j, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - j][i];
            }
        }
        Shape {
            cells,
            width: self.height,
            height: self.width,
        }
    }
}

/// Fresh copy of the catalog shape for `kind`, in spawn orientation.
pub fn template(kind: PieceKind) -> Shape {
    Shape::from_ids(TEMPLATES[kind.index()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(shape: &Shape) -> Vec<Vec<u8>> {
        (0..shape.height())
            .map(|y| {
                (0..shape.width())
                    .map(|x| shape.get(x, y).map_or(0, PieceKind::id))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn every_template_has_four_cells_of_its_own_kind() {
        for kind in PieceKind::ALL {
            let shape = template(kind);
            let cells: Vec<_> = shape.occupied().collect();
            assert_eq!(cells.len(), 4, "{:?}", kind);
            assert!(cells.iter().all(|&(_, _, k)| k == kind));
        }
    }

    #[test]
    fn template_dimensions() {
        assert_eq!((template(PieceKind::I).width(), template(PieceKind::I).height()), (4, 1));
        assert_eq!((template(PieceKind::O).width(), template(PieceKind::O).height()), (2, 2));
        assert_eq!((template(PieceKind::T).width(), template(PieceKind::T).height()), (3, 2));
    }

    #[test]
    fn rotate_t_clockwise() {
        let t = template(PieceKind::T);
        assert_eq!(ids(&t), vec![vec![0, 6, 0], vec![6, 6, 6]]);
        assert_eq!(ids(&t.rotate_cw()), vec![vec![6, 0], vec![6, 6], vec![6, 0]]);
    }

    #[test]
    fn rotate_i_swaps_dimensions() {
        let i = template(PieceKind::I).rotate_cw();
        assert_eq!((i.width(), i.height()), (1, 4));
        assert_eq!(ids(&i), vec![vec![1], vec![1], vec![1], vec![1]]);
    }

    #[test]
    fn rotating_a_copy_leaves_catalog_untouched() {
        let mut shape = template(PieceKind::L);
        for _ in 0..3 {
            shape = shape.rotate_cw();
        }
        assert_ne!(shape, template(PieceKind::L));
        assert_eq!(ids(&template(PieceKind::L)), vec![vec![0, 0, 3], vec![3, 3, 3]]);
    }

    #[test]
    fn get_outside_matrix_is_empty() {
        let o = template(PieceKind::O);
        assert_eq!(o.get(2, 0), None);
        assert_eq!(o.get(0, 2), None);
    }
}
