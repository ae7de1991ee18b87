use arrowsmith_core::geometry::Point;

use crate::layout::Engine;

/// Places nodes row by row in `ceil(sqrt(N))` columns, `spacing` apart.
#[derive(Debug, Clone, Copy)]
pub struct GridEngine {
    spacing: f64,
}

impl GridEngine {
    pub fn new(spacing: f64) -> Self {
        Self { spacing }
    }

    fn columns(count: usize) -> usize {
        ((count as f64).sqrt().ceil() as usize).max(1)
    }
}

impl Engine for GridEngine {
    fn position(&self, index: usize, count: usize) -> Point {
        let columns = Self::columns(count);
        let column = index % columns;
        let row = index / columns;

        Point::new(column as f64 * self.spacing, row as f64 * self.spacing)
    }
}
