use eframe::egui::{Pos2, Vec2};

/// Upper bound on lattice columns, whatever the width-to-spacing ratio.
pub const MAX_COLUMNS: usize = 16_384;

/// Pixel size of the drawing surface. Only positive, finite sizes are usable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let usable = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        usable.then_some(Self { width, height })
    }

    pub fn from_size(size: Vec2) -> Option<Self> {
        Self::new(size.x, size.y)
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    pub fn center_y(self) -> f32 {
        self.height / 2.0
    }
}

/// A lattice node. `x` and `original_y` are fixed at construction; only `y`
/// moves, and only through the wave step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub(super) x: f32,
    pub(super) y: f32,
    original_y: f32,
    offset: u32,
}

impl Point {
    fn new(x: f32, y: f32, offset: u32) -> Self {
        Self {
            x,
            y,
            original_y: y,
            offset,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn original_y(&self) -> f32 {
        self.original_y
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn pos(&self) -> Pos2 {
        Pos2::new(self.x(), self.y())
    }
}

/// Row-major point lattice covering one viewport.
#[derive(Clone, Debug)]
pub struct Grid {
    points: Vec<Point>,
    viewport: Viewport,
    rows: usize,
    columns: usize,
    spacing: f32,
}

impl Grid {
    /// Two overscan columns are added past the right edge, and the rows are
    /// centered vertically on the viewport.
    pub fn build(viewport: Viewport, rows: usize, spacing: f32) -> Self {
        let span = (viewport.width() / spacing).ceil();
        let columns = if span.is_finite() {
            (span as usize).min(MAX_COLUMNS).saturating_add(2)
        } else {
            MAX_COLUMNS.saturating_add(2)
        };
        let start_y = viewport.center_y() - (rows as f32 * spacing) / 2.0;

        let mut points = Vec::with_capacity(rows.checked_mul(columns).unwrap_or(0));
        for row in 0..rows {
            let y = start_y + row as f32 * spacing;
            for column in 0..columns {
                points.push(Point::new(column as f32 * spacing, y, column as u32));
            }
        }

        Self {
            points,
            viewport,
            rows,
            columns,
            spacing,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub(super) fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn viewport(width: f32, height: f32) -> Viewport {
        Viewport::new(width, height).expect("usable viewport")
    }

    #[test]
    fn desktop_viewport_builds_330_points() {
        let grid = Grid::build(viewport(800.0, 600.0), 15, 40.0);

        assert_eq!(grid.columns(), 22);
        assert_eq!(grid.len(), 330);

        let first = grid.points()[0];
        assert_eq!(first.x(), 0.0);
        assert_eq!(first.y(), 0.0);
        assert_eq!(first.original_y(), 0.0);
        assert_eq!(first.offset(), 0);
    }

    #[test]
    fn points_are_row_major_with_column_offsets() {
        let grid = Grid::build(viewport(800.0, 600.0), 15, 40.0);
        let columns = grid.columns();

        let end_of_first_row = grid.points()[columns - 1];
        assert_eq!(end_of_first_row.x(), 21.0 * 40.0);
        assert_eq!(end_of_first_row.offset(), 21);

        let start_of_second_row = grid.points()[columns];
        assert_eq!(start_of_second_row.x(), 0.0);
        assert_eq!(start_of_second_row.y(), 40.0);
        assert_eq!(start_of_second_row.offset(), 0);
    }

    #[test]
    fn short_viewport_starts_above_the_top_edge() {
        let grid = Grid::build(viewport(400.0, 300.0), 15, 40.0);
        assert_eq!(grid.points()[0].y(), 150.0 - 300.0);
    }

    #[test]
    fn unusable_sizes_are_rejected() {
        assert!(Viewport::new(0.0, 600.0).is_none());
        assert!(Viewport::new(800.0, -1.0).is_none());
        assert!(Viewport::new(f32::NAN, 600.0).is_none());
        assert!(Viewport::new(f32::INFINITY, 600.0).is_none());
    }

    #[test]
    fn tiny_spacing_caps_the_column_count() {
        let grid = Grid::build(viewport(800.0, 600.0), 1, 1e-30);

        assert_eq!(grid.columns(), MAX_COLUMNS + 2);
        assert_eq!(grid.len(), MAX_COLUMNS + 2);
    }

    proptest! {
        #[test]
        fn point_count_is_rows_times_columns(
            width in 1.0f32..4000.0,
            height in 1.0f32..3000.0,
            rows in 1usize..40,
            spacing in 5.0f32..120.0,
        ) {
            let grid = Grid::build(viewport(width, height), rows, spacing);
            let expected_columns = (width / spacing).ceil() as usize + 2;

            prop_assert_eq!(grid.columns(), expected_columns);
            prop_assert_eq!(grid.len(), rows * expected_columns);
        }

        #[test]
        fn build_is_deterministic(
            width in 1.0f32..4000.0,
            height in 1.0f32..3000.0,
            rows in 1usize..40,
            spacing in 5.0f32..120.0,
        ) {
            let a = Grid::build(viewport(width, height), rows, spacing);
            let b = Grid::build(viewport(width, height), rows, spacing);
            prop_assert_eq!(a.points(), b.points());
        }
    }
}
