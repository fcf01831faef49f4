use eframe::egui::{Color32, Pos2};

use crate::theme::Palette;

use super::grid::Grid;

pub const EDGE_MAX_OPACITY: f32 = 0.3;
pub const EDGE_FADE_PER_PIXEL: f32 = 0.005;
pub const VERTICAL_EDGE_OPACITY: f32 = 0.1;
pub const MARKER_MAX_RADIUS: f32 = 3.0;
pub const MARKER_MIN_RADIUS: f32 = 0.5;
pub const MARKER_MAX_ALPHA: f32 = 0.6;
pub const MARKER_MIN_ALPHA: f32 = 0.1;

/// 2D drawing surface in surface-local pixel coordinates.
pub trait Canvas {
    fn clear(&mut self);
    fn line(&mut self, from: Pos2, to: Pos2, color: Color32);
    fn dot(&mut self, center: Pos2, radius: f32, color: Color32);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub radius: f32,
    pub alpha: f32,
}

/// Opacity of a horizontal edge whose endpoints differ by `dy` pixels.
pub fn edge_opacity(dy: f32) -> f32 {
    (EDGE_MAX_OPACITY - dy.abs() * EDGE_FADE_PER_PIXEL).max(0.0)
}

/// Markers shrink and dim away from the vertical center of the viewport.
pub fn marker_style(distance_from_center: f32) -> MarkerStyle {
    let distance = distance_from_center.abs();
    MarkerStyle {
        radius: (MARKER_MAX_RADIUS - distance * 0.005).max(MARKER_MIN_RADIUS),
        alpha: (MARKER_MAX_ALPHA - distance * 0.001).max(MARKER_MIN_ALPHA),
    }
}

/// Draws edges and markers in index order. No depth sorting.
pub fn render_grid(grid: &Grid, palette: &Palette, canvas: &mut impl Canvas) {
    canvas.clear();

    let points = grid.points();
    let columns = grid.columns();
    let center_y = grid.viewport().center_y();
    if columns == 0 {
        return;
    }

    for (index, point) in points.iter().enumerate() {
        let right = index + 1;
        if right % columns != 0
            && let Some(next) = points.get(right)
        {
            let opacity = edge_opacity(point.y() - next.y());
            canvas.line(point.pos(), next.pos(), palette.line_color(opacity));
        }

        if let Some(below) = points.get(index + columns) {
            canvas.line(
                point.pos(),
                below.pos(),
                palette.line_color(VERTICAL_EDGE_OPACITY),
            );
        }

        let style = marker_style(center_y - point.y());
        canvas.dot(point.pos(), style.radius, palette.particle_color(style.alpha));
    }
}
