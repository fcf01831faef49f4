use eframe::egui::{Color32, Mesh, Painter, Pos2, Rect, Shape, Stroke};

use crate::plexus::Canvas;

/// Canvas over an egui painter. Coordinates are relative to `rect`, and every
/// color is scaled by the layer opacity.
pub(super) struct PainterCanvas<'a> {
    painter: &'a Painter,
    rect: Rect,
    background: Color32,
    opacity: f32,
}

impl<'a> PainterCanvas<'a> {
    pub(super) fn new(painter: &'a Painter, rect: Rect, background: Color32, opacity: f32) -> Self {
        Self {
            painter,
            rect,
            background,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    fn to_screen(&self, local: Pos2) -> Pos2 {
        self.rect.min + local.to_vec2()
    }
}

impl Canvas for PainterCanvas<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn line(&mut self, from: Pos2, to: Pos2, color: Color32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(1.0, color.gamma_multiply(self.opacity)),
        );
    }

    fn dot(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color.gamma_multiply(self.opacity));
    }
}

#[derive(Clone, Copy)]
enum GradientAxis {
    Vertical,
    Horizontal,
}

/// Two edge-darkening layers over the canvas: top/bottom at 0.8, then
/// left/right at 0.6.
pub(super) fn draw_vignettes(painter: &Painter, rect: Rect, page: Color32) {
    painter.add(Shape::mesh(edge_fade_mesh(
        rect,
        GradientAxis::Vertical,
        page.gamma_multiply(0.8),
    )));
    painter.add(Shape::mesh(edge_fade_mesh(
        rect,
        GradientAxis::Horizontal,
        page.gamma_multiply(0.6),
    )));
}

/// Solid `edge` at both ends of the axis, transparent through the middle.
fn edge_fade_mesh(rect: Rect, axis: GradientAxis, edge: Color32) -> Mesh {
    let stops = [edge, Color32::TRANSPARENT, edge];
    let mut mesh = Mesh::default();

    for (step, color) in stops.into_iter().enumerate() {
        let t = step as f32 / 2.0;
        let (a, b) = match axis {
            GradientAxis::Vertical => {
                let y = rect.top() + rect.height() * t;
                (Pos2::new(rect.left(), y), Pos2::new(rect.right(), y))
            }
            GradientAxis::Horizontal => {
                let x = rect.left() + rect.width() * t;
                (Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom()))
            }
        };
        mesh.colored_vertex(a, color);
        mesh.colored_vertex(b, color);
    }

    for band in 0..2u32 {
        let base = band * 2;
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 1, base + 3, base + 2);
    }

    mesh
}
