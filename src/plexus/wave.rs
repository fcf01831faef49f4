use super::grid::Grid;

/// Shape of the traveling wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    /// Phase step between neighbouring columns.
    pub wave_length: f32,
    /// Peak vertical excursion in pixels.
    pub wave_height: f32,
    /// Phase advance per delivered frame.
    pub speed: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wave_length: 0.01,
            wave_height: 60.0,
            speed: 0.008,
        }
    }
}

/// Phase clock. Advances a fixed amount per frame, not per second.
#[derive(Clone, Copy, Debug)]
pub struct WaveClock {
    time: f64,
    speed: f64,
}

impl WaveClock {
    pub fn new(speed: f32) -> Self {
        Self {
            time: 0.0,
            speed: f64::from(speed),
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn tick(&mut self) -> f64 {
        self.time += self.speed;
        self.time
    }
}

/// Per-row phase skew. The divisor is the unpadded column span `W / S`, not
/// the column count, so rows drift slightly against the lattice.
pub fn row_effect(index: usize, width: f32, spacing: f32) -> f64 {
    let span = f64::from(width) / f64::from(spacing);
    (index as f64 / span).floor() * 0.5
}

pub fn apply_wave(grid: &mut Grid, time: f64, params: WaveParams) {
    let width = grid.viewport().width();
    let spacing = grid.spacing();
    let wave_length = f64::from(params.wave_length);

    for (index, point) in grid.points_mut().iter_mut().enumerate() {
        let phase = f64::from(point.offset()) * wave_length + time + row_effect(index, width, spacing);
        point.y = point.original_y() + (phase.sin() as f32) * params.wave_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plexus::grid::Viewport;
    use proptest::prelude::*;

    fn desktop_grid() -> Grid {
        let viewport = Viewport::new(800.0, 600.0).expect("usable viewport");
        Grid::build(viewport, 15, 40.0)
    }

    #[test]
    fn time_zero_matches_closed_form() {
        let mut grid = desktop_grid();
        let params = WaveParams::default();

        apply_wave(&mut grid, 0.3, params);
        apply_wave(&mut grid, 0.0, params);

        for (index, point) in grid.points().iter().enumerate() {
            let phase =
                f64::from(point.offset()) * f64::from(params.wave_length) + row_effect(index, 800.0, 40.0);
            let expected = point.original_y() + (phase.sin() as f32) * params.wave_height;
            assert_eq!(point.y(), expected, "point {index}");
        }
    }

    #[test]
    fn row_effect_uses_unpadded_span() {
        // 800 / 40 = 20, while rows hold 22 points.
        assert_eq!(row_effect(0, 800.0, 40.0), 0.0);
        assert_eq!(row_effect(19, 800.0, 40.0), 0.0);
        assert_eq!(row_effect(20, 800.0, 40.0), 0.5);
        assert_eq!(row_effect(21, 800.0, 40.0), 0.5);
        assert_eq!(row_effect(40, 800.0, 40.0), 1.0);
    }

    #[test]
    fn clock_advances_by_speed_per_tick() {
        let mut clock = WaveClock::new(0.5);
        assert_eq!(clock.time(), 0.0);
        assert_eq!(clock.tick(), 0.5);
        assert_eq!(clock.tick(), 1.0);
    }

    #[test]
    fn x_never_moves() {
        let mut grid = desktop_grid();
        let before = grid.points().iter().map(|point| point.x()).collect::<Vec<_>>();

        apply_wave(&mut grid, 12.5, WaveParams::default());

        let after = grid.points().iter().map(|point| point.x()).collect::<Vec<_>>();
        assert_eq!(before, after);
    }

    proptest! {
        #[test]
        fn original_y_survives_any_number_of_steps(steps in 1usize..200, speed in 0.001f32..0.5) {
            let mut grid = desktop_grid();
            let resting = grid.points().iter().map(|point| point.original_y()).collect::<Vec<_>>();
            let params = WaveParams { speed, ..WaveParams::default() };
            let mut clock = WaveClock::new(speed);

            for _ in 0..steps {
                apply_wave(&mut grid, clock.tick(), params);
            }

            for (point, original) in grid.points().iter().zip(&resting) {
                prop_assert_eq!(point.original_y(), *original);
                prop_assert!((point.y() - original).abs() <= params.wave_height + 1e-3);
            }
        }
    }
}
