use tracing::{debug, info, trace};

use crate::theme::Palette;

use super::grid::{Grid, Viewport};
use super::render::{Canvas, render_grid};
use super::wave::{WaveClock, WaveParams, apply_wave};

/// Handle for one scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(u64);

impl FrameId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Host-side frame scheduling primitive.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameId;
    fn cancel_frame(&mut self, frame: FrameId);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticeSettings {
    pub rows: usize,
    pub spacing: f32,
    pub wave: WaveParams,
}

impl Default for LatticeSettings {
    fn default() -> Self {
        Self {
            rows: 15,
            spacing: 40.0,
            wave: WaveParams::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Running,
    TornDown,
}

enum State {
    Uninitialized,
    Running(Box<Animation>),
    TornDown,
}

struct Animation {
    grid: Grid,
    clock: WaveClock,
    pending_frame: Option<FrameId>,
}

/// Owns the point lattice and drives it frame by frame.
pub struct Controller {
    settings: LatticeSettings,
    state: State,
}

impl Controller {
    pub fn new(settings: LatticeSettings) -> Self {
        Self {
            settings,
            state: State::Uninitialized,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Uninitialized => Phase::Uninitialized,
            State::Running(_) => Phase::Running,
            State::TornDown => Phase::TornDown,
        }
    }

    pub fn grid(&self) -> Option<&Grid> {
        match &self.state {
            State::Running(animation) => Some(&animation.grid),
            _ => None,
        }
    }

    pub fn time(&self) -> Option<f64> {
        match &self.state {
            State::Running(animation) => Some(animation.clock.time()),
            _ => None,
        }
    }

    /// Starts the animation. Without a usable surface nothing happens and the
    /// controller stays uninitialized.
    pub fn mount(&mut self, surface: Option<Viewport>, scheduler: &mut impl FrameScheduler) -> Phase {
        if !matches!(self.state, State::Uninitialized) {
            return self.phase();
        }

        let Some(viewport) = surface else {
            debug!("no drawing surface, background stays idle");
            return self.phase();
        };

        let grid = self.build_grid(viewport);
        let pending_frame = Some(scheduler.request_frame());
        info!(
            width = viewport.width(),
            height = viewport.height(),
            "background animation mounted"
        );

        self.state = State::Running(Box::new(Animation {
            grid,
            clock: WaveClock::new(self.settings.wave.speed),
            pending_frame,
        }));
        self.phase()
    }

    /// Rebuilds the lattice for a new viewport size. Returns whether a rebuild
    /// happened.
    pub fn resize(&mut self, viewport: Option<Viewport>) -> bool {
        let Some(viewport) = viewport else {
            return false;
        };

        let rebuilt = match &self.state {
            State::Running(animation) if animation.grid.viewport() != viewport => {
                self.build_grid(viewport)
            }
            _ => return false,
        };

        if let State::Running(animation) = &mut self.state {
            animation.grid = rebuilt;
        }
        true
    }

    /// Runs one scheduled frame: wave update over every point, then the draw,
    /// then schedules the next frame. Frames that are not the pending one are
    /// ignored.
    pub fn on_frame(
        &mut self,
        frame: FrameId,
        palette: &Palette,
        canvas: &mut impl Canvas,
        scheduler: &mut impl FrameScheduler,
    ) -> bool {
        let State::Running(animation) = &mut self.state else {
            trace!(?frame, "frame delivered while not running");
            return false;
        };

        if animation.pending_frame != Some(frame) {
            trace!(?frame, "stale frame skipped");
            return false;
        }

        let time = animation.clock.tick();
        apply_wave(&mut animation.grid, time, self.settings.wave);
        render_grid(&animation.grid, palette, canvas);
        animation.pending_frame = Some(scheduler.request_frame());
        trace!(?frame, time, "frame rendered");
        true
    }

    /// Draws the current lattice without advancing it, for hosts that repaint
    /// between scheduled frames.
    pub fn redraw(&self, palette: &Palette, canvas: &mut impl Canvas) -> bool {
        match &self.state {
            State::Running(animation) => {
                render_grid(&animation.grid, palette, canvas);
                true
            }
            _ => false,
        }
    }

    pub fn teardown(&mut self, scheduler: &mut impl FrameScheduler) {
        let previous = std::mem::replace(&mut self.state, State::TornDown);
        if let State::Running(animation) = previous {
            if let Some(frame) = animation.pending_frame {
                scheduler.cancel_frame(frame);
            }
            info!(points = animation.grid.len(), "background animation torn down");
        }
    }

    fn build_grid(&self, viewport: Viewport) -> Grid {
        let grid = Grid::build(viewport, self.settings.rows, self.settings.spacing);
        debug!(
            width = viewport.width(),
            height = viewport.height(),
            rows = grid.rows(),
            columns = grid.columns(),
            points = grid.len(),
            "lattice rebuilt"
        );
        grid
    }
}
