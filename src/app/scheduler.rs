use eframe::egui::Context;

use crate::plexus::{FrameId, FrameScheduler};

/// Frame scheduling on top of egui repaints. A requested frame is due from
/// the moment it is requested, so a frame requested while mounting runs in
/// the same pass.
pub(super) struct RepaintScheduler {
    ctx: Context,
    next_id: u64,
    pending: Option<FrameId>,
}

impl RepaintScheduler {
    pub(super) fn new(ctx: Context) -> Self {
        Self {
            ctx,
            next_id: 0,
            pending: None,
        }
    }

    pub(super) fn take_due(&mut self) -> Option<FrameId> {
        self.pending.take()
    }
}

impl FrameScheduler for RepaintScheduler {
    fn request_frame(&mut self) -> FrameId {
        self.next_id += 1;
        let frame = FrameId::new(self.next_id);
        self.pending = Some(frame);
        self.ctx.request_repaint();
        frame
    }

    fn cancel_frame(&mut self, frame: FrameId) {
        if self.pending == Some(frame) {
            self.pending = None;
        }
    }
}
