use std::collections::VecDeque;

const FPS_SAMPLE_WINDOW: usize = 180;

#[derive(Default)]
pub(super) struct FpsCounter {
    current: f32,
    samples: VecDeque<f32>,
}

impl FpsCounter {
    pub(super) fn record(&mut self, dt: f32) {
        if dt <= f32::EPSILON {
            return;
        }

        self.current = (1.0 / dt).clamp(0.0, 1000.0);
        self.samples.push_back(self.current);
        while self.samples.len() > FPS_SAMPLE_WINDOW {
            self.samples.pop_front();
        }
    }

    pub(super) fn display_text(&self) -> Option<String> {
        if self.samples.is_empty() {
            return None;
        }

        let avg = self.samples.iter().sum::<f32>() / self.samples.len() as f32;
        let mut parts = vec![format!("FPS {:.0}", self.current), format!("avg {avg:.1}")];
        if self.current > f32::EPSILON {
            parts.push(format!("{:.1} ms", 1000.0 / self.current));
        }
        Some(parts.join(" | "))
    }
}
