use clap::ValueEnum;
use eframe::egui::{Color32, Visuals};
use serde::{Deserialize, Serialize};

/// Site-wide light/dark flag. The app shell owns it; the renderer only reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::Dark } else { Self::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn visuals(self) -> Visuals {
        match self {
            Self::Dark => Visuals::dark(),
            Self::Light => Visuals::light(),
        }
    }

    /// Page color the vignettes fade out from: black, or zinc-50.
    pub fn page_background(self) -> Color32 {
        match self {
            Self::Dark => Color32::BLACK,
            Self::Light => Color32::from_rgb(250, 250, 250),
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "☀ Light",
            Self::Light => "🌙 Dark",
        }
    }
}

/// Base RGB colors for markers and edges. Alpha is chosen per shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub particle: [u8; 3],
    pub line: [u8; 3],
}

impl Palette {
    /// cyan-400
    pub const DARK: Self = Self {
        particle: [34, 211, 238],
        line: [34, 211, 238],
    };

    /// indigo-500
    pub const LIGHT: Self = Self {
        particle: [99, 102, 241],
        line: [99, 102, 241],
    };

    pub fn particle_color(&self, alpha: f32) -> Color32 {
        rgba(self.particle, alpha)
    }

    pub fn line_color(&self, alpha: f32) -> Color32 {
        rgba(self.line, alpha)
    }
}

pub fn rgba([r, g, b]: [u8; 3], alpha: f32) -> Color32 {
    let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(r, g, b, alpha)
}
