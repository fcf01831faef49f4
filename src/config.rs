use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::plexus::{LatticeSettings, WaveParams};
use crate::theme::{Palette, Theme};

const MIN_SPACING: f32 = 1.0;
const MAX_ROWS: usize = 1024;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlexusConfig {
    pub spacing: f32,
    pub rows: usize,
    pub wave_height: f32,
    pub wave_length: f32,
    pub speed: f32,
    pub dark: Palette,
    pub light: Palette,
    pub canvas_opacity_dark: f32,
    pub canvas_opacity_light: f32,
}

impl Default for PlexusConfig {
    fn default() -> Self {
        let wave = WaveParams::default();
        Self {
            spacing: 40.0,
            rows: 15,
            wave_height: wave.wave_height,
            wave_length: wave.wave_length,
            speed: wave.speed,
            dark: Palette::DARK,
            light: Palette::LIGHT,
            canvas_opacity_dark: 0.4,
            canvas_opacity_light: 0.6,
        }
    }
}

impl PlexusConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw).context("config is not valid JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.spacing.is_finite() && self.spacing >= MIN_SPACING,
            "spacing must be at least {MIN_SPACING} px, got {}",
            self.spacing
        );
        ensure!(
            (1..=MAX_ROWS).contains(&self.rows),
            "rows must be within 1..={MAX_ROWS}, got {}",
            self.rows
        );
        for (name, value) in [
            ("wave_height", self.wave_height),
            ("wave_length", self.wave_length),
            ("speed", self.speed),
        ] {
            ensure!(value.is_finite(), "{name} must be finite, got {value}");
        }
        for (name, value) in [
            ("canvas_opacity_dark", self.canvas_opacity_dark),
            ("canvas_opacity_light", self.canvas_opacity_light),
        ] {
            ensure!(
                (0.0..=1.0).contains(&value),
                "{name} must be within 0..=1, got {value}"
            );
        }
        Ok(())
    }

    pub fn lattice(&self) -> LatticeSettings {
        LatticeSettings {
            rows: self.rows,
            spacing: self.spacing,
            wave: WaveParams {
                wave_length: self.wave_length,
                wave_height: self.wave_height,
                speed: self.speed,
            },
        }
    }

    pub fn palette(&self, theme: Theme) -> &Palette {
        match theme {
            Theme::Dark => &self.dark,
            Theme::Light => &self.light,
        }
    }

    pub fn canvas_opacity(&self, theme: Theme) -> f32 {
        match theme {
            Theme::Dark => self.canvas_opacity_dark,
            Theme::Light => self.canvas_opacity_light,
        }
    }
}
