//! Editor settings
//!
//! Settings live for the process lifetime only and never influence analysis.

use serde::{Deserialize, Serialize};

/// Smallest editor font size, in rem
pub const MIN_FONT_SIZE: f32 = 0.9;
/// Largest editor font size, in rem
pub const MAX_FONT_SIZE: f32 = 1.6;
/// Slider granularity, in rem
pub const FONT_SIZE_STEP: f32 = 0.05;
/// Starting font size, in rem
pub const DEFAULT_FONT_SIZE: f32 = 1.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Serif,
    Sans,
}

impl FontFamily {
    pub fn toggled(self) -> Self {
        match self {
            Self::Serif => Self::Sans,
            Self::Sans => Self::Serif,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Serif => "Serif",
            Self::Sans => "Sans",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Dark,
    Light,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_light(&self) -> bool {
        matches!(self, Self::Light)
    }
}

/// User-adjustable editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSettings {
    font_size: f32,
    pub font_family: FontFamily,
    pub word_wrap: bool,
    /// Stored only; analysis is never triggered by typing
    pub auto_analyze: bool,
    pub color_mode: ColorMode,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_family: FontFamily::default(),
            word_wrap: true,
            auto_analyze: false,
            color_mode: ColorMode::default(),
        }
    }
}

impl EditorSettings {
    /// Font size in rem, always inside the allowed range and on a step
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Set the font size, clamped to range and snapped to the slider step
    pub fn set_font_size(&mut self, rem: f32) {
        self.font_size = snap_font_size(rem);
    }

    /// Move the font size by a number of slider steps
    pub fn step_font_size(&mut self, steps: i32) {
        self.set_font_size(self.font_size + steps as f32 * FONT_SIZE_STEP);
    }

    /// Font size label as the settings panel shows it
    pub fn font_size_label(&self) -> String {
        format!("{:.2}rem", self.font_size)
    }
}

fn snap_font_size(rem: f32) -> f32 {
    if !rem.is_finite() {
        return DEFAULT_FONT_SIZE;
    }
    let clamped = rem.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    let steps = ((clamped - MIN_FONT_SIZE) / FONT_SIZE_STEP).round();
    // Round to two decimals so repeated stepping does not drift.
    let snapped = MIN_FONT_SIZE + steps * FONT_SIZE_STEP;
    ((snapped * 100.0).round() / 100.0).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}
