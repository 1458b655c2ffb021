//! Base palettes for dark and light color modes
//!
//! Sentiment themes are translucent tokens; they are composited over these
//! opaque backgrounds before reaching the terminal.

use versevibe_core::theme::Rgba;
use versevibe_core::types::ColorMode;

/// Base color palette
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    // === Backgrounds ===
    /// Page background
    pub background: Rgba,
    /// Editor and panel surface
    pub surface: Rgba,

    // === Text Colors ===
    pub text_primary: Rgba,
    pub text_secondary: Rgba,
    pub text_disabled: Rgba,

    // === Status Colors ===
    pub success: Rgba,
    pub error: Rgba,
    pub info: Rgba,

    /// Border when no sentiment tint applies
    pub border: Rgba,
}

impl Palette {
    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Dark => Self::dark(),
            ColorMode::Light => Self::light(),
        }
    }

    /// Dark palette
    pub fn dark() -> Self {
        Self {
            background: Rgba::rgb(0x0a0a0f),
            surface: Rgba::rgb(0x12121a),

            text_primary: Rgba::rgb(0xe2e8f0),
            text_secondary: Rgba::rgb(0x94a3b8),
            text_disabled: Rgba::rgb(0x475569),

            success: Rgba::rgb(0x34d399),
            error: Rgba::rgb(0xf87171),
            info: Rgba::rgb(0x60a5fa),

            border: Rgba::rgb(0x2a2a3a),
        }
    }

    /// Light palette
    pub fn light() -> Self {
        Self {
            background: Rgba::rgb(0xf5f3ff),
            surface: Rgba::rgb(0xffffff),

            text_primary: Rgba::rgb(0x1e1b4b),
            text_secondary: Rgba::rgb(0x4c4a6b),
            text_disabled: Rgba::rgb(0x9ca3af),

            success: Rgba::rgb(0x059669),
            error: Rgba::rgb(0xdc2626),
            info: Rgba::rgb(0x2563eb),

            border: Rgba::rgb(0xd4d0f0),
        }
    }
}
