//! Terminal styling
//!
//! Combines the active sentiment theme with the base palette of the current
//! color mode and turns the result into ratatui styles.

mod colors;

pub use colors::*;

use ratatui::style::{Color, Modifier, Style};
use versevibe_core::theme::{Rgba, Theme};
use versevibe_core::toast::Severity;
use versevibe_core::types::{EditorSettings, FontFamily};

/// Resolved styles for one frame
#[derive(Debug, Clone)]
pub struct UiTheme {
    pub palette: Palette,
    pub sentiment: &'static Theme,
}

impl UiTheme {
    pub fn new(sentiment: &'static Theme, settings: &EditorSettings) -> Self {
        Self {
            palette: Palette::for_mode(settings.color_mode),
            sentiment,
        }
    }

    /// Flatten a color onto the page background
    pub fn color(&self, rgba: Rgba) -> Color {
        to_color(rgba.over(self.palette.background))
    }

    /// Background with the sentiment overlay tint applied
    pub fn base(&self) -> Style {
        Style::default()
            .bg(self.color(self.sentiment.overlay))
            .fg(to_color(self.palette.text_primary))
    }

    pub fn text(&self) -> Style {
        Style::default().fg(to_color(self.palette.text_primary))
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(to_color(self.palette.text_secondary))
    }

    pub fn accent(&self) -> Style {
        Style::default()
            .fg(to_color(self.sentiment.accent))
            .add_modifier(Modifier::BOLD)
    }

    /// Border of a pane; focused panes use the accent glow
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.color(self.sentiment.accent_glow.with_alpha(1.0)))
        } else if self.sentiment.border.a <= 0.0 {
            Style::default().fg(to_color(self.palette.border))
        } else {
            Style::default().fg(self.color(self.sentiment.border))
        }
    }

    pub fn badge(&self) -> Style {
        let badge = &self.sentiment.badge;
        Style::default()
            .bg(self.color(badge.background))
            .fg(to_color(badge.text))
            .add_modifier(Modifier::BOLD)
    }

    /// Editor text style; serif is rendered in italics
    pub fn editor(&self, settings: &EditorSettings) -> Style {
        let style = self.text();
        match settings.font_family {
            FontFamily::Serif => style.add_modifier(Modifier::ITALIC),
            FontFamily::Sans => style,
        }
    }

    pub fn toast(&self, severity: Severity) -> Style {
        let fg = match severity {
            Severity::Info => self.palette.info,
            Severity::Success => self.palette.success,
            Severity::Error => self.palette.error,
        };
        Style::default()
            .fg(to_color(fg))
            .bg(to_color(self.palette.surface))
    }
}

/// Opaque core color to a terminal color; alpha is ignored
pub fn to_color(rgba: Rgba) -> Color {
    Color::Rgb(rgba.r, rgba.g, rgba.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use versevibe_core::theme::{theme_for, DEFAULT_THEME};
    use versevibe_core::types::ColorMode;

    #[test]
    fn test_accent_follows_sentiment() {
        let settings = EditorSettings::default();
        let ui = UiTheme::new(theme_for("Joyful"), &settings);
        assert_eq!(ui.accent().fg, Some(Color::Rgb(0xfb, 0xbf, 0x24)));
    }

    #[test]
    fn test_overlay_is_composited_on_palette() {
        let settings = EditorSettings::default();
        let ui = UiTheme::new(&DEFAULT_THEME, &settings);
        assert_eq!(ui.base().bg, Some(to_color(Palette::dark().background)));

        let mut light = EditorSettings::default();
        light.color_mode = ColorMode::Light;
        let ui = UiTheme::new(&DEFAULT_THEME, &light);
        assert_eq!(ui.base().bg, Some(to_color(Palette::light().background)));
    }

    #[test]
    fn test_serif_editor_is_italic() {
        let mut settings = EditorSettings::default();
        let ui = UiTheme::new(&DEFAULT_THEME, &settings);
        assert!(ui.editor(&settings).add_modifier.contains(Modifier::ITALIC));

        settings.font_family = FontFamily::Sans;
        assert!(!ui.editor(&settings).add_modifier.contains(Modifier::ITALIC));
    }
}
