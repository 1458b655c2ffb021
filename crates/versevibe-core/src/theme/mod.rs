//! Sentiment theme registry
//!
//! Each recognized sentiment owns one immutable visual identity: accent, glow,
//! border, three orb colors, an overlay tint, backdrop glows and a badge style.
//! Anything else resolves to the single default theme.

mod colors;

pub use colors::*;

use crate::types::Sentiment;

/// One radial glow of the backdrop gradient. Positions and reach are percents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGlow {
    pub x: u8,
    pub y: u8,
    pub color: Rgba,
    pub reach: u8,
}

impl RadialGlow {
    const fn new(x: u8, y: u8, color: Rgba, reach: u8) -> Self {
        Self { x, y, color, reach }
    }
}

/// Sentiment badge colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeStyle {
    pub background: Rgba,
    pub border: Rgba,
    pub text: Rgba,
}

/// Visual environment derived from a sentiment
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Registry name, `"Default"` for the fallback theme
    pub name: &'static str,
    pub accent: Rgba,
    pub accent_glow: Rgba,
    pub border: Rgba,
    pub orbs: [Rgba; 3],
    pub overlay: Rgba,
    /// Backdrop gradient; empty means no backdrop
    pub backdrop: &'static [RadialGlow],
    pub badge: BadgeStyle,
}

impl Theme {
    pub fn is_default(&self) -> bool {
        std::ptr::eq(self, &DEFAULT_THEME)
    }
}

/// Theme for a sentiment label; unknown or empty labels get [`DEFAULT_THEME`].
pub fn theme_for(label: &str) -> &'static Theme {
    match label.parse::<Sentiment>() {
        Ok(sentiment) => theme_for_sentiment(sentiment),
        Err(_) => &DEFAULT_THEME,
    }
}

/// Theme registered for a recognized sentiment
pub fn theme_for_sentiment(sentiment: Sentiment) -> &'static Theme {
    match sentiment {
        Sentiment::Melancholic => &MELANCHOLIC,
        Sentiment::Joyful => &JOYFUL,
        Sentiment::Dark => &DARK,
        Sentiment::Energetic => &ENERGETIC,
        Sentiment::Peaceful => &PEACEFUL,
        Sentiment::Thoughtful => &THOUGHTFUL,
        Sentiment::Romantic => &ROMANTIC,
        Sentiment::Mysterious => &MYSTERIOUS,
    }
}

pub static DEFAULT_THEME: Theme = Theme {
    name: "Default",
    accent: Rgba::rgb(0xa78bfa),
    accent_glow: Rgba::new(167, 139, 250, 0.4),
    border: Rgba::new(167, 139, 250, 0.3),
    orbs: [
        Rgba::new(167, 139, 250, 0.35),
        Rgba::new(236, 72, 153, 0.3),
        Rgba::new(59, 130, 246, 0.25),
    ],
    overlay: TRANSPARENT,
    backdrop: &[],
    badge: BadgeStyle {
        background: Rgba::new(167, 139, 250, 0.15),
        border: Rgba::new(167, 139, 250, 0.35),
        text: Rgba::rgb(0xc4b5fd),
    },
};

static MELANCHOLIC: Theme = Theme {
    name: "Melancholic",
    accent: Rgba::rgb(0x60a5fa),
    accent_glow: Rgba::new(96, 165, 250, 0.45),
    border: Rgba::new(96, 165, 250, 0.3),
    orbs: [
        Rgba::new(96, 165, 250, 0.5),
        Rgba::new(147, 197, 253, 0.4),
        Rgba::new(59, 130, 246, 0.3),
    ],
    overlay: Rgba::new(30, 58, 138, 0.12),
    backdrop: &[
        RadialGlow::new(20, 20, Rgba::new(30, 58, 138, 0.3), 60),
        RadialGlow::new(80, 80, Rgba::new(59, 130, 246, 0.2), 60),
    ],
    badge: BadgeStyle {
        background: Rgba::new(96, 165, 250, 0.15),
        border: Rgba::new(96, 165, 250, 0.4),
        text: Rgba::rgb(0x93c5fd),
    },
};

static JOYFUL: Theme = Theme {
    name: "Joyful",
    accent: Rgba::rgb(0xfbbf24),
    accent_glow: Rgba::new(251, 191, 36, 0.5),
    border: Rgba::new(251, 191, 36, 0.3),
    orbs: [
        Rgba::new(251, 191, 36, 0.55),
        Rgba::new(252, 211, 77, 0.4),
        Rgba::new(245, 158, 11, 0.35),
    ],
    overlay: Rgba::new(120, 80, 0, 0.1),
    backdrop: &[
        RadialGlow::new(30, 10, Rgba::new(120, 80, 0, 0.25), 60),
        RadialGlow::new(70, 90, Rgba::new(245, 158, 11, 0.2), 55),
    ],
    badge: BadgeStyle {
        background: Rgba::new(251, 191, 36, 0.15),
        border: Rgba::new(251, 191, 36, 0.4),
        text: Rgba::rgb(0xfde68a),
    },
};

static DARK: Theme = Theme {
    name: "Dark",
    accent: Rgba::rgb(0x94a3b8),
    accent_glow: Rgba::new(148, 163, 184, 0.3),
    border: Rgba::new(148, 163, 184, 0.2),
    orbs: [
        Rgba::new(71, 85, 105, 0.5),
        Rgba::new(51, 65, 85, 0.4),
        Rgba::new(30, 41, 59, 0.5),
    ],
    overlay: Rgba::new(0, 0, 0, 0.2),
    backdrop: &[RadialGlow::new(50, 50, Rgba::new(15, 23, 42, 0.5), 70)],
    badge: BadgeStyle {
        background: Rgba::new(100, 116, 139, 0.15),
        border: Rgba::new(148, 163, 184, 0.3),
        text: Rgba::rgb(0xcbd5e1),
    },
};

static ENERGETIC: Theme = Theme {
    name: "Energetic",
    accent: Rgba::rgb(0xfb923c),
    accent_glow: Rgba::new(249, 115, 22, 0.5),
    border: Rgba::new(249, 115, 22, 0.3),
    orbs: [
        Rgba::new(249, 115, 22, 0.55),
        Rgba::new(251, 146, 60, 0.4),
        Rgba::new(234, 88, 12, 0.35),
    ],
    overlay: Rgba::new(120, 40, 0, 0.1),
    backdrop: &[
        RadialGlow::new(80, 20, Rgba::new(120, 40, 0, 0.3), 55),
        RadialGlow::new(20, 80, Rgba::new(234, 88, 12, 0.2), 55),
    ],
    badge: BadgeStyle {
        background: Rgba::new(249, 115, 22, 0.15),
        border: Rgba::new(249, 115, 22, 0.4),
        text: Rgba::rgb(0xfed7aa),
    },
};

static PEACEFUL: Theme = Theme {
    name: "Peaceful",
    accent: Rgba::rgb(0x34d399),
    accent_glow: Rgba::new(52, 211, 153, 0.45),
    border: Rgba::new(52, 211, 153, 0.3),
    orbs: [
        Rgba::new(52, 211, 153, 0.45),
        Rgba::new(110, 231, 183, 0.35),
        Rgba::new(16, 185, 129, 0.3),
    ],
    overlay: Rgba::new(0, 60, 40, 0.1),
    backdrop: &[
        RadialGlow::new(10, 80, Rgba::new(0, 60, 40, 0.3), 60),
        RadialGlow::new(90, 20, Rgba::new(16, 185, 129, 0.18), 55),
    ],
    badge: BadgeStyle {
        background: Rgba::new(52, 211, 153, 0.15),
        border: Rgba::new(52, 211, 153, 0.35),
        text: Rgba::rgb(0x6ee7b7),
    },
};

static THOUGHTFUL: Theme = Theme {
    name: "Thoughtful",
    accent: Rgba::rgb(0xa78bfa),
    accent_glow: Rgba::new(167, 139, 250, 0.45),
    border: Rgba::new(167, 139, 250, 0.3),
    orbs: [
        Rgba::new(167, 139, 250, 0.45),
        Rgba::new(196, 181, 253, 0.35),
        Rgba::new(139, 92, 246, 0.3),
    ],
    overlay: Rgba::new(60, 20, 120, 0.1),
    backdrop: &[
        RadialGlow::new(20, 70, Rgba::new(60, 20, 120, 0.25), 60),
        RadialGlow::new(80, 30, Rgba::new(139, 92, 246, 0.18), 55),
    ],
    badge: BadgeStyle {
        background: Rgba::new(167, 139, 250, 0.15),
        border: Rgba::new(167, 139, 250, 0.4),
        text: Rgba::rgb(0xc4b5fd),
    },
};

static ROMANTIC: Theme = Theme {
    name: "Romantic",
    accent: Rgba::rgb(0xf472b6),
    accent_glow: Rgba::new(244, 114, 182, 0.5),
    border: Rgba::new(244, 114, 182, 0.3),
    orbs: [
        Rgba::new(244, 114, 182, 0.5),
        Rgba::new(249, 168, 212, 0.4),
        Rgba::new(236, 72, 153, 0.3),
    ],
    overlay: Rgba::new(100, 10, 60, 0.12),
    backdrop: &[
        RadialGlow::new(70, 10, Rgba::new(100, 10, 60, 0.3), 55),
        RadialGlow::new(30, 90, Rgba::new(236, 72, 153, 0.2), 55),
    ],
    badge: BadgeStyle {
        background: Rgba::new(244, 114, 182, 0.15),
        border: Rgba::new(244, 114, 182, 0.4),
        text: Rgba::rgb(0xfbcfe8),
    },
};

static MYSTERIOUS: Theme = Theme {
    name: "Mysterious",
    accent: Rgba::rgb(0x8b5cf6),
    accent_glow: Rgba::new(139, 92, 246, 0.45),
    border: Rgba::new(139, 92, 246, 0.3),
    orbs: [
        Rgba::new(139, 92, 246, 0.5),
        Rgba::new(109, 40, 217, 0.35),
        Rgba::new(76, 29, 149, 0.3),
    ],
    overlay: Rgba::new(30, 0, 70, 0.15),
    backdrop: &[
        RadialGlow::new(50, 0, Rgba::new(30, 0, 70, 0.4), 60),
        RadialGlow::new(50, 100, Rgba::new(76, 29, 149, 0.25), 55),
    ],
    badge: BadgeStyle {
        background: Rgba::new(139, 92, 246, 0.15),
        border: Rgba::new(139, 92, 246, 0.4),
        text: Rgba::rgb(0xddd6fe),
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_sentiment_has_its_own_theme() {
        for sentiment in Sentiment::all() {
            let theme = theme_for(sentiment.as_str());
            assert_eq!(theme.name, sentiment.as_str());
            assert!(!theme.is_default());
            assert!(std::ptr::eq(theme, theme_for(sentiment.as_str())));
        }
    }

    #[test]
    fn test_accents_are_unique_across_sentiments() {
        let accents: HashSet<[u8; 3]> = Sentiment::all()
            .iter()
            .map(|s| theme_for_sentiment(*s).accent.channels())
            .collect();
        assert_eq!(accents.len(), Sentiment::all().len());
    }

    #[test]
    fn test_primary_orbs_and_badge_text_are_unique() {
        let orbs: HashSet<[u8; 3]> = Sentiment::all()
            .iter()
            .map(|s| theme_for_sentiment(*s).orbs[0].channels())
            .collect();
        assert_eq!(orbs.len(), Sentiment::all().len());

        let badges: HashSet<[u8; 3]> = Sentiment::all()
            .iter()
            .map(|s| theme_for_sentiment(*s).badge.text.channels())
            .collect();
        assert_eq!(badges.len(), Sentiment::all().len());
    }

    #[test]
    fn test_unknown_labels_share_default_instance() {
        let labels = ["", "Happy", "joyful", "THOUGHTFUL", "Joyful ", "🌧"];
        for label in labels {
            assert!(std::ptr::eq(theme_for(label), &DEFAULT_THEME), "{label:?}");
        }
        assert!(DEFAULT_THEME.is_default());
    }

    #[test]
    fn test_backdrop_glows() {
        assert!(DEFAULT_THEME.backdrop.is_empty());
        assert_eq!(
            theme_for("Dark").backdrop,
            &[RadialGlow::new(50, 50, Rgba::new(15, 23, 42, 0.5), 70)]
        );
        assert_eq!(theme_for("Melancholic").backdrop.len(), 2);
    }

    #[test]
    fn test_accent_css() {
        assert_eq!(theme_for("Joyful").accent.to_string(), "#fbbf24");
        assert_eq!(theme_for("Romantic").accent_glow.to_string(), "rgba(244,114,182,0.5)");
    }
}
