use ratatui::style::Color;

use crate::converter::ScaleBand;

/// Light or dark palette, toggled at runtime and not persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors used by the renderer
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the switch, naming the theme it switches to
    pub fn switch_label(self) -> &'static str {
        match self {
            Theme::Light => "Ctrl+T: dark mode",
            Theme::Dark => "Ctrl+T: light mode",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::Rgb(248, 249, 250),
                text: Color::Rgb(33, 37, 41),
                muted: Color::Rgb(108, 117, 125),
                accent: Color::Rgb(16, 185, 129),
                error: Color::Rgb(220, 38, 38),
            },
            Theme::Dark => Palette {
                background: Color::Rgb(26, 26, 46),
                text: Color::Rgb(250, 250, 250),
                muted: Color::Rgb(113, 113, 122),
                accent: Color::Rgb(16, 185, 129),
                error: Color::Rgb(239, 68, 68),
            },
        }
    }
}

/// Gauge color for a scale band
pub fn band_color(band: ScaleBand) -> Color {
    match band {
        ScaleBand::Cold => Color::Rgb(69, 183, 209),
        ScaleBand::Mild => Color::Rgb(150, 206, 180),
        ScaleBand::Hot => Color::Rgb(255, 107, 107),
    }
}
