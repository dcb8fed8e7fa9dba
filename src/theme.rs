use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Colors used by the views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorPalette {
    // Base colors
    pub background: Color,
    pub surface: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub selection_text: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub accent: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub palette: ColorPalette,
}

impl Theme {
    /// Clean, minimalistic dark theme
    pub fn professional_dark() -> Self {
        Self {
            name: "Professional Dark".to_string(),
            palette: ColorPalette {
                background: Color::Rgb(16, 16, 20),
                surface: Color::Rgb(24, 24, 28),

                text_primary: Color::Rgb(224, 224, 230),
                text_secondary: Color::Rgb(160, 160, 168),
                text_muted: Color::Rgb(112, 112, 120),

                border: Color::Rgb(64, 64, 72),
                border_focused: Color::Rgb(88, 166, 255),
                selection: Color::Rgb(88, 166, 255),
                selection_text: Color::Rgb(16, 16, 20),

                success: Color::Rgb(76, 175, 80),
                warning: Color::Rgb(255, 193, 7),
                error: Color::Rgb(244, 67, 54),

                accent: Color::Rgb(88, 166, 255),
            },
        }
    }

    /// Clean, minimalistic light theme
    pub fn professional_light() -> Self {
        Self {
            name: "Professional Light".to_string(),
            palette: ColorPalette {
                background: Color::Rgb(250, 250, 252),
                surface: Color::Rgb(242, 242, 245),

                text_primary: Color::Rgb(32, 32, 40),
                text_secondary: Color::Rgb(96, 96, 104),
                text_muted: Color::Rgb(144, 144, 152),

                border: Color::Rgb(208, 208, 216),
                border_focused: Color::Rgb(0, 122, 255),
                selection: Color::Rgb(0, 122, 255),
                selection_text: Color::Rgb(250, 250, 252),

                success: Color::Rgb(52, 199, 89),
                warning: Color::Rgb(255, 149, 0),
                error: Color::Rgb(255, 59, 48),

                accent: Color::Rgb(0, 122, 255),
            },
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::professional_dark(),
            ThemeName::Light => Self::professional_light(),
        }
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.palette.border_focused)
        } else {
            Style::default().fg(self.palette.border)
        }
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.palette.selection_text)
            .bg(self.palette.selection)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::professional_dark()
    }
}
