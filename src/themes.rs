use ratatui::style::Color;

use crate::container::OpResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeName {
    Default,
    Monokai,
    Matrix,
}

impl ThemeName {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "monokai" => Some(Self::Monokai),
            "matrix" => Some(Self::Matrix),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Monokai => "monokai",
            Self::Matrix => "matrix",
        }
    }

    pub fn all_themes() -> &'static [ThemeName] {
        &[ThemeName::Default, ThemeName::Monokai, ThemeName::Matrix]
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Default => Self::Monokai,
            Self::Monokai => Self::Matrix,
            Self::Matrix => Self::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    // Cell colors
    pub cell_fresh: Color,
    pub cell_settled: Color,
    pub cell_border: Color,
    pub cell_text: Color,

    // UI element colors
    pub header_fg: Color,
    pub header_bg: Color,
    pub border_normal: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_accent: Color,
    pub background: Color,

    // Button colors
    pub button_bg: Color,
    pub button_fg: Color,

    // Operation outcome colors
    pub outcome_inserted: Color,
    pub outcome_removed: Color,
    pub outcome_rejected: Color,
}

impl Theme {
    pub fn new(theme_name: ThemeName) -> Self {
        match theme_name {
            ThemeName::Default => Self::default_theme(),
            ThemeName::Monokai => Self::monokai_theme(),
            ThemeName::Matrix => Self::matrix_theme(),
        }
    }

    fn default_theme() -> Self {
        Self {
            // Cell colors
            cell_fresh: Color::Rgb(249, 47, 47), // Signal red
            cell_settled: Color::Rgb(125, 112, 245), // Periwinkle purple
            cell_border: Color::Rgb(47, 47, 47), // Charcoal gray
            cell_text: Color::Rgb(236, 240, 241), // Clouds white

            // UI element colors
            header_fg: Color::Rgb(236, 240, 241), // Clouds white
            header_bg: Color::Rgb(47, 47, 47),    // Charcoal gray
            border_normal: Color::Rgb(149, 165, 166), // Concrete gray
            text_primary: Color::Rgb(236, 240, 241), // Clouds white
            text_secondary: Color::Rgb(189, 195, 199), // Silver
            text_accent: Color::Rgb(255, 209, 92), // Mustard yellow
            background: Color::Rgb(47, 47, 47),   // Charcoal gray

            // Button colors
            button_bg: Color::Rgb(255, 209, 92), // Mustard yellow
            button_fg: Color::Rgb(47, 47, 47),   // Charcoal gray

            // Operation outcome colors
            outcome_inserted: Color::Rgb(46, 204, 113), // Emerald green
            outcome_removed: Color::Rgb(52, 152, 219),  // Dodger blue
            outcome_rejected: Color::Rgb(231, 76, 60),  // Alizarin red
        }
    }

    fn monokai_theme() -> Self {
        Self {
            // Cell colors - Monokai inspired
            cell_fresh: Color::Rgb(249, 38, 114), // Monokai pink
            cell_settled: Color::Rgb(174, 129, 255), // Monokai purple
            cell_border: Color::Rgb(39, 40, 34),  // Monokai dark bg
            cell_text: Color::Rgb(248, 248, 242), // Monokai white

            // UI element colors - Monokai inspired
            header_fg: Color::Rgb(248, 248, 242), // Monokai white
            header_bg: Color::Rgb(39, 40, 34),    // Monokai dark bg
            border_normal: Color::Rgb(117, 113, 94), // Monokai gray
            text_primary: Color::Rgb(248, 248, 242), // Monokai white
            text_secondary: Color::Rgb(253, 151, 31), // Monokai orange
            text_accent: Color::Rgb(166, 226, 46), // Monokai green
            background: Color::Rgb(39, 40, 34),   // Monokai dark bg

            // Button colors
            button_bg: Color::Rgb(253, 151, 31), // Monokai orange
            button_fg: Color::Rgb(39, 40, 34),   // Monokai dark bg

            // Operation outcome colors
            outcome_inserted: Color::Rgb(166, 226, 46), // Monokai green
            outcome_removed: Color::Rgb(102, 217, 239), // Monokai cyan
            outcome_rejected: Color::Rgb(249, 38, 114), // Monokai pink
        }
    }

    fn matrix_theme() -> Self {
        Self {
            // Cell colors - Matrix inspired
            cell_fresh: Color::Rgb(0, 255, 65), // Bright matrix green
            cell_settled: Color::Rgb(0, 150, 35), // Darker matrix green
            cell_border: Color::Rgb(0, 0, 0),   // Pure black
            cell_text: Color::Rgb(0, 255, 65),  // Bright matrix green

            // UI element colors - Matrix inspired
            header_fg: Color::Rgb(0, 255, 65), // Bright matrix green
            header_bg: Color::Rgb(0, 0, 0),    // Pure black
            border_normal: Color::Rgb(0, 150, 35), // Medium matrix green
            text_primary: Color::Rgb(0, 200, 50), // Matrix green
            text_secondary: Color::Rgb(0, 150, 35), // Darker matrix green
            text_accent: Color::Rgb(0, 255, 65), // Bright matrix green
            background: Color::Rgb(0, 0, 0),   // Pure black

            // Button colors
            button_bg: Color::Rgb(0, 150, 35), // Medium matrix green
            button_fg: Color::Rgb(0, 0, 0),    // Pure black

            // Operation outcome colors
            outcome_inserted: Color::Rgb(0, 255, 65), // Bright matrix green
            outcome_removed: Color::Rgb(0, 200, 50),  // Medium matrix green
            outcome_rejected: Color::Rgb(255, 0, 0),  // Matrix red
        }
    }

    pub fn get_outcome_color(&self, outcome: &OpResult) -> Color {
        match outcome {
            OpResult::Inserted(_) => self.outcome_inserted,
            OpResult::Removed(_) => self.outcome_removed,
            OpResult::Rejected => self.outcome_rejected,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeName::Default)
    }
}
