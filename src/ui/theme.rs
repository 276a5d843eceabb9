use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Semantic colors used by the shell, grid, page bar and detail view
#[derive(Debug, Clone)]
pub struct ThemePalette {
    pub primary: Color,
    pub accent: Color,
    pub error: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_dim: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub highlight_bg: Color,

    // Page selector
    pub page_active: Color,
    pub page_inactive: Color,
    pub page_cursor: Color,
}

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Default,
    Nord,
    Dracula,
}

impl Theme {
    pub fn palette(&self) -> ThemePalette {
        match self {
            Theme::Default => ThemePalette {
                primary: Color::Cyan,
                accent: Color::Yellow,
                error: Color::Red,

                text_primary: Color::White,
                text_secondary: Color::Gray,
                text_dim: Color::DarkGray,

                border: Color::White,
                border_focused: Color::Cyan,
                highlight_bg: Color::DarkGray,

                page_active: Color::Cyan,
                page_inactive: Color::White,
                page_cursor: Color::Yellow,
            },

            Theme::Nord => ThemePalette {
                // https://www.nordtheme.com/
                primary: Color::Rgb(136, 192, 208),   // Frost - #88C0D0
                accent: Color::Rgb(235, 203, 139),    // Aurora Yellow - #EBCB8B
                error: Color::Rgb(191, 97, 106),      // Aurora Red - #BF616A

                text_primary: Color::Rgb(236, 239, 244),   // Snow Storm - #ECEFF4
                text_secondary: Color::Rgb(216, 222, 233), // Snow Storm - #D8DEE9
                text_dim: Color::Rgb(76, 86, 106),         // Polar Night - #4C566A

                border: Color::Rgb(76, 86, 106),
                border_focused: Color::Rgb(136, 192, 208),
                highlight_bg: Color::Rgb(59, 66, 82),      // Polar Night - #3B4252

                page_active: Color::Rgb(136, 192, 208),
                page_inactive: Color::Rgb(216, 222, 233),
                page_cursor: Color::Rgb(235, 203, 139),
            },

            Theme::Dracula => ThemePalette {
                // https://draculatheme.com/
                primary: Color::Rgb(189, 147, 249),   // Purple - #BD93F9
                accent: Color::Rgb(241, 250, 140),    // Yellow - #F1FA8C
                error: Color::Rgb(255, 85, 85),       // Red - #FF5555

                text_primary: Color::Rgb(248, 248, 242),  // Foreground - #F8F8F2
                text_secondary: Color::Rgb(98, 114, 164), // Comment - #6272A4
                text_dim: Color::Rgb(68, 71, 90),         // Current Line - #44475A

                border: Color::Rgb(68, 71, 90),
                border_focused: Color::Rgb(189, 147, 249),
                highlight_bg: Color::Rgb(68, 71, 90),

                page_active: Color::Rgb(189, 147, 249),
                page_inactive: Color::Rgb(248, 248, 242),
                page_cursor: Color::Rgb(241, 250, 140),
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Theme::Default => "Default",
            Theme::Nord => "Nord",
            Theme::Dracula => "Dracula",
        }
    }

    pub fn all() -> Vec<Theme> {
        vec![Theme::Default, Theme::Nord, Theme::Dracula]
    }

    /// Next theme in `all()`, wrapping around
    pub fn next(&self) -> Theme {
        let all = Self::all();
        let i = all.iter().position(|t| t == self).unwrap_or(0);
        all[(i + 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_through_all_themes() {
        let mut theme = Theme::default();
        let mut seen = vec![theme];
        for _ in 1..Theme::all().len() {
            theme = theme.next();
            seen.push(theme);
        }
        assert_eq!(seen, Theme::all());
        assert_eq!(theme.next(), Theme::Default);
    }
}
