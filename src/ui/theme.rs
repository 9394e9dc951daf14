use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub frame: Color,       // Green table frame
    pub name: Color,        // Yellow variable names and values
    pub selected_fg: Color, // Selected row text
    pub selected_bg: Color, // Selected row background
    pub accent: Color,      // Prompts and type hints
    pub success: Color,
    pub error: Color,
    pub comment: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    frame: Color::Rgb(166, 227, 161),
    name: Color::Rgb(249, 226, 175),
    selected_fg: Color::Rgb(30, 30, 46),
    selected_bg: Color::Rgb(137, 180, 250),
    accent: Color::Rgb(203, 166, 247),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    comment: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
};
