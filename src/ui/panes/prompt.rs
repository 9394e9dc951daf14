//! One-line input prompt rendered below the main pane while the app is
//! collecting a line of text (search, goto, replacement values).

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::DEFAULT_THEME;

pub fn render_prompt_line(frame: &mut Frame, area: Rect, label: &str, buffer: &str) {
    let spans = vec![
        Span::styled(
            format!("{} ", label),
            Style::default()
                .fg(DEFAULT_THEME.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(buffer.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(
            "█",
            Style::default().fg(DEFAULT_THEME.accent),
        ),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
