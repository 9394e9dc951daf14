//! Status bar rendering with keybindings and the last status message.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::DEFAULT_THEME;

/// Which key hints to show on the right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusHints {
    Browse,
    PathGroup,
}

pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    row_indicator: &str,
    hints: StatusHints,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left_spans = vec![
        Span::styled(
            format!(" {} ", row_indicator),
            Style::default()
                .bg(DEFAULT_THEME.selected_bg)
                .fg(Color::Black),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];
    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(Style::default().bg(DEFAULT_THEME.status_bg))
            .alignment(Alignment::Left),
        layout[0],
    );

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);

    let bindings: &[(&str, &str)] = match hints {
        StatusHints::Browse => &[
            ("j/k", "move"),
            ("g/G", "top/end"),
            ("/", "search"),
            (":", "goto"),
            ("e", "edit"),
            ("i", "smart edit"),
            ("q", "quit"),
        ],
        StatusHints::PathGroup => &[
            ("j/k", "move"),
            ("a/A", "add rear/front"),
            ("-/=", "reorder"),
            ("e", "edit"),
            ("r", "remove"),
            ("q", "done"),
        ],
    };

    let mut right_spans = Vec::new();
    for (key, desc) in bindings {
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(Style::default().bg(DEFAULT_THEME.status_bg))
            .alignment(Alignment::Right),
        layout[1],
    );
}
