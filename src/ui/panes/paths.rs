//! Path-list editor rendering: one path element per row, selection
//! highlighted, window already positioned by the viewport recompute.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::ui::theme::DEFAULT_THEME;

/// Rows consumed by the block borders. Shorter chrome than the main table:
/// there is no header row, which is why the editor gets its own row budget.
pub const PATHS_CHROME_ROWS: usize = 2;

pub fn render_path_pane(
    frame: &mut Frame,
    area: Rect,
    name: &str,
    elements: &[String],
    selected: usize,
    position: usize,
) {
    let block = Block::default()
        .title(format!(" {} ", name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.frame));

    let visible_rows = (area.height as usize).saturating_sub(PATHS_CHROME_ROWS);
    let end = elements.len().min(position + visible_rows);

    let mut items = Vec::new();
    for (index, element) in elements.iter().enumerate().take(end).skip(position) {
        let style = if index == selected {
            Style::default()
                .fg(DEFAULT_THEME.selected_fg)
                .bg(DEFAULT_THEME.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.name)
        };
        items.push(ListItem::new(element.clone()).style(style));
    }

    if elements.is_empty() {
        items.push(ListItem::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment)));
    }

    frame.render_widget(List::new(items).block(block), area);
}
