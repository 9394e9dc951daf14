//! Variable table rendering: a bordered two-column Name/Value list with the
//! selected row highlighted.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::snapshot::{Snapshot, VarEntry};
use crate::ui::theme::DEFAULT_THEME;

/// Rows consumed by the block borders and the header line.
pub const TABLE_CHROME_ROWS: usize = 3;

/// Pad or truncate `s` to exactly `width` columns, marking truncation with
/// an ellipsis.
pub fn compress(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len <= width {
        let mut out = String::with_capacity(width);
        out.push_str(s);
        out.extend(std::iter::repeat(' ').take(width - len));
        out
    } else if width <= 3 {
        s.chars().take(width).collect()
    } else {
        let mut out: String = s.chars().take(width - 3).collect();
        out.push_str("...");
        out
    }
}

/// Render the visible window of the variable table.
///
/// `position` is the first visible entry index; the caller has already run
/// the viewport recompute so `selected` is inside the window.
pub fn render_table_pane(
    frame: &mut Frame,
    area: Rect,
    entries: &[VarEntry],
    selected: usize,
    position: usize,
) {
    let block = Block::default()
        .title(" Environment ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.frame));

    let content_width = (area.width.saturating_sub(3)) as usize;
    let name_width = content_width * 2 / 5;
    let value_width = content_width - name_width;

    let visible_rows = (area.height as usize).saturating_sub(TABLE_CHROME_ROWS);

    let mut items = Vec::new();
    items.push(ListItem::new(Line::from(vec![
        Span::styled(
            compress("Name", name_width),
            Style::default()
                .fg(DEFAULT_THEME.frame)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(DEFAULT_THEME.frame)),
        Span::styled(
            compress("Value", value_width),
            Style::default()
                .fg(DEFAULT_THEME.frame)
                .add_modifier(Modifier::BOLD),
        ),
    ])));

    let end = entries.len().min(position + visible_rows);
    for (index, entry) in entries.iter().enumerate().take(end).skip(position) {
        let name = compress(&entry.name, name_width);
        let value = compress(&Snapshot::printable(&entry.value), value_width);
        let row_style = if index == selected {
            Style::default()
                .fg(DEFAULT_THEME.selected_fg)
                .bg(DEFAULT_THEME.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.name)
        };
        items.push(ListItem::new(Line::from(vec![
            Span::styled(name, row_style),
            Span::styled(" │ ", Style::default().fg(DEFAULT_THEME.frame)),
            Span::styled(value, row_style),
        ])));
    }

    if entries.is_empty() {
        items.push(
            ListItem::new("(no variables)").style(Style::default().fg(DEFAULT_THEME.comment)),
        );
    }

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_pads_short_strings() {
        assert_eq!(compress("abc", 5), "abc  ");
        assert_eq!(compress("", 3), "   ");
    }

    #[test]
    fn test_compress_truncates_with_ellipsis() {
        assert_eq!(compress("abcdefgh", 6), "abc...");
        assert_eq!(compress("abcdefgh", 8), "abcdefgh");
    }

    #[test]
    fn test_compress_tiny_width() {
        assert_eq!(compress("abcdefgh", 2), "ab");
    }
}
