//! Sliding-window viewport arithmetic.
//!
//! The same recompute drives both the main variable table and the nested
//! path-list editor; only the visible row budget differs between the two.

/// Clamp `selected` into the list and slide the window so it stays visible.
///
/// Returns `(position, selected)` with the guarantee that
/// `position <= selected <= position + visible_rows - 1` whenever the list is
/// non-empty. An empty list (or zero-row window) pins both to zero.
pub fn recompute(
    selected: usize,
    length: usize,
    position: usize,
    visible_rows: usize,
) -> (usize, usize) {
    if length == 0 || visible_rows == 0 {
        return (0, 0);
    }
    let selected = selected.min(length - 1);
    let mut position = position.min(length - 1);
    let mut position_bound = position + visible_rows - 1;

    if selected < position {
        position = selected;
        position_bound = position + visible_rows - 1;
    }
    if selected > position_bound {
        position_bound = selected;
        position = position_bound + 1 - visible_rows;
    }
    (position, selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_always_inside_window() {
        for length in 1..40 {
            for visible_rows in 1..12 {
                for selected in 0..length + 5 {
                    for start in 0..length {
                        let (pos, sel) = recompute(selected, length, start, visible_rows);
                        assert!(sel < length);
                        assert!(pos <= sel, "pos {} sel {}", pos, sel);
                        assert!(sel <= pos + visible_rows - 1);
                    }
                }
            }
        }
    }

    #[test]
    fn test_scroll_down_slides_window() {
        // window of 5 rows starting at 0, selection moves to row 7
        assert_eq!(recompute(7, 20, 0, 5), (3, 7));
    }

    #[test]
    fn test_scroll_up_slides_window() {
        // window at 10, selection jumps back to row 2
        assert_eq!(recompute(2, 20, 10, 5), (2, 2));
    }

    #[test]
    fn test_selection_clamped_to_end() {
        assert_eq!(recompute(99, 10, 0, 5), (5, 9));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(recompute(3, 0, 2, 5), (0, 0));
    }
}
