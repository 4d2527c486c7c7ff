use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for the jump and filter prompts.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Rough number of rows `text` occupies once word-wrapped to `width` terminal
/// columns. Wide glyphs count for two.
pub(crate) fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width as usize;
    if width == 0 {
        return 0;
    }

    let mut rows = 0usize;
    for paragraph in text.lines() {
        let mut line_len = 0usize;
        rows += 1;
        for word in paragraph.split_whitespace() {
            let word_len = UnicodeWidthStr::width(word);
            let needed = if line_len == 0 { word_len } else { word_len + 1 };
            if line_len > 0 && line_len + needed > width {
                rows += 1;
                line_len = word_len;
            } else {
                line_len += needed;
            }
            while line_len > width {
                rows += 1;
                line_len -= width;
            }
        }
    }
    rows.min(u16::MAX as usize) as u16
}

/// Slice of `area` with `height` rows centered vertically.
pub(crate) fn vertically_centered(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let top = (area.height - height) / 2;
    Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height,
    }
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn wrapped_height_counts_word_wraps() {
        assert_eq!(wrapped_height("", 10), 0);
        assert_eq!(wrapped_height("In the beginning", 20), 1);
        assert_eq!(wrapped_height("In the beginning", 10), 2);
        assert_eq!(wrapped_height("abcdefghijkl", 5), 3);
        assert_eq!(wrapped_height("one\ntwo", 10), 2);
        assert_eq!(wrapped_height("anything", 0), 0);
    }

    #[test]
    fn wrapped_height_measures_wide_glyphs_by_columns() {
        // Six double-width glyphs fill twelve columns.
        assert_eq!(wrapped_height("漢字漢字漢字", 5), 3);
        assert_eq!(wrapped_height("Máté", 4), 1);
    }

    #[test]
    fn vertically_centered_splits_spare_rows() {
        let area = Rect::new(0, 2, 40, 10);
        assert_eq!(vertically_centered(area, 4), Rect::new(0, 5, 40, 4));
        assert_eq!(vertically_centered(area, 20), area);
    }

    #[test]
    fn surface_error_prefers_root_cause() {
        let err = anyhow!("no such table: verses").context("failed to prepare verse query");
        assert_eq!(surface_error(&err), "no such table: verses");
    }
}
