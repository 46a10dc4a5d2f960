// Form line builders shared by the tab renderers.
// - Section headers, label/value rows, choice selectors, and text inputs.
// - Text inputs scroll horizontally so the cursor stays visible.
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

pub(crate) const INPUT_LABEL_COL_WIDTH: usize = 11;

pub(crate) fn section(title: &str) -> Line<'static> {
    Line::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

pub(crate) fn hint(text: &str) -> Line<'static> {
    Line::styled(text.to_string(), Style::default().fg(Color::DarkGray))
}

pub(crate) fn choice_input_line(label: &str, value: &str, active: bool) -> Line<'static> {
    let label_cell = format!("{label:<INPUT_LABEL_COL_WIDTH$}");
    let value = if active {
        format!("< {value} >")
    } else {
        format!("  {value}  ")
    };

    Line::from(vec![
        Span::styled(label_cell, input_label_style(active)),
        Span::raw("  "),
        Span::styled(value, input_value_style(active)),
    ])
}

/// Text input row. `active_cursor` is the char cursor when the field has
/// focus; `max_width` is the room left for the value after the label.
pub(crate) fn input_line(
    label: &str,
    value: &str,
    active_cursor: Option<usize>,
    max_width: usize,
) -> Line<'static> {
    let label_cell = format!("{label:<INPUT_LABEL_COL_WIDTH$}");
    let active = active_cursor.is_some();

    let mut spans = vec![
        Span::styled(label_cell, input_label_style(active)),
        Span::raw("  "),
    ];

    let chars = value.chars().map(display_char).collect::<Vec<_>>();
    let cursor = active_cursor.unwrap_or(0).min(chars.len());
    let (start, end) = visible_window(&chars, cursor, max_width.max(1));
    let value_style = input_value_style(active);
    let cursor_style = Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD);

    for (index, ch) in chars.iter().enumerate().take(end).skip(start) {
        let style = if active && index == cursor {
            cursor_style
        } else {
            value_style
        };
        spans.push(Span::styled(ch.to_string(), style));
    }

    if active && cursor == chars.len() {
        spans.push(Span::styled(" ".to_string(), cursor_style));
    }

    Line::from(spans)
}

fn input_label_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Gray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD)
    }
}

fn input_value_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Gray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

// Pasted text can carry control chars that would break the row layout.
fn display_char(ch: char) -> char {
    match ch {
        '\n' => '⏎',
        '\t' => '→',
        ch if ch.is_control() => '�',
        ch => ch,
    }
}

/// Char range `[start, end)` that fits in `max_width` columns and contains
/// the cursor (one extra column is reserved for a cursor at the end).
pub(crate) fn visible_window(chars: &[char], cursor: usize, max_width: usize) -> (usize, usize) {
    let width_of = |ch: &char| UnicodeWidthChar::width(*ch).unwrap_or(0);
    let cursor_room = usize::from(cursor == chars.len());

    let mut start = 0;
    let mut used = chars[..cursor].iter().map(width_of).sum::<usize>() + cursor_room;
    while used > max_width && start < cursor {
        used -= width_of(&chars[start]);
        start += 1;
    }

    let mut end = cursor;
    let mut width = chars[start..cursor].iter().map(width_of).sum::<usize>() + cursor_room;
    while end < chars.len() {
        let next = width_of(&chars[end]);
        if width + next > max_width {
            break;
        }
        width += next;
        end += 1;
    }

    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn short_value_is_fully_visible() {
        assert_eq!(visible_window(&chars("abc"), 0, 10), (0, 3));
        assert_eq!(visible_window(&chars("abc"), 3, 10), (0, 3));
    }

    #[test]
    fn window_follows_cursor_at_end() {
        // 10 chars, cursor after the last, 5 columns: 4 chars + cursor cell.
        assert_eq!(visible_window(&chars("0123456789"), 10, 5), (6, 10));
    }

    #[test]
    fn window_counts_wide_chars() {
        // Each CJK char is two columns wide.
        assert_eq!(visible_window(&chars("站长工具"), 4, 5), (2, 4));
        assert_eq!(visible_window(&chars("站长工具"), 0, 5), (0, 2));
    }

    #[test]
    fn control_chars_are_replaced_for_display() {
        assert_eq!(display_char('\n'), '⏎');
        assert_eq!(display_char('\u{7}'), '�');
        assert_eq!(display_char('a'), 'a');
    }
}
