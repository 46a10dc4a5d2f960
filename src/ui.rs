// Root UI composition and shared visual components.
// - Builds the global layout (tab bar + active tab + status + footer).
// - Renders shared chrome: tab bar, status line, and keybind popup.
// - Delegates tab-specific rendering to ui::tabs submodules.
mod form;
mod output_panel;
mod tabs;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
};
use unicode_width::UnicodeWidthChar;

use crate::{
    app::App,
    model::{Focus, Tab},
};

pub fn render(frame: &mut Frame, app: &App) {
    let [tabs_area, content, status, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_tab_bar(frame, app, tabs_area);

    match app.tab() {
        Tab::Encrypt => {
            tabs::transform::render_transform_tab(frame, &app.encrypt, app.focus, content)
        }
        Tab::Encode => {
            tabs::transform::render_transform_tab(frame, &app.encode, app.focus, content)
        }
        Tab::Analyze => tabs::analyze::render_analyze_tab(frame, app, app.focus, content),
    }

    render_status_line(frame, app, status);
    render_footer_hint(frame, footer);
    if app.show_keybinds {
        render_keybinds_popup(frame, app);
    }
}

fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let selected = Tab::ALL
        .iter()
        .position(|tab| *tab == app.tab())
        .unwrap_or(0);
    let labels = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!(" {} {} ", tab.number(), tab.label())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(labels)
        .select(selected)
        .divider(Span::styled("|", Style::default().fg(Color::DarkGray)))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title_top(Line::from("Webmaster Tools").left_aligned())
                .title_top(
                    Line::styled("(ctrl+n / ctrl+p)", Style::default().fg(Color::DarkGray))
                        .right_aligned(),
                )
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(tabs, area);
}

fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let focus_label = match app.focus {
        Focus::Form => "form",
        Focus::Output => "output",
    };
    let prefix = format!("[{focus_label}] ");
    let available = (area.width as usize).saturating_sub(prefix.chars().count());
    let status = Paragraph::new(Line::from(vec![
        Span::styled(prefix, Style::default().fg(Color::Cyan)),
        Span::raw(truncate_to_width(&app.status_message, available)),
    ]))
    .alignment(Alignment::Left);
    frame.render_widget(status, area);
}

fn render_keybinds_popup(frame: &mut Frame, app: &App) {
    let outer = frame.area();
    let [vertical] = Layout::vertical([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(outer);
    let [popup] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(vertical);

    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("Press F1, ? or Esc to close this window."),
        Line::from(""),
        keybind_section("GLOBAL"),
        keybind_row("F1", "toggle keybinds popup"),
        keybind_row("Esc", "close popup / back to form"),
        keybind_row("Ctrl+c / Ctrl+q", "quit app"),
        keybind_row("Ctrl+n / Ctrl+p", "next / previous tab"),
        keybind_row("Alt+1 / Alt+2 / Alt+3", "jump to tab"),
        keybind_row("Ctrl+o", "toggle form / output focus"),
        Line::from(""),
        keybind_section("FORM"),
        keybind_row("Tab / Shift+Tab", "switch field"),
        keybind_row("Left/Right", "move cursor or cycle choice"),
        keybind_row("Home / End", "jump to start / end of text"),
        keybind_row("Backspace / Delete", "delete character"),
        keybind_row("Ctrl+u", "clear text field"),
        keybind_row("Enter", "run selected method or action"),
        Line::from(""),
        keybind_section("ENCRYPT / ENCODE"),
        keybind_row("Ctrl+r", "decode input with selected method"),
        Line::from(""),
        keybind_section("ANALYZE"),
        keybind_row("Ctrl+s", "view source"),
        keybind_row("Ctrl+e", "security check"),
        keybind_row("Ctrl+d", "dead link check"),
        keybind_row("Ctrl+x", "cancel running analysis"),
        Line::from(""),
        keybind_section("OUTPUT"),
        keybind_row("j/k or Up/Down", "scroll output"),
        keybind_row("PgUp/PgDn", "page output"),
        keybind_row("?", "toggle keybinds popup"),
        keybind_row("x", "cancel running analysis"),
    ];

    let block = Block::default().borders(Borders::ALL).title("Keybinds");
    let inner = block.inner(popup);
    let visible_line_count = inner.height.max(1) as usize;
    let max_scroll_top = lines.len().saturating_sub(visible_line_count);
    let scroll_top = app.clamp_keybinds_scroll(max_scroll_top);
    let popup_widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .scroll((scroll_top.min(u16::MAX as usize) as u16, 0));

    frame.render_widget(popup_widget, popup);
}

fn keybind_section(title: &str) -> Line<'static> {
    Line::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn keybind_row(keys: &str, action: &str) -> Line<'static> {
    const KEY_COL_WIDTH: usize = 22;
    let keys_padded = format!("{keys:<KEY_COL_WIDTH$}");
    Line::from(vec![
        Span::styled(
            keys_padded,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::raw(action.to_string()),
    ])
}

fn render_footer_hint(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new(Line::styled(
        "Press F1 to see keyboard shortcuts",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Left);
    frame.render_widget(hint, area);
}

pub(super) fn pane_border_style(is_focused: bool, focused_color: Color) -> Style {
    if is_focused {
        Style::default()
            .fg(focused_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn truncate_to_width(value: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;
    for ch in value.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if ch_width > 0 && width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::Config;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 32)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate_to_width("abcdef", 3), "abc");
        assert_eq!(truncate_to_width("站长工具", 5), "站长");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn renders_tab_bar_and_active_panel() {
        let app = App::new(&Config::default());
        let screen = draw(&app);

        assert!(screen.contains("1 Encrypt"));
        assert!(screen.contains("3 Analyze"));
        assert!(screen.contains("MD5 (simulated)"));
        assert!(screen.contains("Press F1 to see keyboard shortcuts"));
    }

    #[test]
    fn renders_analysis_validation_error() {
        let mut app = App::new(&Config::default());
        app.select_tab_by_number(3);
        app.run_active();
        let screen = draw(&app);

        assert!(screen.contains("analysis: error"));
        assert!(screen.contains("Please enter a URL to analyze."));
    }

    #[test]
    fn renders_keybinds_popup() {
        let mut app = App::new(&Config::default());
        app.toggle_keybinds();
        let screen = draw(&app);

        assert!(screen.contains("Keybinds"));
        assert!(screen.contains("ENCRYPT / ENCODE"));
    }
}
