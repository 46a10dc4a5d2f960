// Reusable scrollable text-output panel.
// - Renders title, content lines, and scroll offset in a consistent style.
// - Applies focus-aware border styling so every tab can reuse it.
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::OutputView;

use super::pane_border_style;

pub struct OutputPanelView<'a> {
    pub title: &'a str,
    pub output: &'a OutputView,
    pub placeholder: &'a str,
    pub focused: bool,
    pub accent_color: Color,
}

pub fn render_output_panel(frame: &mut Frame, area: Rect, panel: OutputPanelView<'_>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(pane_border_style(panel.focused, panel.accent_color))
        .title(panel.title);
    let inner = block.inner(area);
    let scroll = panel
        .output
        .clamped_scroll_for_viewport(inner.height as usize);

    let lines = if panel.output.is_empty() {
        vec![Line::styled(
            panel.placeholder,
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        panel
            .output
            .lines()
            .iter()
            .map(String::as_str)
            .map(Line::from)
            .collect::<Vec<_>>()
    };

    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));

    frame.render_widget(widget, area);
}
