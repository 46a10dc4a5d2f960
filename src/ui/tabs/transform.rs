// Encrypt/encode tab rendering.
// - Shows the method selector and text input for one panel controller.
// - Reuses the shared output panel for the transform result.
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Color,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::PanelController,
    model::{Focus, InputField},
};

use super::super::{
    form::{INPUT_LABEL_COL_WIDTH, choice_input_line, hint, input_line, section},
    output_panel::{OutputPanelView, render_output_panel},
    pane_border_style,
};

pub fn render_transform_tab(frame: &mut Frame, panel: &PanelController, focus: Focus, area: Rect) {
    let constraints = if focus == Focus::Output {
        [Constraint::Length(7), Constraint::Min(0)]
    } else {
        [Constraint::Length(11), Constraint::Min(0)]
    };
    let [top, bottom] = Layout::vertical(constraints).areas(area);

    render_panel_form(frame, panel, focus, top);
    render_panel_output(frame, panel, focus, bottom);
}

fn render_panel_form(frame: &mut Frame, panel: &PanelController, focus: Focus, area: Rect) {
    let form_focused = focus == Focus::Form;
    let kind = panel.kind();
    let method_active = form_focused && panel.active_input == InputField::Method;
    let text_cursor =
        (form_focused && panel.active_input == InputField::Text).then_some(panel.input.cursor());
    // Borders plus label column and its gap.
    let value_width = (area.width as usize).saturating_sub(2 + INPUT_LABEL_COL_WIDTH + 2);

    let mut lines = vec![
        section(&kind.title().to_ascii_uppercase()),
        hint(kind.description()),
        Line::from(""),
        choice_input_line("Method", panel.method().label(), method_active),
        input_line("Text", panel.input.value(), text_cursor, value_width),
    ];

    if form_focused {
        lines.push(Line::from(""));
        lines.push(hint(&format!(
            "Enter to {}, Ctrl+r to decode, Tab to switch field.",
            kind.run_label()
        )));
        lines.push(hint("Left/Right on Method cycles the method."));
    }

    let form = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(pane_border_style(form_focused, Color::LightYellow))
                .title(kind.title()),
        )
        .alignment(Alignment::Left);

    frame.render_widget(form, area);
}

fn render_panel_output(frame: &mut Frame, panel: &PanelController, focus: Focus, area: Rect) {
    let title = match panel.output() {
        Some(output) => format!(
            "output: {} ({} chars, scroll: {})",
            panel.method().id(),
            output.chars().count(),
            panel.output_view.scroll()
        ),
        None => "output".to_string(),
    };

    render_output_panel(
        frame,
        area,
        OutputPanelView {
            title: &title,
            output: &panel.output_view,
            placeholder: "Nothing yet. Press Enter in the form to run the selected method.",
            focused: focus == Focus::Output,
            accent_color: Color::LightBlue,
        },
    );
}
