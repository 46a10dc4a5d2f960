// Analysis tab rendering.
// - Shows the URL input and the action selector in the top pane.
// - Reuses the shared output panel for the placeholder report.
// - The output title carries a spinner while a request is pending.
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    analysis::AnalysisState,
    app::App,
    model::{AnalysisField, Focus},
};

use super::super::{
    form::{INPUT_LABEL_COL_WIDTH, choice_input_line, hint, input_line, section},
    output_panel::{OutputPanelView, render_output_panel},
    pane_border_style,
};

pub fn render_analyze_tab(frame: &mut Frame, app: &App, focus: Focus, area: Rect) {
    let constraints = if focus == Focus::Output {
        [Constraint::Length(7), Constraint::Min(0)]
    } else {
        [Constraint::Length(12), Constraint::Min(0)]
    };
    let [top, bottom] = Layout::vertical(constraints).areas(area);

    render_analyze_form(frame, app, focus, top);
    render_analyze_output(frame, app, focus, bottom);
}

fn render_analyze_form(frame: &mut Frame, app: &App, focus: Focus, area: Rect) {
    let form_focused = focus == Focus::Form;
    let url_cursor = (form_focused && app.analysis_field == AnalysisField::Url)
        .then_some(app.url_input.cursor());
    let action_active = form_focused && app.analysis_field == AnalysisField::Action;
    let value_width = (area.width as usize).saturating_sub(2 + INPUT_LABEL_COL_WIDTH + 2);

    let mut lines = vec![
        section("WEBSITE ANALYSIS"),
        hint("Basic website analysis tools (simulated, no request is sent)."),
        Line::from(""),
        input_line("URL", app.url_input.value(), url_cursor, value_width),
        choice_input_line("Action", app.analysis_action.label(), action_active),
    ];

    if form_focused {
        lines.push(Line::from(""));
        lines.push(hint("Enter runs the selected action."));
        lines.push(hint("Ctrl+s source, Ctrl+e security, Ctrl+d dead links."));
        lines.push(hint("Ctrl+x cancels a running analysis."));
    }

    let form = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(pane_border_style(form_focused, Color::LightYellow))
                .title("Analyze"),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    frame.render_widget(form, area);
}

fn render_analyze_output(frame: &mut Frame, app: &App, focus: Focus, area: Rect) {
    let title = match app.analysis.state() {
        AnalysisState::Loading(request) => format!(
            "analysis {} {} ({}ms)",
            app.spinner_glyph(),
            request.action.id(),
            app.analysis.delay().as_millis()
        ),
        AnalysisState::Done { request, .. } => format!(
            "analysis: {} (scroll: {})",
            request.action.id(),
            app.analysis_output.scroll()
        ),
        AnalysisState::Failed(_) => "analysis: error".to_string(),
        AnalysisState::Idle => "analysis".to_string(),
    };

    let accent_color = if matches!(app.analysis.state(), AnalysisState::Failed(_)) {
        Color::LightRed
    } else {
        Color::LightBlue
    };

    render_output_panel(
        frame,
        area,
        OutputPanelView {
            title: &title,
            output: &app.analysis_output,
            placeholder: "Results appear here after an action runs.",
            focused: focus == Focus::Output,
            accent_color,
        },
    );

    if app.analysis_is_running() && area.height > 2 {
        let note = Paragraph::new(Line::styled(
            "x / Ctrl+x to cancel",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Right);
        let note_area = Rect {
            x: area.x + 1,
            y: area.y + area.height - 2,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(note, note_area);
    }
}
