// Terminal event dispatch.
// - Maps key presses and paste events onto App operations.
// - Global chords first, then the keybinds popup, then the focused pane.
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    analysis::AnalysisAction,
    app::App,
    model::{Focus, Tab},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn handle_event(app: &mut App, event: Event) -> Flow {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if !app.show_keybinds {
                app.paste(&text);
            }
            Flow::Continue
        }
        _ => Flow::Continue,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Flow {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return Flow::Quit;
    }

    if key.code == KeyCode::F(1) {
        app.toggle_keybinds();
        return Flow::Continue;
    }

    if app.show_keybinds {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => app.hide_keybinds(),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_keybinds_down(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_keybinds_up(),
            _ => {}
        }
        return Flow::Continue;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        handle_control_chord(app, key.code);
        return Flow::Continue;
    }

    if key.modifiers.contains(KeyModifiers::ALT) {
        if let KeyCode::Char(ch) = key.code
            && let Some(number) = ch.to_digit(10)
        {
            app.select_tab_by_number(number as usize);
        }
        return Flow::Continue;
    }

    match key.code {
        KeyCode::Esc => app.focus = Focus::Form,
        KeyCode::PageDown => app.page_output_down(),
        KeyCode::PageUp => app.page_output_up(),
        _ if app.focus == Focus::Form => handle_form_key(app, key.code),
        _ => handle_output_key(app, key.code),
    }

    Flow::Continue
}

fn handle_control_chord(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('n') => app.select_next_tab(),
        KeyCode::Char('p') => app.select_previous_tab(),
        KeyCode::Char('o') => app.toggle_focus(),
        KeyCode::Char('u') => app.clear_input(),
        KeyCode::Char('r') => app.decode_active(),
        _ if app.tab() != Tab::Analyze => {}
        KeyCode::Char('s') => app.submit_analysis(AnalysisAction::Source),
        KeyCode::Char('e') => app.submit_analysis(AnalysisAction::Security),
        KeyCode::Char('d') => app.submit_analysis(AnalysisAction::DeadLink),
        KeyCode::Char('x') => app.cancel_analysis(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Tab | KeyCode::BackTab => app.next_field(),
        KeyCode::Enter => app.run_active(),
        KeyCode::Left => app.move_left(),
        KeyCode::Right => app.move_right(),
        KeyCode::Home => app.move_home(),
        KeyCode::End => app.move_end(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete(),
        KeyCode::Char(ch) => app.push_char(ch),
        _ => {}
    }
}

fn handle_output_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_output_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_output_up(),
        KeyCode::Char('?') => app.toggle_keybinds(),
        KeyCode::Char('x') if app.tab() == Tab::Analyze => app.cancel_analysis(),
        KeyCode::Tab | KeyCode::BackTab => app.focus = Focus::Form,
        _ => {}
    }
}
