// Central application state shared by the app submodules.
// - Owns one controller per tab plus tab/focus state and the status line.
// - Drives the analysis controller from the event-loop tick.
// - Exposes cross-cutting helpers used by event handling and rendering code.
mod analysis_tab;
mod input;
mod panel;
mod tool_output;

use std::cell::Cell;

use crate::{
    analysis::{AnalysisAction, AnalysisController},
    config::Config,
    model::{AnalysisField, Focus, InputField, PanelKind, Tab},
};

use self::input::TextInput;
pub(crate) use self::tool_output::OutputView;

pub(crate) use self::panel::PanelController;

pub struct App {
    tab: Tab,
    pub(crate) focus: Focus,
    pub(crate) encrypt: PanelController,
    pub(crate) encode: PanelController,
    pub(crate) analysis: AnalysisController,
    pub(crate) url_input: TextInput,
    pub(crate) analysis_action: AnalysisAction,
    pub(crate) analysis_field: AnalysisField,
    pub(crate) analysis_output: OutputView,
    pub(crate) status_message: String,
    pub(crate) show_keybinds: bool,
    keybinds_scroll: Cell<usize>,
    spinner_frame: usize,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            tab: config.start_tab,
            focus: Focus::Form,
            encrypt: PanelController::new(
                PanelKind::Encryption,
                config.method_for(PanelKind::Encryption),
            ),
            encode: PanelController::new(
                PanelKind::Encoding,
                config.method_for(PanelKind::Encoding),
            ),
            analysis: AnalysisController::new(config.analysis_delay),
            url_input: TextInput::new(),
            analysis_action: AnalysisAction::Source,
            analysis_field: AnalysisField::Url,
            analysis_output: OutputView::empty(),
            status_message: "Type some text and press Enter.".to_string(),
            show_keybinds: false,
            keybinds_scroll: Cell::new(0),
            spinner_frame: 0,
        }
    }

    pub fn tick(&mut self) {
        if self.analysis.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % spinner_frames().len();
        }
        if self.analysis.poll() {
            self.sync_analysis_output();
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_next_tab(&mut self) {
        self.set_tab(self.tab.next());
    }

    pub fn select_previous_tab(&mut self) {
        self.set_tab(self.tab.previous());
    }

    pub fn select_tab_by_number(&mut self, number: usize) -> bool {
        let Some(tab) = Tab::from_number(number) else {
            return false;
        };
        self.set_tab(tab);
        true
    }

    fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.focus = Focus::Form;
        self.status_message = match tab {
            Tab::Encrypt | Tab::Encode => "Type some text and press Enter.".to_string(),
            Tab::Analyze => "Enter a URL, pick an action, and press Enter.".to_string(),
        };
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    pub fn toggle_keybinds(&mut self) {
        self.show_keybinds = !self.show_keybinds;
        self.keybinds_scroll.set(0);
    }

    pub fn hide_keybinds(&mut self) {
        self.show_keybinds = false;
    }

    pub fn scroll_keybinds_down(&mut self) {
        self.keybinds_scroll.set(self.keybinds_scroll.get() + 1);
    }

    pub fn scroll_keybinds_up(&mut self) {
        self.keybinds_scroll
            .set(self.keybinds_scroll.get().saturating_sub(1));
    }

    pub(crate) fn clamp_keybinds_scroll(&self, max_scroll_top: usize) -> usize {
        let clamped = self.keybinds_scroll.get().min(max_scroll_top);
        self.keybinds_scroll.set(clamped);
        clamped
    }

    fn active_panel_mut(&mut self) -> Option<&mut PanelController> {
        match self.tab {
            Tab::Encrypt => Some(&mut self.encrypt),
            Tab::Encode => Some(&mut self.encode),
            Tab::Analyze => None,
        }
    }

    fn active_output_mut(&mut self) -> &mut OutputView {
        match self.tab {
            Tab::Encrypt => &mut self.encrypt.output_view,
            Tab::Encode => &mut self.encode.output_view,
            Tab::Analyze => &mut self.analysis_output,
        }
    }

    pub fn run_active(&mut self) {
        if self.tab == Tab::Analyze {
            self.submit_analysis(self.analysis_action);
            return;
        }

        let Some(panel) = self.active_panel_mut() else {
            return;
        };
        panel.run();
        let label = panel.method().label();
        self.status_message = format!("Applied {label}.");
    }

    pub fn decode_active(&mut self) {
        let Some(panel) = self.active_panel_mut() else {
            return;
        };

        let label = panel.method().label();
        self.status_message = match panel.run_inverse() {
            Ok(()) => format!("Decoded {label}."),
            Err(err) => format!("Decode failed ({label}): {err}"),
        };
    }

    pub fn next_field(&mut self) {
        match self.active_panel_mut() {
            Some(panel) => panel.next_input(),
            None => self.analysis_field = self.analysis_field.next(),
        }
    }

    pub fn move_left(&mut self) {
        if let Some(panel) = self.active_panel_mut() {
            match panel.active_input {
                InputField::Method => panel.select_previous_method(),
                InputField::Text => panel.input.move_left(),
            }
            return;
        }

        match self.analysis_field {
            AnalysisField::Url => self.url_input.move_left(),
            AnalysisField::Action => self.analysis_action = self.analysis_action.previous(),
        }
    }

    pub fn move_right(&mut self) {
        if let Some(panel) = self.active_panel_mut() {
            match panel.active_input {
                InputField::Method => panel.select_next_method(),
                InputField::Text => panel.input.move_right(),
            }
            return;
        }

        match self.analysis_field {
            AnalysisField::Url => self.url_input.move_right(),
            AnalysisField::Action => self.analysis_action = self.analysis_action.next(),
        }
    }

    pub fn move_home(&mut self) {
        if let Some(input) = self.active_text_input_mut() {
            input.move_home();
        }
    }

    pub fn move_end(&mut self) {
        if let Some(input) = self.active_text_input_mut() {
            input.move_end();
        }
    }

    pub fn push_char(&mut self, ch: char) {
        if let Some(input) = self.active_text_input_mut() {
            input.insert_char(ch);
        }
    }

    pub fn paste(&mut self, text: &str) {
        // The URL field is a single line; panel text keeps its newlines.
        let single_line;
        let text = if self.tab == Tab::Analyze {
            single_line = text.replace(['\r', '\n'], "");
            single_line.as_str()
        } else {
            text
        };

        if let Some(input) = self.active_text_input_mut() {
            input.insert_str(text);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.active_text_input_mut() {
            input.backspace();
        }
    }

    pub fn delete(&mut self) {
        if let Some(input) = self.active_text_input_mut() {
            input.delete();
        }
    }

    pub fn clear_input(&mut self) {
        if let Some(input) = self.active_text_input_mut() {
            input.clear();
        }
    }

    pub fn scroll_output_down(&mut self) {
        self.active_output_mut().scroll_down();
    }

    pub fn scroll_output_up(&mut self) {
        self.active_output_mut().scroll_up();
    }

    pub fn page_output_down(&mut self) {
        self.active_output_mut().page_down();
    }

    pub fn page_output_up(&mut self) {
        self.active_output_mut().page_up();
    }

    pub(crate) fn spinner_glyph(&self) -> char {
        spinner_frames()[self.spinner_frame % spinner_frames().len()]
    }

    // None while a choice field (method/action) is active.
    fn active_text_input_mut(&mut self) -> Option<&mut TextInput> {
        if self.focus != Focus::Form {
            return None;
        }

        match self.tab {
            Tab::Encrypt | Tab::Encode => {
                let panel = self.active_panel_mut()?;
                (panel.active_input == InputField::Text).then_some(&mut panel.input)
            }
            Tab::Analyze => {
                (self.analysis_field == AnalysisField::Url).then_some(&mut self.url_input)
            }
        }
    }
}

fn spinner_frames() -> &'static [char] {
    &['|', '/', '-', '\\']
}
