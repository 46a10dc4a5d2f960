// Encrypt/encode panel controller.
// - Owns the input buffer, the selected method, and the last output.
// - Idle until the first run; every run overwrites the output wholesale.
// - Decode runs the inverse transform and leaves the output alone on failure.
use tracing::debug;

use crate::{
    model::{InputField, PanelKind},
    transform::{self, DecodeError, Method},
};

use super::{input::TextInput, tool_output::OutputView};

#[derive(Debug, Clone)]
pub(crate) struct PanelController {
    kind: PanelKind,
    method_index: usize,
    pub(crate) input: TextInput,
    pub(crate) active_input: InputField,
    output: Option<String>,
    pub(crate) output_view: OutputView,
}

impl PanelController {
    pub(crate) fn new(kind: PanelKind, method: Method) -> Self {
        let method_index = kind
            .methods()
            .iter()
            .position(|candidate| *candidate == method)
            .unwrap_or(0);

        Self {
            kind,
            method_index,
            input: TextInput::new(),
            active_input: InputField::Text,
            output: None,
            output_view: OutputView::empty(),
        }
    }

    pub(crate) fn kind(&self) -> PanelKind {
        self.kind
    }

    pub(crate) fn method(&self) -> Method {
        self.kind.methods()[self.method_index]
    }

    pub(crate) fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub(crate) fn select_next_method(&mut self) {
        self.method_index = (self.method_index + 1) % self.kind.methods().len();
    }

    pub(crate) fn select_previous_method(&mut self) {
        let len = self.kind.methods().len();
        self.method_index = (self.method_index + len - 1) % len;
    }

    pub(crate) fn next_input(&mut self) {
        self.active_input = self.active_input.next();
    }

    pub(crate) fn run(&mut self) {
        let method = self.method();
        let output = transform::apply(method, self.input.value());
        debug!(
            panel = self.kind.title(),
            method = method.id(),
            input_chars = self.input.value().chars().count(),
            "transform applied"
        );
        self.show(output);
    }

    pub(crate) fn run_inverse(&mut self) -> Result<(), DecodeError> {
        let method = self.method();
        let output = transform::invert(method, self.input.value())?;
        debug!(panel = self.kind.title(), method = method.id(), "inverse applied");
        self.show(output);
        Ok(())
    }

    fn show(&mut self, output: String) {
        self.output_view.show(&output);
        self.output = Some(output);
    }
}
