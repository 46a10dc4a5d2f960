// Analysis tab runtime behavior.
// - Submits the URL field to the analysis controller for a chosen action.
// - Mirrors controller state into the output view and status line.
// - Cancels a pending request on user request.
use crate::analysis::{AnalysisAction, AnalysisState};

use super::App;

impl App {
    pub fn submit_analysis(&mut self, action: AnalysisAction) {
        self.analysis_action = action;
        self.spinner_frame = 0;
        // Failures land in the controller state; the sync below shows them.
        let _ = self.analysis.submit(self.url_input.value(), action);
        self.sync_analysis_output();
    }

    pub fn cancel_analysis(&mut self) {
        if self.analysis.cancel() {
            self.sync_analysis_output();
            self.status_message = "Analysis cancelled.".to_string();
        } else {
            self.status_message = "No running analysis to cancel.".to_string();
        }
    }

    pub(crate) fn analysis_is_running(&self) -> bool {
        self.analysis.is_loading()
    }

    pub(super) fn sync_analysis_output(&mut self) {
        match self.analysis.state() {
            AnalysisState::Idle => {
                self.analysis_output.clear();
            }
            AnalysisState::Loading(request) => {
                self.analysis_output.show(&format!(
                    "Analyzing {} ({})...",
                    request.url,
                    request.action.label()
                ));
                self.status_message = format!("Running {}...", request.action.label());
            }
            AnalysisState::Done { request, report } => {
                self.analysis_output.show(report);
                self.status_message = format!(
                    "{} finished for {}.",
                    request.action.label(),
                    request.url
                );
            }
            AnalysisState::Failed(err) => {
                let message = err.to_string();
                self.analysis_output.show(&message);
                self.status_message = message;
            }
        }
    }
}
