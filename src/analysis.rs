// Website analysis stub controller.
// - Validates the target URL and builds a request for the chosen action.
// - Runs the simulated network delay on a cancellable worker thread.
// - Produces placeholder reports; no request is ever sent to the target.
// - A new submission cancels the pending one, so the latest request wins.
use std::{
    io,
    sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError},
    thread,
    time::Duration,
};

use thiserror::Error;
use tracing::{debug, info, warn};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisAction {
    Source,
    Security,
    DeadLink,
}

impl AnalysisAction {
    pub const ALL: [Self; 3] = [Self::Source, Self::Security, Self::DeadLink];

    pub fn id(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Security => "security",
            Self::DeadLink => "deadlink",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Source => "View source",
            Self::Security => "Security check",
            Self::DeadLink => "Dead link check",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|action| action.id().eq_ignore_ascii_case(id))
    }

    pub fn next(self) -> Self {
        match self {
            Self::Source => Self::Security,
            Self::Security => Self::DeadLink,
            Self::DeadLink => Self::Source,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Source => Self::DeadLink,
            Self::Security => Self::Source,
            Self::DeadLink => Self::Security,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Please enter a URL to analyze.")]
    EmptyUrl,

    #[error("Analysis task ended unexpectedly.")]
    WorkerGone,

    #[error("Failed to start analysis task: {0}")]
    Spawn(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub url: String,
    pub action: AnalysisAction,
}

impl AnalysisRequest {
    pub fn new(url: &str, action: AnalysisAction) -> Result<Self, AnalysisError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AnalysisError::EmptyUrl);
        }

        Ok(Self {
            url: url.to_string(),
            action,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisState {
    Idle,
    Loading(AnalysisRequest),
    Done {
        request: AnalysisRequest,
        report: String,
    },
    Failed(AnalysisError),
}

/// Placeholder report for a request. `source` yields a canned HTML document,
/// the other actions a one-line summary plus a note that nothing was checked.
pub fn render_report(request: &AnalysisRequest) -> String {
    let url = &request.url;
    match request.action {
        AnalysisAction::Source => format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             \x20 <meta charset=\"utf-8\">\n\
             \x20 <title>{url}</title>\n\
             </head>\n\
             <body>\n\
             \x20 <!-- simulated source of {url}; no request was made -->\n\
             \x20 <h1>{url}</h1>\n\
             </body>\n\
             </html>"
        ),
        AnalysisAction::Security => format!(
            "Analysis result: security - {url}\n\
             No security scan was performed. This is placeholder output."
        ),
        AnalysisAction::DeadLink => format!(
            "Analysis result: deadlink - {url}\n\
             No links were crawled. This is placeholder output."
        ),
    }
}

struct PendingAnalysis {
    id: u64,
    request: AnalysisRequest,
    cancel_tx: Sender<()>,
    report_rx: Receiver<String>,
}

pub struct AnalysisController {
    state: AnalysisState,
    delay: Duration,
    next_id: u64,
    pending: Option<PendingAnalysis>,
}

impl AnalysisController {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: AnalysisState::Idle,
            delay,
            next_id: 1,
            pending: None,
        }
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, AnalysisState::Loading(_))
    }

    /// Starts a request. Any pending request is cancelled first; its worker
    /// exits without reporting and a report it already produced is dropped
    /// with its channel. An empty URL fails immediately without loading.
    pub fn submit(&mut self, url: &str, action: AnalysisAction) -> Result<(), AnalysisError> {
        self.cancel_pending();

        let request = match AnalysisRequest::new(url, action) {
            Ok(request) => request,
            Err(err) => {
                warn!(action = action.id(), "analysis rejected: {err}");
                self.state = AnalysisState::Failed(err.clone());
                return Err(err);
            }
        };

        let id = self.next_id;
        self.next_id += 1;

        let (cancel_tx, cancel_rx) = mpsc::channel();
        let (report_tx, report_rx) = mpsc::channel();
        if let Err(err) = spawn_worker(request.clone(), self.delay, cancel_rx, report_tx) {
            let err = AnalysisError::Spawn(err.to_string());
            warn!(id, "{err}");
            self.state = AnalysisState::Failed(err.clone());
            return Err(err);
        }

        info!(
            id,
            url = %request.url,
            action = request.action.id(),
            delay_ms = self.delay.as_millis() as u64,
            "analysis started"
        );
        self.state = AnalysisState::Loading(request.clone());
        self.pending = Some(PendingAnalysis {
            id,
            request,
            cancel_tx,
            report_rx,
        });
        Ok(())
    }

    /// Cancels the pending request, returning to idle. Returns false when
    /// nothing was loading.
    pub fn cancel(&mut self) -> bool {
        if !self.cancel_pending() {
            return false;
        }
        self.state = AnalysisState::Idle;
        true
    }

    /// Non-blocking check for the pending report. Returns true when the state
    /// changed.
    pub fn poll(&mut self) -> bool {
        let Some(pending) = self.pending.as_ref() else {
            return false;
        };

        let outcome = match pending.report_rx.try_recv() {
            Ok(report) => Ok(report),
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(AnalysisError::WorkerGone),
        };

        if let Some(pending) = self.pending.take() {
            self.finish(pending, outcome);
        }
        true
    }

    /// Blocks until the pending request resolves.
    pub fn wait(&mut self) -> &AnalysisState {
        if let Some(pending) = self.pending.take() {
            let outcome = pending
                .report_rx
                .recv()
                .map_err(|_| AnalysisError::WorkerGone);
            self.finish(pending, outcome);
        }
        &self.state
    }

    fn finish(&mut self, pending: PendingAnalysis, outcome: Result<String, AnalysisError>) {
        self.state = match outcome {
            Ok(report) => {
                info!(id = pending.id, url = %pending.request.url, "analysis finished");
                AnalysisState::Done {
                    request: pending.request,
                    report,
                }
            }
            Err(err) => {
                warn!(id = pending.id, "{err}");
                AnalysisState::Failed(err)
            }
        };
    }

    fn cancel_pending(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };

        // The worker may already have exited; a failed send is fine.
        let _ = pending.cancel_tx.send(());
        debug!(id = pending.id, url = %pending.request.url, "analysis cancelled");
        true
    }
}

fn spawn_worker(
    request: AnalysisRequest,
    delay: Duration,
    cancel_rx: Receiver<()>,
    report_tx: Sender<String>,
) -> io::Result<()> {
    thread::Builder::new()
        .name("analysis-stub".to_string())
        .spawn(move || match cancel_rx.recv_timeout(delay) {
            Err(RecvTimeoutError::Timeout) => {
                let _ = report_tx.send(render_report(&request));
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {}
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    fn poll_until_settled(controller: &mut AnalysisController) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while controller.is_loading() && Instant::now() < deadline {
            controller.poll();
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn empty_url_fails_without_loading() {
        let mut controller = AnalysisController::new(Duration::from_millis(10));

        for url in ["", "   ", "\t\n"] {
            let result = controller.submit(url, AnalysisAction::Source);
            assert_eq!(result, Err(AnalysisError::EmptyUrl));
            assert_eq!(
                controller.state(),
                &AnalysisState::Failed(AnalysisError::EmptyUrl)
            );
            assert!(!controller.is_loading());
            assert!(!controller.poll());
        }
    }

    #[test]
    fn validation_message_is_user_facing() {
        assert_eq!(
            AnalysisError::EmptyUrl.to_string(),
            "Please enter a URL to analyze."
        );
    }

    #[test]
    fn source_report_contains_exact_url() {
        let url = "https://www.example.com/path?q=1";
        let mut controller = AnalysisController::new(Duration::ZERO);
        controller.submit(url, AnalysisAction::Source).unwrap();

        match controller.wait() {
            AnalysisState::Done { request, report } => {
                assert_eq!(request.url, url);
                assert!(report.contains(url));
                assert!(report.starts_with("<!DOCTYPE html>"));
            }
            other => panic!("expected done, got {other:?}"),
        }
    }

    #[test]
    fn summary_reports_embed_action_and_url() {
        for action in [AnalysisAction::Security, AnalysisAction::DeadLink] {
            let request = AnalysisRequest::new("example.org", action).unwrap();
            let report = render_report(&request);
            assert!(report.starts_with(&format!(
                "Analysis result: {} - example.org",
                action.id()
            )));
        }
    }

    #[test]
    fn request_trims_surrounding_whitespace() {
        let request = AnalysisRequest::new("  https://a.test  ", AnalysisAction::Security).unwrap();
        assert_eq!(request.url, "https://a.test");
    }

    #[test]
    fn stays_loading_until_delay_elapses() {
        let mut controller = AnalysisController::new(Duration::from_secs(30));
        controller
            .submit("https://slow.test", AnalysisAction::DeadLink)
            .unwrap();

        assert!(controller.is_loading());
        assert!(!controller.poll());
        assert!(controller.cancel());
    }

    #[test]
    fn poll_resolves_after_delay() {
        let mut controller = AnalysisController::new(Duration::from_millis(20));
        controller
            .submit("https://a.test", AnalysisAction::Security)
            .unwrap();
        poll_until_settled(&mut controller);

        assert!(matches!(
            controller.state(),
            AnalysisState::Done { request, .. } if request.url == "https://a.test"
        ));
    }

    #[test]
    fn rapid_double_submission_keeps_latest_request() {
        let mut controller = AnalysisController::new(Duration::from_millis(50));
        controller
            .submit("https://first.test", AnalysisAction::Source)
            .unwrap();
        controller
            .submit("https://second.test", AnalysisAction::Source)
            .unwrap();
        poll_until_settled(&mut controller);

        match controller.state() {
            AnalysisState::Done { request, report } => {
                assert_eq!(request.url, "https://second.test");
                assert!(report.contains("https://second.test"));
                assert!(!report.contains("https://first.test"));
            }
            other => panic!("expected done, got {other:?}"),
        }
    }

    #[test]
    fn stale_report_is_discarded_after_resubmit() {
        let mut controller = AnalysisController::new(Duration::ZERO);
        controller
            .submit("https://stale.test", AnalysisAction::Security)
            .unwrap();
        // Let the first worker finish without polling its report.
        thread::sleep(Duration::from_millis(50));
        controller
            .submit("https://fresh.test", AnalysisAction::Security)
            .unwrap();

        match controller.wait() {
            AnalysisState::Done { request, .. } => assert_eq!(request.url, "https://fresh.test"),
            other => panic!("expected done, got {other:?}"),
        }
    }

    #[test]
    fn cancel_returns_to_idle_and_drops_report() {
        let mut controller = AnalysisController::new(Duration::from_millis(20));
        controller
            .submit("https://a.test", AnalysisAction::Source)
            .unwrap();
        assert!(controller.cancel());
        assert_eq!(controller.state(), &AnalysisState::Idle);

        thread::sleep(Duration::from_millis(60));
        assert!(!controller.poll());
        assert_eq!(controller.state(), &AnalysisState::Idle);
        assert!(!controller.cancel());
    }

    #[test]
    fn error_state_recovers_on_next_request() {
        let mut controller = AnalysisController::new(Duration::ZERO);
        let _ = controller.submit("", AnalysisAction::Source);
        controller
            .submit("https://ok.test", AnalysisAction::DeadLink)
            .unwrap();

        assert!(matches!(controller.wait(), AnalysisState::Done { .. }));
    }

    fn vanished_worker(controller: &mut AnalysisController) {
        let request = AnalysisRequest::new("https://gone.test", AnalysisAction::Security).unwrap();
        let (cancel_tx, _cancel_rx) = mpsc::channel();
        let (report_tx, report_rx) = mpsc::channel::<String>();
        drop(report_tx);

        controller.state = AnalysisState::Loading(request.clone());
        controller.pending = Some(PendingAnalysis {
            id: 99,
            request,
            cancel_tx,
            report_rx,
        });
    }

    #[test]
    fn poll_reports_worker_that_exits_without_answering() {
        let mut controller = AnalysisController::new(Duration::ZERO);
        vanished_worker(&mut controller);

        assert!(controller.poll());
        assert_eq!(
            controller.state(),
            &AnalysisState::Failed(AnalysisError::WorkerGone)
        );
        assert_eq!(
            AnalysisError::WorkerGone.to_string(),
            "Analysis task ended unexpectedly."
        );
        assert!(!controller.is_loading());
    }

    #[test]
    fn wait_reports_worker_that_exits_without_answering() {
        let mut controller = AnalysisController::new(Duration::ZERO);
        vanished_worker(&mut controller);

        assert_eq!(
            controller.wait(),
            &AnalysisState::Failed(AnalysisError::WorkerGone)
        );
    }

    #[test]
    fn action_ids_resolve_and_cycle() {
        for action in AnalysisAction::ALL {
            assert_eq!(AnalysisAction::from_id(action.id()), Some(action));
            assert_eq!(action.next().previous(), action);
        }
        assert_eq!(AnalysisAction::from_id("ping"), None);
    }
}
