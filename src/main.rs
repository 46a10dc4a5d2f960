mod analysis;
mod app;
mod config;
mod error;
mod events;
mod logging;
mod model;
mod transform;
mod ui;

use std::{path::PathBuf, process::ExitCode, time::Duration};

use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste},
    execute,
};
use tracing::{error, info};

use crate::{
    analysis::{AnalysisAction, AnalysisController, AnalysisState},
    app::App,
    config::{Config, DEFAULT_LOG_FILE, Overrides},
    error::{AppError, Result},
    events::Flow,
    model::Tab,
    transform::{Method, UNSUPPORTED_METHOD},
};

#[derive(Debug, Parser)]
#[command(name = "webtools", version, about = "Webmaster tools in the terminal")]
struct Cli {
    /// Config file (defaults to ./webtools.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Append-only log file
    #[arg(long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive terminal UI (default)
    Tui {
        /// Tab to open first: encrypt, encode or analyze
        #[arg(long)]
        tab: Option<String>,
        /// Simulated analysis delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Run one transform and print the result
    Transform {
        /// md5, base64, reverse, unicode or url
        method: String,
        text: String,
        /// Invert the transform instead of applying it
        #[arg(long)]
        decode: bool,
    },
    /// Run one simulated analysis and print the report
    Analyze {
        /// source, security or deadlink
        action: String,
        url: String,
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}

/// Result of a headless subcommand: what to print and how to exit.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Printed(String),
    Failed { code: u8, message: String },
}

impl Outcome {
    fn emit(self) -> ExitCode {
        match self {
            Self::Printed(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Self::Failed { code, message } => {
                eprintln!("{message}");
                ExitCode::from(code)
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run_cli(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("webtools: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: Cli) -> Result<ExitCode> {
    let command = cli.command.unwrap_or(Command::Tui {
        tab: None,
        delay_ms: None,
    });

    if let Err(err) = logging::init(&cli.log_file) {
        if requires_logging(&command) {
            return Err(err);
        }
        eprintln!("webtools: logging disabled: {err}");
    }

    let mut config = config::load(cli.config.as_deref())?;

    match command {
        Command::Tui { tab, delay_ms } => {
            let start_tab = tab
                .map(|id| {
                    Tab::from_id(&id).ok_or_else(|| AppError::Config(format!("unknown tab '{id}'")))
                })
                .transpose()?;
            config::apply_overrides(
                &mut config,
                &Overrides {
                    delay_ms,
                    start_tab,
                },
            )?;
            run_tui(&config)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Transform {
            method,
            text,
            decode,
        } => Ok(run_transform(&method, &text, decode).emit()),
        Command::Analyze {
            action,
            url,
            delay_ms,
        } => {
            config::apply_overrides(
                &mut config,
                &Overrides {
                    delay_ms,
                    start_tab: None,
                },
            )?;
            Ok(run_analyze(&action, &url, config.analysis_delay).emit())
        }
    }
}

// Headless commands stay usable where the log file cannot be opened.
fn requires_logging(command: &Command) -> bool {
    matches!(command, Command::Tui { .. })
}

fn run_tui(config: &Config) -> Result<()> {
    info!(
        tab = config.start_tab.id(),
        delay_ms = config.analysis_delay.as_millis() as u64,
        "starting tui"
    );
    let mut terminal = ratatui::init();
    let result = execute!(std::io::stdout(), EnableBracketedPaste)
        .map_err(AppError::from)
        .and_then(|()| run(&mut terminal, config));
    let _ = execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::restore();
    if let Err(err) = &result {
        error!("tui exited with error: {err}");
    }
    result
}

fn run(terminal: &mut ratatui::DefaultTerminal, config: &Config) -> Result<()> {
    let mut app = App::new(config);

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        if event::poll(Duration::from_millis(100))?
            && events::handle_event(&mut app, event::read()?) == Flow::Quit
        {
            info!("quit requested");
            return Ok(());
        }

        app.tick();
    }
}

fn run_transform(method: &str, text: &str, decode: bool) -> Outcome {
    if !decode {
        return Outcome::Printed(transform::apply_by_id(method, text));
    }

    let Some(method) = Method::from_id(method) else {
        return Outcome::Printed(UNSUPPORTED_METHOD.to_string());
    };
    match transform::invert(method, text) {
        Ok(decoded) => Outcome::Printed(decoded),
        Err(err) => Outcome::Failed {
            code: 1,
            message: format!("decode failed ({}): {err}", method.label()),
        },
    }
}

fn run_analyze(action: &str, url: &str, delay: Duration) -> Outcome {
    let Some(action) = AnalysisAction::from_id(action) else {
        return Outcome::Failed {
            code: 2,
            message: format!("unknown action '{action}', expected source, security or deadlink"),
        };
    };

    let mut controller = AnalysisController::new(delay);
    if let Err(err) = controller.submit(url, action) {
        return Outcome::Failed {
            code: 1,
            message: err.to_string(),
        };
    }

    match controller.wait() {
        AnalysisState::Done { report, .. } => Outcome::Printed(report.clone()),
        AnalysisState::Failed(err) => Outcome::Failed {
            code: 1,
            message: err.to_string(),
        },
        AnalysisState::Idle | AnalysisState::Loading(_) => Outcome::Failed {
            code: 1,
            message: "analysis did not finish".to_string(),
        },
    }
}
