// Configuration loading.
// - Reads the optional TOML file and merges it onto the defaults.
// - CLI overrides are applied last and win over file values.

use std::{path::Path, time::Duration};

use serde::Deserialize;
use tracing::warn;

use crate::{
    analysis::DEFAULT_DELAY,
    error::{AppError, Result},
    model::{PanelKind, Tab},
    transform::Method,
};

pub const DEFAULT_CONFIG_FILE: &str = "webtools.toml";
pub const DEFAULT_LOG_FILE: &str = "webtools.log";

// Upper bound keeps a typo from freezing the analysis tab for hours.
const MAX_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub analysis_delay: Duration,
    pub encrypt_method: Method,
    pub encode_method: Method,
    pub start_tab: Tab,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis_delay: DEFAULT_DELAY,
            encrypt_method: PanelKind::Encryption.default_method(),
            encode_method: PanelKind::Encoding.default_method(),
            start_tab: Tab::Encrypt,
        }
    }
}

impl Config {
    pub fn method_for(&self, kind: PanelKind) -> Method {
        match kind {
            PanelKind::Encryption => self.encrypt_method,
            PanelKind::Encoding => self.encode_method,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    analysis: Option<AnalysisSection>,
    encrypt: Option<PanelSection>,
    encode: Option<PanelSection>,
    ui: Option<UiSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AnalysisSection {
    delay_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PanelSection {
    default_method: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UiSection {
    start_tab: Option<String>,
}

/// CLI values that take precedence over the file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub delay_ms: Option<u64>,
    pub start_tab: Option<Tab>,
}

/// Loads the config. An explicit path must exist; without one the default
/// file is read when present and silently skipped otherwise.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_file(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.is_file() {
                load_file(path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

pub fn load_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::Config(format!("cannot read '{}': {err}", path.display()))
    })?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<Config> {
    let file_config: FileConfig = toml::from_str(content)?;
    let mut config = Config::default();

    if let Some(analysis) = file_config.analysis
        && let Some(delay_ms) = analysis.delay_ms
    {
        config.analysis_delay = delay_from_millis(delay_ms)?;
    }

    if let Some(id) = file_config.encrypt.and_then(|section| section.default_method) {
        config.encrypt_method = panel_method(PanelKind::Encryption, &id);
    }
    if let Some(id) = file_config.encode.and_then(|section| section.default_method) {
        config.encode_method = panel_method(PanelKind::Encoding, &id);
    }

    if let Some(id) = file_config.ui.and_then(|section| section.start_tab) {
        config.start_tab = Tab::from_id(&id)
            .ok_or_else(|| AppError::Config(format!("unknown start_tab '{id}'")))?;
    }

    Ok(config)
}

pub fn apply_overrides(config: &mut Config, overrides: &Overrides) -> Result<()> {
    if let Some(delay_ms) = overrides.delay_ms {
        config.analysis_delay = delay_from_millis(delay_ms)?;
    }
    if let Some(tab) = overrides.start_tab {
        config.start_tab = tab;
    }
    Ok(())
}

fn delay_from_millis(delay_ms: u64) -> Result<Duration> {
    if delay_ms > MAX_DELAY_MS {
        return Err(AppError::Config(format!(
            "analysis delay {delay_ms}ms exceeds the {MAX_DELAY_MS}ms limit"
        )));
    }
    Ok(Duration::from_millis(delay_ms))
}

// Unknown or foreign methods fall back to the panel default instead of failing
// startup.
fn panel_method(kind: PanelKind, id: &str) -> Method {
    match Method::from_id(id) {
        Some(method) if kind.methods().contains(&method) => method,
        _ => {
            let fallback = kind.default_method();
            warn!(
                method = id,
                fallback = fallback.id(),
                "unsupported default_method for {}",
                kind.title()
            );
            fallback
        }
    }
}
