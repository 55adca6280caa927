// src/setup.rs

use services::{ContactForm, HistoryError, JsonFileHistory, MemoryHistory};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, PartialEq, Eq)]
pub(super) struct AppConfig {
    pub history_path: Option<PathBuf>,
    pub log_json: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("CONTACT_FORM_HISTORY").ok(),
            std::env::var("CONTACT_FORM_LOG_JSON").ok(),
        )
    }

    /// Build from raw `CONTACT_FORM_HISTORY` and `CONTACT_FORM_LOG_JSON` values
    pub fn from_values(history: Option<String>, log_json: Option<String>) -> Self {
        let history_path = history.filter(|s| !s.is_empty()).map(PathBuf::from);
        let log_json = log_json
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        AppConfig {
            history_path,
            log_json,
        }
    }
}

/// Logs go to stderr; stdout carries responses only
pub(super) fn init_tracing(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

pub(super) fn set_up_form(config: &AppConfig) -> Result<ContactForm, HistoryError> {
    let form = match &config.history_path {
        Some(path) => {
            let form = ContactForm::new().with_history(Box::new(JsonFileHistory::new(path)))?;
            tracing::info!(path = %path.display(), "history opened");
            form
        }
        None => {
            tracing::info!("no CONTACT_FORM_HISTORY set, keeping history in memory");
            ContactForm::new().with_history(Box::new(MemoryHistory::new()))?
        }
    };
    Ok(form)
}
