//! Form page command (`applyform`)
//!
//! Resolves configuration, installs the log sink and launches the
//! fullscreen form page.

use std::path::PathBuf;
use std::sync::Arc;

use iocraft::prelude::*;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::form::{FormSubmitter, SimulatedOutcome, SimulatedSubmitter};
use crate::locale::Locale;
use crate::logging::init_logging;
use crate::tui::ModalFormPage;

/// Command-line overrides, applied on top of the loaded config
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config: Option<PathBuf>,
    pub delay_ms: Option<u64>,
    pub locale: Option<Locale>,
    pub simulate_failure: bool,
    pub log_file: Option<PathBuf>,
}

impl RunOptions {
    /// Resolve the effective configuration: CLI over env over file over defaults
    pub fn resolve(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(delay_ms) = self.delay_ms {
            config.submit_delay_ms = delay_ms;
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        if self.simulate_failure {
            config.simulate_failure = true;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
        Ok(config)
    }
}

/// Build the submitter described by `config`
pub fn submitter_for(config: &Config) -> SimulatedSubmitter {
    let outcome = if config.simulate_failure {
        SimulatedOutcome::Fail
    } else {
        SimulatedOutcome::Succeed
    };
    SimulatedSubmitter::new(config.submit_delay()).with_outcome(outcome)
}

/// Launch the form page TUI
pub async fn cmd_run(options: RunOptions) -> Result<()> {
    let config = options.resolve()?;
    init_logging(config.log_file.as_deref())?;

    tracing::info!(
        locale = %config.locale,
        delay_ms = config.submit_delay_ms,
        simulate_failure = config.simulate_failure,
        "starting form page"
    );

    let submitter: Arc<dyn FormSubmitter> = Arc::new(submitter_for(&config));
    let locale = config.locale;

    element!(ModalFormPage(submitter: Some(submitter), locale: locale))
        .fullscreen()
        .await
        .map_err(|e| AppError::Tui(e.to_string()))
}
