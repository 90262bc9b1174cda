use std::{env, io};

use crate::cli::io::{LinePrompter, Prompter, ScriptPrompter, ScriptedPrompter};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::session::Explorer;
use crate::cli::ui::test_mode;
use crate::config::{Config, ConfigManager};
use crate::data::TripLoader;
use crate::errors::CliError;

/// Set to read answers line by line from stdin instead of a terminal.
pub const SCRIPT_ENV: &str = "BIKESHARE_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
    TestInputs,
}

impl CliMode {
    pub fn detect() -> Self {
        if env::var_os(test_mode::TEST_INPUTS_ENV).is_some() {
            CliMode::TestInputs
        } else if env::var_os(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

pub fn run_cli() -> Result<(), CliError> {
    let manager = ConfigManager::new();
    let config = manager.load()?;
    persist_defaults(&manager, &config);
    output::set_preferences(OutputPreferences::from_config(&config));

    let loader = TripLoader::new(config.resolved_data_dir());
    let mode = CliMode::detect();
    tracing::info!(
        ?mode,
        config = %manager.path().display(),
        data_dir = %loader.data_dir().display(),
        "starting explorer"
    );

    match mode {
        CliMode::Interactive => run_with(&mut LinePrompter::new()?, loader, &config),
        CliMode::Script => {
            let stdin = io::stdin();
            run_with(&mut ScriptPrompter::new(stdin.lock()), loader, &config)
        }
        CliMode::TestInputs => {
            let inputs = test_mode::inputs_from_env().unwrap_or_default();
            run_with(&mut ScriptedPrompter::new(inputs).echoing(), loader, &config)
        }
    }
}

/// Writes the defaults on first run so there is a file to edit. Failing to
/// write it is not fatal.
fn persist_defaults(manager: &ConfigManager, config: &Config) {
    if manager.path().exists() {
        return;
    }
    match manager.save(config) {
        Ok(()) => tracing::info!(path = %manager.path().display(), "wrote default config"),
        Err(err) => tracing::warn!(error = %err, "could not write default config"),
    }
}

fn run_with<P: Prompter>(
    prompter: &mut P,
    loader: TripLoader,
    config: &Config,
) -> Result<(), CliError> {
    Explorer::new(prompter, loader, config)?.run()
}
