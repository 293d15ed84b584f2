//! Global logger installation.
//!
//! The interactive interface captures records with `tui-logger` so they can be
//! shown in the log pane without tearing the alternate screen. Print mode
//! writes to stderr through `env_logger`, filtered by `RUST_LOG`.

use anyhow::{Result, anyhow};
use log::LevelFilter;

/// Where log records end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
	Interface,
	Stderr,
}

/// Install the global logger for `target`. Call once, before loading starts.
pub fn initialize(target: LogTarget) -> Result<()> {
	match target {
		LogTarget::Interface => {
			tui_logger::init_logger(LevelFilter::Debug)
				.map_err(|err| anyhow!("failed to install log capture: {err}"))?;
			tui_logger::set_default_level(LevelFilter::Info);
		}
		LogTarget::Stderr => {
			env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
				.target(env_logger::Target::Stderr)
				.try_init()
				.map_err(|err| anyhow!("failed to install stderr logger: {err}"))?;
		}
	}
	Ok(())
}

/// Move captured records into the log pane buffer.
pub fn pump() {
	tui_logger::move_events();
}
