use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail, ensure};
use config::{Config, ConfigError, File};
use serde::Deserialize;

use condir::app_dirs;
use condir::directory::{DeployTarget, Endpoint, EndpointOptions};
use condir::disclosure::DEFAULT_REGION_THRESHOLD;
use condir::ui::style;
use condir::ui::{DEFAULT_TIMEOUT, UiConfig};

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	source: SourceSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SourceSection {
	host: Option<String>,
	base_url: Option<String>,
	local_base: Option<PathBuf>,
	published_base: Option<String>,
	resource_path: Option<String>,
	timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	region_threshold: Option<usize>,
	title: Option<String>,
	initial_query: Option<String>,
	theme: Option<String>,
}

pub struct ResolvedConfig {
	pub options: EndpointOptions,
	pub endpoint: Endpoint,
	pub timeout: Duration,
	pub region_threshold: usize,
	pub initial_query: String,
	pub theme: String,
	pub ui: UiConfig,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		print!("{}", self.summary());
	}

	fn summary(&self) -> String {
		let mut lines = vec!["Effective configuration:".to_string()];
		lines.push(format!(
			"  Host: {}",
			self.options.host.as_deref().unwrap_or("(none)")
		));
		lines.push(format!(
			"  Target: {}",
			match self.options.target() {
				DeployTarget::Development => "development",
				DeployTarget::Published => "published",
			}
		));
		if let Some(base) = &self.options.base_url {
			lines.push(format!("  Base override: {base}"));
		}
		lines.push(format!("  Listing: {}", self.endpoint));
		lines.push(format!("  Timeout: {}s", self.timeout.as_secs()));
		lines.push(format!("  Region threshold: {}", self.region_threshold));
		lines.push(format!("  Title: {}", self.ui.title));
		lines.push(format!("  UI theme: {}", self.theme));
		if !self.initial_query.is_empty() {
			lines.push(format!("  Initial query: {}", self.initial_query));
		}
		let mut text = lines.join("\n");
		text.push('\n');
		text
	}
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	load_with_env(cli, environment())
}

fn load_with_env(cli: &CliArgs, env: config::Environment) -> Result<ResolvedConfig> {
	let builder = build_config(cli, env)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

/// `CONDIR_<SECTION>__<KEY>`, e.g. `CONDIR_SOURCE__HOST`.
fn environment() -> config::Environment {
	config::Environment::with_prefix("condir")
		.prefix_separator("_")
		.separator("__")
		.try_parsing(true)
}

fn build_config(cli: &CliArgs, env: config::Environment) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(env);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".condir.toml"));
		files.push(current_dir.join("condir.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(host) = cli.host.clone() {
			self.source.host = Some(host);
		}
		if let Some(base) = cli.base_url.clone() {
			self.source.base_url = Some(base);
		}
		if let Some(dir) = cli.local_base.clone() {
			self.source.local_base = Some(dir);
		}
		if let Some(secs) = cli.timeout {
			self.source.timeout_secs = Some(secs);
		}

		if let Some(threshold) = cli.threshold {
			self.ui.region_threshold = Some(threshold);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let defaults = EndpointOptions::default();
		let options = EndpointOptions {
			host: non_blank(self.source.host),
			base_url: non_blank(self.source.base_url),
			local_base: self.source.local_base.unwrap_or(defaults.local_base),
			published_base: non_blank(self.source.published_base)
				.unwrap_or(defaults.published_base),
			resource_path: non_blank(self.source.resource_path)
				.unwrap_or(defaults.resource_path),
		};
		let endpoint = options
			.resolve()
			.context("failed to resolve the listing location")?;

		let timeout = match self.source.timeout_secs {
			Some(secs) => {
				ensure!(secs > 0, "source.timeout_secs must be at least 1");
				Duration::from_secs(secs)
			}
			None => DEFAULT_TIMEOUT,
		};

		let region_threshold = self
			.ui
			.region_threshold
			.unwrap_or(DEFAULT_REGION_THRESHOLD);
		ensure!(region_threshold > 0, "ui.region_threshold must be at least 1");

		let theme = match non_blank(self.ui.theme) {
			Some(name) => {
				let name = name.to_ascii_lowercase();
				if style::by_name(&name).is_none() {
					bail!(
						"unknown theme '{name}' (available: {})",
						style::names().join(", ")
					);
				}
				name
			}
			None => style::names()
				.first()
				.map(|name| (*name).to_string())
				.unwrap_or_default(),
		};

		let mut ui = UiConfig::default();
		if let Some(title) = non_blank(self.ui.title) {
			ui = ui.with_title(title);
		}

		Ok(ResolvedConfig {
			options,
			endpoint,
			timeout,
			region_threshold,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme,
			ui,
		})
	}
}

fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	fn cli(args: &[&str]) -> CliArgs {
		let mut argv = vec!["condir", "--no-config"];
		argv.extend_from_slice(args);
		CliArgs::try_parse_from(argv).expect("arguments parse")
	}

	#[test]
	fn defaults_read_published_listing() {
		let resolved = RawConfig::default().resolve().expect("resolve");
		assert_eq!(
			resolved.endpoint.to_string(),
			"https://gard2np.github.io/info/data/companies.json"
		);
		assert_eq!(resolved.timeout, DEFAULT_TIMEOUT);
		assert_eq!(resolved.region_threshold, 10);
		assert_eq!(resolved.theme, "slate");
		assert_eq!(resolved.ui.title, "Construction Companies");
	}

	#[test]
	fn file_values_are_overridden_by_flags() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("extra.toml");
		fs::write(
			&path,
			"[source]\nhost = \"localhost\"\nlocal_base = \"site\"\ntimeout_secs = 3\n\n[ui]\nregion_threshold = 7\ntitle = \"Directory\"\n",
		)
		.expect("write config");
		let path = path.to_string_lossy().into_owned();

		let args = cli(&["-c", &path, "--threshold", "12", "--query", "gas"]);
		let resolved = load(&args).expect("load");

		assert_eq!(resolved.options.target(), DeployTarget::Development);
		assert_eq!(
			resolved.endpoint,
			Endpoint::File(PathBuf::from("site/data/companies.json"))
		);
		assert_eq!(resolved.timeout, Duration::from_secs(3));
		assert_eq!(resolved.region_threshold, 12);
		assert_eq!(resolved.ui.title, "Directory");
		assert_eq!(resolved.initial_query, "gas");
	}

	#[test]
	fn explicit_base_beats_host_switch() {
		let args = cli(&["--host", "localhost", "--base-url", "https://mirror.test/info/"]);
		let resolved = load(&args).expect("load");
		assert_eq!(
			resolved.endpoint.to_string(),
			"https://mirror.test/info/data/companies.json"
		);
	}

	#[test]
	fn missing_extra_file_is_an_error() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("absent.toml");
		let path = path.to_string_lossy().into_owned();
		assert!(load(&cli(&["-c", &path])).is_err());
	}

	fn fake_env(vars: &[(&str, &str)]) -> config::Environment {
		let mut map = config::Map::new();
		for (key, value) in vars {
			map.insert((*key).to_string(), (*value).to_string());
		}
		environment().source(Some(map))
	}

	#[test]
	fn environment_selects_development_host() {
		let env = fake_env(&[
			("CONDIR_SOURCE__HOST", "localhost"),
			("CONDIR_UI__REGION_THRESHOLD", "7"),
		]);
		let resolved = load_with_env(&cli(&[]), env).expect("load");
		assert_eq!(resolved.options.target(), DeployTarget::Development);
		assert_eq!(
			resolved.endpoint,
			Endpoint::File(PathBuf::from("./data/companies.json"))
		);
		assert_eq!(resolved.region_threshold, 7);
	}

	#[test]
	fn flags_override_environment() {
		let env = fake_env(&[("CONDIR_SOURCE__HOST", "localhost")]);
		let resolved =
			load_with_env(&cli(&["--host", "gard2np.github.io"]), env).expect("load");
		assert_eq!(resolved.options.target(), DeployTarget::Published);
	}

	#[test]
	fn rejects_unknown_theme_and_zero_threshold() {
		assert!(load(&cli(&["--theme", "neon"])).is_err());
		assert!(load(&cli(&["--threshold", "0"])).is_err());
		assert!(load(&cli(&["--timeout", "0"])).is_err());
	}

	#[test]
	fn theme_names_are_case_insensitive() {
		let resolved = load(&cli(&["--theme", "Light"])).expect("load");
		assert_eq!(resolved.theme, "light");
	}

	#[test]
	fn summary_names_listing_and_threshold() {
		let resolved = load(&cli(&["--query", "steel"])).expect("load");
		let summary = resolved.summary();
		assert!(summary.starts_with("Effective configuration:\n"));
		assert!(summary.contains("  Target: published\n"));
		assert!(summary.contains("  Listing: https://gard2np.github.io/info/data/companies.json\n"));
		assert!(summary.contains("  Region threshold: 10\n"));
		assert!(summary.contains("  Initial query: steel\n"));
	}
}
