mod cli;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::{OutputFormat, format_cards_json, format_cards_plain, parse_cli, print_json, print_plain};
use condir::logging::{self, LogTarget};
use condir::ui::style;
use settings::ResolvedConfig;
use workflow::{BrowseWorkflow, PrintWorkflow};

fn main() -> Result<ExitCode> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in style::names() {
			println!("{name}");
		}
		return Ok(ExitCode::SUCCESS);
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.print {
		logging::initialize(LogTarget::Stderr)?;
		return run_print(cli.output, &resolved);
	}

	logging::initialize(LogTarget::Interface)?;
	run_browse(cli.output, resolved)?;
	Ok(ExitCode::SUCCESS)
}

/// Run the interactive view and print what the user accepted.
fn run_browse(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = BrowseWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

/// Print the companies matching the configured query.
///
/// A failed load prints only the user-facing message.
fn run_print(format: OutputFormat, settings: &ResolvedConfig) -> Result<ExitCode> {
	let workflow = PrintWorkflow::from_config(settings)?;
	let labeler = workflow.labeler();
	let companies = match workflow.run() {
		Ok(companies) => companies,
		Err(err) => {
			eprintln!("{err}");
			return Ok(ExitCode::FAILURE);
		}
	};

	let cards: Vec<_> = companies.iter().collect();
	match format {
		OutputFormat::Plain => {
			let text = format_cards_plain(&cards, labeler);
			if !text.is_empty() {
				println!("{text}");
			}
		}
		OutputFormat::Json => println!("{}", format_cards_json(&cards)?),
	}

	Ok(ExitCode::SUCCESS)
}
