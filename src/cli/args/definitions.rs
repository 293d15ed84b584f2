use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `condir` binary.
#[derive(Parser, Debug)]
#[command(
	name = "condir",
	version,
	long_version = long_version(),
	about = "Searchable terminal directory of construction companies",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CONDIR_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "HOST",
		help = "Host the directory is served from; 'localhost' reads the local copy (default: published site)"
	)]
	pub(crate) host: Option<String>,
	#[arg(
		short = 'b',
		long = "base-url",
		value_name = "URL",
		help = "Read the listing from this base URL or directory (default: chosen by host)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long = "local-base",
		value_name = "PATH",
		help = "Directory holding the development copy (default: current directory)"
	)]
	pub(crate) local_base: Option<PathBuf>,
	#[arg(
		long,
		value_name = "SECONDS",
		help = "Abort the listing request after this many seconds (default: 15)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		short = 'w',
		long = "threshold",
		value_name = "CHARS",
		help = "Shorten region text longer than this many characters (default: 10)"
	)]
	pub(crate) threshold: Option<usize>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the header title (default: Construction Companies)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "print",
		help = "Load, filter by the query and print the matching companies without the interface (default: disabled)"
	)]
	pub(crate) print: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}
