mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use output::{format_cards_json, format_cards_plain, print_json, print_plain};
