use anyhow::Result;
use condir::{BrowseOutcome, Company, RegionLabeler};
use serde_json::json;

/// Print a plain-text representation of what the user left the interface with.
pub(crate) fn print_plain(outcome: &BrowseOutcome) {
	if !outcome.accepted {
		println!("Browsing cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(company) => println!("{}", format_selection(company)),
		None => println!("No selection"),
	}
}

fn format_selection(company: &Company) -> String {
	format!(
		"{} ({}) {} {}",
		company.name,
		company.grade,
		company.dial_uri(),
		company.region
	)
}

/// Format the browse outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": outcome.selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the browse outcome.
pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// One card per line, regions shortened the way the interface shows them.
pub(crate) fn format_cards_plain(companies: &[&Company], labeler: RegionLabeler) -> String {
	companies
		.iter()
		.map(|company| {
			format!(
				"[{}] {} | {} | {}",
				company.grade,
				company.name,
				company.contact,
				labeler.label(&company.region)
			)
		})
		.collect::<Vec<_>>()
		.join("\n")
}

/// Matching companies as a JSON array with every field intact.
pub(crate) fn format_cards_json(companies: &[&Company]) -> Result<String> {
	Ok(serde_json::to_string_pretty(companies)?)
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	fn alpha() -> Company {
		Company::new(
			"Alpha Gas Co",
			"010-1111-2222",
			"Seoul Gangnam-gu Teheran-ro 123",
			"gas",
			"A",
		)
	}

	fn beta() -> Company {
		Company::new("Beta Steel", "02-333-4444", "Busan", "steel", "B")
	}

	#[test]
	fn plain_cards_shorten_long_regions() {
		let alpha = alpha();
		let beta = beta();
		let text = format_cards_plain(&[&alpha, &beta], RegionLabeler::default());
		insta::assert_snapshot!(text, @r"
[A] Alpha Gas Co | 010-1111-2222 | Seoul Gang...
[B] Beta Steel | 02-333-4444 | Busan
");
	}

	#[test]
	fn plain_cards_follow_threshold() {
		let alpha = alpha();
		let text = format_cards_plain(&[&alpha], RegionLabeler::compact());
		insta::assert_snapshot!(text, @"[A] Alpha Gas Co | 010-1111-2222 | Seoul G...");
	}

	#[test]
	fn no_matches_render_as_empty_text() {
		assert_eq!(format_cards_plain(&[], RegionLabeler::default()), "");
	}

	#[test]
	fn json_cards_keep_full_region() {
		let alpha = alpha();
		let json = format_cards_json(&[&alpha]).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value[0]["name"], "Alpha Gas Co");
		assert_eq!(value[0]["region"], "Seoul Gangnam-gu Teheran-ro 123");
		assert_eq!(value[0]["grade"], "A");
	}

	#[test]
	fn json_format_includes_company_selection() {
		let outcome = BrowseOutcome {
			accepted: true,
			query: "gas".into(),
			selection: Some(alpha()),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["selection"]["contact"], "010-1111-2222");
	}

	#[test]
	fn cancelled_outcome_has_null_selection() {
		let outcome = BrowseOutcome {
			accepted: false,
			query: String::new(),
			selection: None,
		};
		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert!(value["selection"].is_null());
	}

	#[test]
	fn selection_line_carries_dial_link() {
		insta::assert_snapshot!(
			format_selection(&alpha()),
			@"Alpha Gas Co (A) tel:010-1111-2222 Seoul Gangnam-gu Teheran-ro 123"
		);
	}
}
