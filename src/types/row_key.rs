use std::collections::HashMap;
use std::fmt;

use super::Company;

/// Stable identity of a directory row.
///
/// Names are the natural key. When a name occurs more than once in the
/// directory, every occurrence is keyed by its position instead so that two
/// rows never share an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
	Name(String),
	Indexed { name: String, index: usize },
}

impl fmt::Display for RowKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Name(name) => f.write_str(name),
			Self::Indexed { name, index } => write!(f, "{name}#{index}"),
		}
	}
}

/// Compute one key per company, in directory order.
#[must_use]
pub fn row_keys(companies: &[Company]) -> Vec<RowKey> {
	let mut counts: HashMap<&str, usize> = HashMap::with_capacity(companies.len());
	for company in companies {
		*counts.entry(company.name.as_str()).or_default() += 1;
	}

	companies
		.iter()
		.enumerate()
		.map(|(index, company)| {
			if counts.get(company.name.as_str()).copied().unwrap_or(0) > 1 {
				RowKey::Indexed {
					name: company.name.clone(),
					index,
				}
			} else {
				RowKey::Name(company.name.clone())
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn named(name: &str) -> Company {
		Company::new(name, "", "", "", "")
	}

	#[test]
	fn unique_names_key_by_name() {
		let keys = row_keys(&[named("Alpha"), named("Beta")]);
		assert_eq!(
			keys,
			vec![RowKey::Name("Alpha".into()), RowKey::Name("Beta".into())]
		);
	}

	#[test]
	fn duplicated_names_fall_back_to_position() {
		let keys = row_keys(&[named("Alpha"), named("Beta"), named("Alpha")]);
		assert_eq!(keys[0].to_string(), "Alpha#0");
		assert_eq!(keys[1].to_string(), "Beta");
		assert_eq!(keys[2].to_string(), "Alpha#2");
		assert_ne!(keys[0], keys[2]);
	}
}
