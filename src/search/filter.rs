use crate::types::Company;

/// Case-folded query, computed once per filter pass.
#[derive(Debug, Clone)]
struct Needle(String);

impl Needle {
	fn new(query: &str) -> Self {
		Self(query.to_lowercase())
	}

	fn matches(&self, company: &Company) -> bool {
		self.0.is_empty()
			|| company.name.to_lowercase().contains(&self.0)
			|| company.region.to_lowercase().contains(&self.0)
	}
}

/// Return whether `company` is visible for `query`.
///
/// The query matches when, ignoring case, it is a substring of the company
/// name or of its region. Whitespace is significant.
#[must_use]
pub fn matches(company: &Company, query: &str) -> bool {
	Needle::new(query).matches(company)
}

/// Positions of the companies visible for `query`, in directory order.
#[must_use]
pub fn filter_indices(companies: &[Company], query: &str) -> Vec<usize> {
	let needle = Needle::new(query);
	companies
		.iter()
		.enumerate()
		.filter(|(_, company)| needle.matches(company))
		.map(|(index, _)| index)
		.collect()
}

/// Companies visible for `query`, in directory order.
#[must_use]
pub fn filter_companies<'a>(companies: &'a [Company], query: &str) -> Vec<&'a Company> {
	let needle = Needle::new(query);
	companies
		.iter()
		.filter(|company| needle.matches(company))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn directory() -> Vec<Company> {
		vec![
			Company::new(
				"Alpha Gas Co",
				"010-1111-2222",
				"Seoul Gangnam-gu Teheran-ro 123",
				"gas",
				"A",
			),
			Company::new("Busan Steel", "051-000-0000", "Busan Haeundae-gu", "steel", "B"),
			Company::new("Gamma Build", "02-333-4444", "Incheon Yeonsu-gu", "civil", "C"),
			Company::new("한빛건설", "031-555-6666", "경기도 수원시 팔달구", "civil", "A"),
		]
	}

	#[test]
	fn empty_query_keeps_every_company() {
		let companies = directory();
		assert_eq!(filter_indices(&companies, ""), vec![0, 1, 2, 3]);
		let visible: Vec<Company> = filter_companies(&companies, "")
			.into_iter()
			.cloned()
			.collect();
		assert_eq!(visible, companies);
	}

	#[test]
	fn query_matches_name_or_region_ignoring_case() {
		let companies = directory();
		assert_eq!(filter_indices(&companies, "alpha"), vec![0]);
		assert_eq!(filter_indices(&companies, "BUSAN"), vec![1]);
		assert_eq!(filter_indices(&companies, "gu"), vec![0, 1, 2]);
		assert_eq!(filter_indices(&companies, "수원"), vec![3]);
	}

	#[test]
	fn results_are_sound_complete_and_ordered() {
		let companies = directory();
		for query in ["a", "Gu", "co", "  ", "-ro 1", "xyz", "건설"] {
			let visible = filter_indices(&companies, query);
			let expected: Vec<usize> = companies
				.iter()
				.enumerate()
				.filter(|(_, company)| {
					let needle = query.to_lowercase();
					company.name.to_lowercase().contains(&needle)
						|| company.region.to_lowercase().contains(&needle)
				})
				.map(|(index, _)| index)
				.collect();
			assert_eq!(visible, expected, "query {query:?}");
			assert!(visible.windows(2).all(|pair| pair[0] < pair[1]));
		}
	}

	#[test]
	fn query_case_does_not_change_results() {
		let companies = directory();
		for query in ["alpha", "Seoul", "gAmMa", "HAEUNDAE"] {
			let lower = filter_indices(&companies, &query.to_lowercase());
			let upper = filter_indices(&companies, &query.to_uppercase());
			assert_eq!(lower, upper, "query {query:?}");
			assert_eq!(filter_indices(&companies, query), lower);
		}
	}

	#[test]
	fn whitespace_is_not_trimmed() {
		let companies = directory();
		assert!(filter_indices(&companies, " alpha").is_empty());
		assert_eq!(filter_indices(&companies, "gas co"), vec![0]);
	}

	#[test]
	fn industry_and_contact_are_not_searched() {
		let companies = directory();
		assert_eq!(filter_indices(&companies, "steel"), vec![1]);
		assert!(filter_indices(&companies, "civil").is_empty());
		assert!(filter_indices(&companies, "010").is_empty());
	}
}
