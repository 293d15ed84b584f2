//! Collapsed region labels and the on-demand full-text reveal.

use std::borrow::Cow;

/// Appended to a region label that was cut short.
pub const TRUNCATION_MARKER: &str = "...";

/// Region threshold used by the card layout.
pub const DEFAULT_REGION_THRESHOLD: usize = 10;

/// Region threshold used by the compact card layout.
pub const COMPACT_REGION_THRESHOLD: usize = 7;

/// Shorten `region` to its first `threshold` characters plus
/// [`TRUNCATION_MARKER`] when it is longer than `threshold` characters.
///
/// Lengths count characters rather than bytes, so multi-byte addresses are
/// never cut inside a character.
#[must_use]
pub fn short_label(region: &str, threshold: usize) -> Cow<'_, str> {
	match region.char_indices().nth(threshold) {
		None => Cow::Borrowed(region),
		Some((cut, _)) => Cow::Owned(format!("{}{TRUNCATION_MARKER}", &region[..cut])),
	}
}

/// Produces collapsed labels for one presentation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionLabeler {
	threshold: usize,
}

impl RegionLabeler {
	#[must_use]
	pub const fn new(threshold: usize) -> Self {
		Self { threshold }
	}

	#[must_use]
	pub const fn compact() -> Self {
		Self::new(COMPACT_REGION_THRESHOLD)
	}

	#[must_use]
	pub const fn threshold(&self) -> usize {
		self.threshold
	}

	#[must_use]
	pub fn label<'a>(&self, region: &'a str) -> Cow<'a, str> {
		short_label(region, self.threshold)
	}
}

impl Default for RegionLabeler {
	fn default() -> Self {
		Self::new(DEFAULT_REGION_THRESHOLD)
	}
}

/// Whether a full region text is currently on screen.
///
/// Only one region can be revealed at a time for the whole view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Disclosure {
	#[default]
	Collapsed,
	Revealed(String),
}

impl Disclosure {
	/// Show the full `region`, replacing any region already revealed.
	pub fn request(&mut self, region: impl Into<String>) {
		*self = Self::Revealed(region.into());
	}

	/// Return to the collapsed view.
	pub fn dismiss(&mut self) {
		*self = Self::Collapsed;
	}

	#[must_use]
	pub fn revealed(&self) -> Option<&str> {
		match self {
			Self::Collapsed => None,
			Self::Revealed(text) => Some(text),
		}
	}

	#[must_use]
	pub fn is_revealed(&self) -> bool {
		matches!(self, Self::Revealed(_))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const REGION: &str = "Seoul Gangnam-gu Teheran-ro 123";

	#[test]
	fn long_region_is_cut_at_threshold() {
		assert_eq!(short_label(REGION, 10), "Seoul Gang...");
		assert_eq!(short_label(REGION, 7), "Seoul G...");
	}

	#[test]
	fn short_region_is_unchanged() {
		assert_eq!(short_label("Busan", 10), "Busan");
		assert_eq!(short_label("0123456789", 10), "0123456789");
		assert_eq!(short_label("", 10), "");
		assert!(matches!(short_label("Busan", 10), Cow::Borrowed(_)));
	}

	#[test]
	fn label_is_prefix_of_region_plus_marker() {
		for threshold in 0..=REGION.chars().count() + 1 {
			let label = short_label(REGION, threshold);
			if REGION.chars().count() <= threshold {
				assert_eq!(label, REGION);
			} else {
				let body = label
					.strip_suffix(TRUNCATION_MARKER)
					.expect("truncated labels end with the marker");
				assert_eq!(body.chars().count(), threshold);
				assert!(REGION.starts_with(body));
			}
		}
	}

	#[test]
	fn multibyte_regions_are_cut_on_characters() {
		let region = "경기도 수원시 팔달구 인계동";
		assert_eq!(short_label(region, 7), "경기도 수원시...");
		assert_eq!(short_label(region, 10), "경기도 수원시 팔달...");
	}

	#[test]
	fn labeler_applies_configured_threshold() {
		assert_eq!(RegionLabeler::default().label(REGION), "Seoul Gang...");
		assert_eq!(RegionLabeler::compact().label(REGION), "Seoul G...");
		assert_eq!(RegionLabeler::new(100).label(REGION), REGION);
	}

	#[test]
	fn reveal_then_dismiss_collapses() {
		let mut disclosure = Disclosure::default();
		assert_eq!(disclosure, Disclosure::Collapsed);
		disclosure.request(REGION);
		assert_eq!(disclosure, Disclosure::Revealed(REGION.to_string()));
		disclosure.dismiss();
		assert_eq!(disclosure, Disclosure::Collapsed);
	}

	#[test]
	fn latest_reveal_wins() {
		let mut disclosure = Disclosure::default();
		disclosure.request("Busan Haeundae-gu");
		disclosure.request(REGION);
		assert_eq!(disclosure.revealed(), Some(REGION));
	}

	#[test]
	fn dismiss_while_collapsed_stays_collapsed() {
		let mut disclosure = Disclosure::default();
		disclosure.dismiss();
		assert!(!disclosure.is_revealed());
	}
}
