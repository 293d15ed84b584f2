use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One entry of the published construction company listing.
///
/// Records are taken as published: a missing or `null` field becomes an empty
/// string and non-string scalars keep their JSON text, so a sloppy row still
/// renders instead of failing the whole listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
	#[serde(default, deserialize_with = "lenient_string")]
	pub name: String,
	#[serde(default, deserialize_with = "lenient_string")]
	pub contact: String,
	#[serde(default, deserialize_with = "lenient_string")]
	pub region: String,
	#[serde(default, deserialize_with = "lenient_string")]
	pub industry: String,
	#[serde(default, deserialize_with = "lenient_string")]
	pub grade: String,
}

impl Company {
	/// Create a fully populated record.
	#[must_use]
	pub fn new(
		name: impl Into<String>,
		contact: impl Into<String>,
		region: impl Into<String>,
		industry: impl Into<String>,
		grade: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			contact: contact.into(),
			region: region.into(),
			industry: industry.into(),
			grade: grade.into(),
		}
	}

	/// Dialable `tel:` link for the contact number.
	#[must_use]
	pub fn dial_uri(&self) -> String {
		format!("tel:{}", self.contact)
	}
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	Ok(match value {
		Value::Null => String::new(),
		Value::String(text) => text,
		other => other.to_string(),
	})
}
