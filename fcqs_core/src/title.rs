use std::str::FromStr;

use derive_more::Deref;
use derive_more::Display;

use crate::FcqsError;
use crate::FcqsResult;

/// The normalized name of a note.
///
/// A title is the heading text with surrounding whitespace removed. Case and
/// inner spacing are kept, and comparison is an exact string comparison so
/// characters such as `$` or `*` never act as patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display)]
pub struct Title(String);

impl Title {
	/// Build a title from raw text, failing with [`FcqsError::InvalidTitle`]
	/// when nothing but whitespace is left after trimming.
	pub fn new(raw: impl AsRef<str>) -> FcqsResult<Self> {
		let trimmed = raw.as_ref().trim();
		if trimmed.is_empty() {
			return Err(FcqsError::InvalidTitle);
		}

		Ok(Self(trimmed.to_string()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl FromStr for Title {
	type Err = FcqsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

impl AsRef<str> for Title {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl PartialEq<str> for Title {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for Title {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}
