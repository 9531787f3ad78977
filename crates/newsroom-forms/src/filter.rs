//! Forbidden-word moderation
//!
//! Comment text containing any configured word is rejected with [`WARNING`].

use crate::field::{FieldError, FieldResult};
use newsroom_conf::Settings;

/// Message attached to the `text` field of a rejected comment.
pub const WARNING: &str = "Не ругайтесь!";

/// Words rejected by [`ContentFilter::default`].
pub const BAD_WORDS: &[&str] = newsroom_conf::DEFAULT_FORBIDDEN_WORDS;

/// Scans text for forbidden substrings.
///
/// Matching is an exact substring search by default. With case-insensitive
/// matching enabled both sides are lowercased first.
///
/// # Examples
///
/// ```
/// use newsroom_forms::{ContentFilter, WARNING};
///
/// let filter = ContentFilter::default();
/// assert!(filter.validate("Какой чудесный день!").is_ok());
///
/// let err = filter.validate("Ты редиска").unwrap_err();
/// assert_eq!(err.to_string(), WARNING);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFilter {
	forbidden: Vec<String>,
	case_insensitive: bool,
}

impl ContentFilter {
	pub fn new<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			forbidden: words.into_iter().map(Into::into).collect(),
			case_insensitive: false,
		}
	}

	pub fn case_insensitive(mut self, enabled: bool) -> Self {
		self.case_insensitive = enabled;
		if enabled {
			self.forbidden = self.forbidden.iter().map(|w| w.to_lowercase()).collect();
		}
		self
	}

	/// Builds the filter configured by `settings`.
	pub fn from_settings(settings: &Settings) -> Self {
		Self::new(settings.forbidden_words.iter().cloned())
			.case_insensitive(settings.case_insensitive_filter)
	}

	pub fn forbidden_words(&self) -> &[String] {
		&self.forbidden
	}

	/// Returns the first forbidden word found in `text`.
	pub fn find_forbidden(&self, text: &str) -> Option<&str> {
		let haystack = if self.case_insensitive {
			text.to_lowercase()
		} else {
			text.to_string()
		};
		self.forbidden
			.iter()
			.find(|word| haystack.contains(word.as_str()))
			.map(String::as_str)
	}

	/// Fails with [`WARNING`] when `text` contains a forbidden word.
	pub fn validate(&self, text: &str) -> FieldResult<()> {
		match self.find_forbidden(text) {
			Some(word) => {
				tracing::debug!(word, "Forbidden word in submitted text");
				Err(FieldError::Validation(WARNING.to_string()))
			}
			None => Ok(()),
		}
	}
}

impl Default for ContentFilter {
	fn default() -> Self {
		Self::new(BAD_WORDS.iter().copied())
	}
}
