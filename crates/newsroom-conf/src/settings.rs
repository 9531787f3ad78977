//! Site settings
//!
//! Mirrors the subset of a Django `settings.py` the news site depends on.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How many news items the home page shows by default.
pub const DEFAULT_NEWS_COUNT_ON_HOME_PAGE: usize = 10;

/// Path of the login page anonymous users are redirected to.
pub const DEFAULT_LOGIN_URL: &str = "/auth/login/";

/// Words rejected in comment text unless configured otherwise.
pub const DEFAULT_FORBIDDEN_WORDS: &[&str] = &["редиска", "негодяй"];

/// Prefix shared by every environment variable read by [`Settings::from_env`].
const ENV_PREFIX: &str = "NEWSROOM_";

/// Main application settings
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
	/// Debug mode
	#[serde(default)]
	pub debug: bool,

	/// Maximum number of news items listed on the home page
	#[serde(default = "default_news_count")]
	pub news_count_on_home_page: usize,

	/// Login page path used for `?next=` redirects
	#[serde(default = "default_login_url")]
	pub login_url: String,

	/// Substrings rejected in submitted comment text
	#[serde(default = "default_forbidden_words")]
	pub forbidden_words: Vec<String>,

	/// Match forbidden words regardless of letter case
	#[serde(default)]
	pub case_insensitive_filter: bool,
}

fn default_news_count() -> usize {
	DEFAULT_NEWS_COUNT_ON_HOME_PAGE
}

fn default_login_url() -> String {
	DEFAULT_LOGIN_URL.to_string()
}

fn default_forbidden_words() -> Vec<String> {
	DEFAULT_FORBIDDEN_WORDS
		.iter()
		.map(|word| word.to_string())
		.collect()
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			debug: false,
			news_count_on_home_page: default_news_count(),
			login_url: default_login_url(),
			forbidden_words: default_forbidden_words(),
			case_insensitive_filter: false,
		}
	}
}

impl Settings {
	/// Create new settings with defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the home page size
	pub fn with_news_count_on_home_page(mut self, count: usize) -> Self {
		self.news_count_on_home_page = count;
		self
	}

	/// Set the login page path
	pub fn with_login_url(mut self, login_url: impl Into<String>) -> Self {
		self.login_url = login_url.into();
		self
	}

	/// Replace the forbidden word list
	pub fn with_forbidden_words<I, S>(mut self, words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.forbidden_words = words.into_iter().map(Into::into).collect();
		self
	}

	/// Toggle case-insensitive matching of forbidden words
	pub fn with_case_insensitive_filter(mut self, enabled: bool) -> Self {
		self.case_insensitive_filter = enabled;
		self
	}

	/// Validate settings
	///
	/// # Examples
	///
	/// ```
	/// use newsroom_conf::Settings;
	///
	/// assert!(Settings::default().validate().is_ok());
	/// assert!(Settings::default().with_news_count_on_home_page(0).validate().is_err());
	/// assert!(Settings::default().with_login_url("auth/login/").validate().is_err());
	/// ```
	pub fn validate(&self) -> SettingsResult<()> {
		if self.news_count_on_home_page == 0 {
			return Err(SettingsError::ValidationError(
				"NEWS_COUNT_ON_HOME_PAGE must be greater than zero".to_string(),
			));
		}

		if !self.login_url.starts_with('/') {
			return Err(SettingsError::ValidationError(format!(
				"LOGIN_URL must be an absolute path, got '{}'",
				self.login_url
			)));
		}

		if self.forbidden_words.iter().any(|w| w.trim().is_empty()) {
			return Err(SettingsError::ValidationError(
				"FORBIDDEN_WORDS must not contain blank entries".to_string(),
			));
		}

		Ok(())
	}

	/// Load settings from environment variables
	///
	/// Reads `NEWSROOM_DEBUG`, `NEWSROOM_NEWS_COUNT_ON_HOME_PAGE`,
	/// `NEWSROOM_LOGIN_URL`, `NEWSROOM_FORBIDDEN_WORDS` (comma-separated) and
	/// `NEWSROOM_CASE_INSENSITIVE_FILTER`. Unset variables keep their defaults.
	pub fn from_env() -> SettingsResult<Self> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Load settings through an arbitrary variable lookup
	///
	/// `lookup` receives the full variable name, prefix included.
	///
	/// # Examples
	///
	/// ```
	/// use newsroom_conf::Settings;
	///
	/// let settings = Settings::from_lookup(|key| match key {
	///     "NEWSROOM_NEWS_COUNT_ON_HOME_PAGE" => Some("3".to_string()),
	///     _ => None,
	/// })
	/// .unwrap();
	/// assert_eq!(settings.news_count_on_home_page, 3);
	/// ```
	pub fn from_lookup<F>(lookup: F) -> SettingsResult<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));
		let mut settings = Self::default();

		if let Some(debug) = var("DEBUG") {
			settings.debug = parse_bool(&debug);
		}

		if let Some(count) = var("NEWS_COUNT_ON_HOME_PAGE") {
			settings.news_count_on_home_page = count.trim().parse().map_err(|e| {
				SettingsError::ParseError(format!(
					"NEWS_COUNT_ON_HOME_PAGE must be an integer: {}",
					e
				))
			})?;
		}

		if let Some(login_url) = var("LOGIN_URL") {
			settings.login_url = login_url;
		}

		if let Some(words) = var("FORBIDDEN_WORDS") {
			settings.forbidden_words = words
				.split(',')
				.map(|s| s.trim().to_string())
				.filter(|s| !s.is_empty())
				.collect();
		}

		if let Some(flag) = var("CASE_INSENSITIVE_FILTER") {
			settings.case_insensitive_filter = parse_bool(&flag);
		}

		tracing::debug!(
			news_count = settings.news_count_on_home_page,
			login_url = %settings.login_url,
			"Loaded settings from environment"
		);

		Ok(settings)
	}

	/// Load settings from a configuration file
	///
	/// The format is picked from the extension: `.toml` or `.json`.
	pub fn from_file(path: impl Into<PathBuf>) -> SettingsResult<Self> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path).map_err(|e| {
			SettingsError::FileError(format!("Failed to read {}: {}", path.display(), e))
		})?;

		let settings: Settings = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => toml::from_str(&contents)
				.map_err(|e| SettingsError::ParseError(format!("TOML parse error: {}", e)))?,
			Some("json") => serde_json::from_str(&contents)
				.map_err(|e| SettingsError::ParseError(format!("JSON parse error: {}", e)))?,
			_ => {
				return Err(SettingsError::UnsupportedFormat(
					"Supported formats: .toml, .json".to_string(),
				));
			}
		};

		tracing::debug!(path = %path.display(), "Loaded settings from file");
		Ok(settings)
	}
}

fn parse_bool(value: &str) -> bool {
	matches!(
		value.trim().to_lowercase().as_str(),
		"1" | "true" | "yes" | "on"
	)
}

/// Settings error
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("File error: {0}")]
	FileError(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Unsupported format: {0}")]
	UnsupportedFormat(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
