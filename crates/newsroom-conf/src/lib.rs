//! # Newsroom Configuration
//!
//! Django-style settings for the newsroom site.
//!
//! Settings are an explicit value handed to the components that need them
//! (the home listing, the login redirect, the comment filter). Nothing in the
//! workspace reads configuration from global state.
//!
//! ## Sources
//!
//! - [`Settings::default`]: built-in defaults
//! - [`Settings::from_env`]: `NEWSROOM_*` environment variables
//! - [`Settings::from_file`]: a `.toml` or `.json` file
//!
//! ```
//! use newsroom_conf::Settings;
//!
//! let settings = Settings::default().with_news_count_on_home_page(5);
//! assert_eq!(settings.news_count_on_home_page, 5);
//! assert!(settings.validate().is_ok());
//! ```

pub mod settings;

pub use settings::{
	DEFAULT_FORBIDDEN_WORDS, DEFAULT_LOGIN_URL, DEFAULT_NEWS_COUNT_ON_HOME_PAGE, Settings,
	SettingsError, SettingsResult,
};
