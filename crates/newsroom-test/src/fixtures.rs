//! rstest fixtures
//!
//! [`newsroom`] builds an empty site with two registered users. Rows are
//! created on demand through the async helpers on [`Newsroom`], since the
//! store is async and fixtures are not.

use crate::client::TestClient;
use chrono::{Duration, Utc};
use newsroom_auth::{SessionActorResolver, User, UserId};
use newsroom_conf::Settings;
use newsroom_db::{Comment, InMemoryStore, NewComment, NewNews, News, Store};
use newsroom_views::NewsSite;
use rstest::*;
use std::sync::Arc;

pub const AUTHOR_NAME: &str = "Автор";
pub const READER_NAME: &str = "Читатель";
pub const NEWS_TITLE: &str = "Заголовок";
pub const NEWS_TEXT: &str = "Текст";
pub const COMMENT_TEXT: &str = "Текст комментария";
/// Comments created by [`Newsroom::create_comments`]
pub const COMMENTS_BATCH_SIZE: usize = 10;

/// A site over an in-memory store, with an author and a reader.
pub struct Newsroom {
	pub site: Arc<NewsSite>,
	pub store: Arc<InMemoryStore>,
	pub sessions: Arc<SessionActorResolver>,
	pub author: User,
	pub reader: User,
}

impl Newsroom {
	/// Site built from `settings`.
	///
	/// # Panics
	///
	/// Panics if `settings` do not validate.
	pub fn with_settings(settings: Settings) -> Self {
		let store = Arc::new(InMemoryStore::new());
		let sessions = Arc::new(SessionActorResolver::new());
		let site = NewsSite::new(store.clone(), sessions.clone(), settings)
			.unwrap_or_else(|e| panic!("Invalid test settings: {}", e));
		Self {
			site: Arc::new(site),
			store,
			sessions,
			author: User::new(UserId(1), AUTHOR_NAME),
			reader: User::new(UserId(2), READER_NAME),
		}
	}

	pub fn settings(&self) -> &Settings {
		self.site.settings()
	}

	pub fn client(&self) -> TestClient {
		TestClient::new(self.site.clone(), self.sessions.clone())
	}

	pub fn author_client(&self) -> TestClient {
		let mut client = self.client();
		client.force_login(&self.author);
		client
	}

	pub fn reader_client(&self) -> TestClient {
		let mut client = self.client();
		client.force_login(&self.reader);
		client
	}

	/// One news item with today's date.
	pub async fn news(&self) -> News {
		self.store
			.create_news(NewNews::new(NEWS_TITLE, NEWS_TEXT))
			.await
			.unwrap()
	}

	/// One comment on `news` by the author.
	pub async fn comment(&self, news: &News) -> Comment {
		self.store
			.create_comment(NewComment::new(news.id, self.author.id, COMMENT_TEXT))
			.await
			.unwrap()
	}

	/// One more news item than the home page shows, dated one day apart
	/// going back from today.
	pub async fn create_news(&self) -> Vec<News> {
		let today = Utc::now();
		let items = (0..=self.settings().news_count_on_home_page)
			.map(|index| {
				NewNews::new(format!("Новость {}", index), "Просто текст.")
					.with_date(today - Duration::days(index as i64))
			})
			.collect();
		self.store.bulk_create_news(items).await.unwrap()
	}

	/// Author comments on `news`, dated one day apart going forward from now.
	pub async fn create_comments(&self, news: &News) -> Vec<Comment> {
		let now = Utc::now();
		let items = (0..COMMENTS_BATCH_SIZE)
			.map(|index| {
				NewComment::new(news.id, self.author.id, COMMENT_TEXT)
					.with_created(now + Duration::days(index as i64))
			})
			.collect();
		self.store.bulk_create_comments(items).await.unwrap()
	}
}

#[fixture]
pub fn newsroom() -> Newsroom {
	Newsroom::with_settings(Settings::default())
}

/// Valid comment form data.
#[fixture]
pub fn form_data() -> Vec<(&'static str, &'static str)> {
	vec![("text", "Новый текст")]
}

/// Comment form data containing a forbidden word.
#[fixture]
pub fn bad_words_data() -> Vec<(&'static str, &'static str)> {
	vec![("text", "Какой-то текст, редиска, еще текст")]
}
