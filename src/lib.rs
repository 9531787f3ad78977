//! # Newsroom
//!
//! A news site where registered users comment on news items and moderate
//! only their own comments.
//!
//! ## Crates
//!
//! - [`conf`]: site settings
//! - [`auth`]: actors, the actor resolver and access rules
//! - [`forms`]: the comment form and the forbidden-word filter
//! - [`db`]: news and comment models, ordering and storage
//! - [`views`]: routes, page handlers and the submission flow
//! - `test` (feature `test-utils`): test client, fixtures and assertions
//!
//! ## Quick Start
//!
//! ```rust
//! use http::StatusCode;
//! use newsroom::prelude::*;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = Arc::new(InMemoryStore::new());
//! let sessions = Arc::new(SessionActorResolver::new());
//! let site = NewsSite::new(store.clone(), sessions.clone(), Settings::default()).unwrap();
//!
//! let news = store.create_news(NewNews::new("Заголовок", "Текст")).await.unwrap();
//! let key = sessions.login(User::new(UserId(1), "Автор"));
//!
//! let mut form = std::collections::HashMap::new();
//! form.insert("text".to_string(), "Текст комментария".to_string());
//! let request = Request::post(Route::Detail(news.id).reverse(), form).with_session(key);
//!
//! let response = site.handle(request).await;
//! assert_eq!(response.status, StatusCode::FOUND);
//! assert_eq!(store.count_comments().await.unwrap(), 1);
//! # }
//! ```

pub use newsroom_auth as auth;
pub use newsroom_conf as conf;
pub use newsroom_db as db;
pub use newsroom_forms as forms;
pub use newsroom_views as views;

#[cfg(feature = "test-utils")]
pub use newsroom_test as test;

/// Commonly used types
pub mod prelude {
	pub use newsroom_auth::{
		Actor, ActorResolver, Decision, Mutation, SessionActorResolver, User, UserId, can_mutate,
		can_view,
	};
	pub use newsroom_conf::Settings;
	pub use newsroom_db::{
		Comment, CommentId, InMemoryStore, NewComment, NewNews, News, NewsId, Store,
	};
	pub use newsroom_forms::{CommentForm, ContentFilter, WARNING};
	pub use newsroom_views::{NewsSite, Request, Response, Route, SubmissionOutcome};
}
