//! # Newsroom DB
//!
//! Models, ordering and storage for news items and comments.
//!
//! ## Architecture
//!
//! - [`models`]: [`News`], [`Comment`] and their insert payloads
//! - [`ordering`]: newest-first news, oldest-first comments
//! - [`store`]: the [`Store`] trait and the [`InMemoryStore`] backend
//!
//! ## Quick Start
//!
//! ```rust
//! use newsroom_auth::UserId;
//! use newsroom_db::{InMemoryStore, NewComment, NewNews, Store};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = InMemoryStore::new();
//! let news = store.create_news(NewNews::new("Заголовок", "Текст")).await.unwrap();
//! store
//!     .create_comment(NewComment::new(news.id, UserId(1), "Текст комментария"))
//!     .await
//!     .unwrap();
//!
//! assert_eq!(store.comments_for(news.id).await.unwrap().len(), 1);
//! # }
//! ```

pub mod models;
pub mod ordering;
pub mod store;

pub use models::{Comment, CommentId, NewComment, NewNews, News, NewsId};
pub use ordering::{comment_order, news_order, sort_comments, sort_news};
pub use store::{DbError, DbResult, InMemoryStore, Store};
