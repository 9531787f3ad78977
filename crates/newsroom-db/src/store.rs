//! Persistence
//!
//! [`Store`] is the persistence seam used by the views. [`InMemoryStore`]
//! keeps rows in insertion order behind a single lock; every write either
//! fully applies or leaves the tables untouched.

use crate::models::{Comment, CommentId, NewComment, NewNews, News, NewsId};
use crate::ordering::{sort_comments, sort_news};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Database error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DbError {
	#[error("{model} matching query does not exist (id={id})")]
	DoesNotExist { model: &'static str, id: i64 },
	#[error("Integrity error: {0}")]
	Integrity(String),
	#[error("Database error: {0}")]
	Backend(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Storage for news items and their comments.
#[async_trait]
pub trait Store: Send + Sync {
	async fn create_news(&self, news: NewNews) -> DbResult<News>;

	/// Inserts every item or none of them.
	async fn bulk_create_news(&self, items: Vec<NewNews>) -> DbResult<Vec<News>>;

	async fn get_news(&self, id: NewsId) -> DbResult<Option<News>>;

	/// At most `limit` news items, newest first.
	async fn latest_news(&self, limit: usize) -> DbResult<Vec<News>>;

	async fn count_news(&self) -> DbResult<usize>;

	/// Fails with [`DbError::Integrity`] when the news item does not exist.
	async fn create_comment(&self, comment: NewComment) -> DbResult<Comment>;

	/// Inserts every comment or none of them.
	async fn bulk_create_comments(&self, items: Vec<NewComment>) -> DbResult<Vec<Comment>>;

	async fn get_comment(&self, id: CommentId) -> DbResult<Option<Comment>>;

	/// Comments under `news_id`, oldest first.
	async fn comments_for(&self, news_id: NewsId) -> DbResult<Vec<Comment>>;

	/// Replaces the text of a comment. Author and timestamps are untouched.
	async fn update_comment_text(&self, id: CommentId, text: String) -> DbResult<Comment>;

	async fn delete_comment(&self, id: CommentId) -> DbResult<()>;

	async fn count_comments(&self) -> DbResult<usize>;
}

#[derive(Debug, Default)]
struct Tables {
	news: BTreeMap<NewsId, News>,
	comments: BTreeMap<CommentId, Comment>,
	next_news_id: i64,
	next_comment_id: i64,
}

impl Tables {
	fn insert_news(&mut self, news: NewNews) -> News {
		self.next_news_id += 1;
		let row = News {
			id: NewsId(self.next_news_id),
			title: news.title,
			text: news.text,
			date: news.date.unwrap_or_else(Utc::now),
		};
		self.news.insert(row.id, row.clone());
		row
	}

	fn check_news_exists(&self, news_id: NewsId) -> DbResult<()> {
		if self.news.contains_key(&news_id) {
			Ok(())
		} else {
			Err(DbError::Integrity(format!(
				"comment references missing news item {}",
				news_id
			)))
		}
	}

	fn insert_comment(&mut self, comment: NewComment) -> Comment {
		self.next_comment_id += 1;
		let row = Comment::new(
			CommentId(self.next_comment_id),
			comment.news_id,
			comment.author,
			comment.text,
			comment.created.unwrap_or_else(Utc::now),
		);
		self.comments.insert(row.id(), row.clone());
		row
	}
}

/// Store keeping all rows in memory.
///
/// Ids start at 1 and increase with every insert, so iteration order equals
/// insertion order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
	tables: RwLock<Tables>,
}

impl InMemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl Store for InMemoryStore {
	async fn create_news(&self, news: NewNews) -> DbResult<News> {
		let row = self.tables.write().insert_news(news);
		tracing::debug!(news_id = %row.id, "News created");
		Ok(row)
	}

	async fn bulk_create_news(&self, items: Vec<NewNews>) -> DbResult<Vec<News>> {
		let mut tables = self.tables.write();
		let rows: Vec<News> = items
			.into_iter()
			.map(|item| tables.insert_news(item))
			.collect();
		tracing::debug!(count = rows.len(), "News bulk-created");
		Ok(rows)
	}

	async fn get_news(&self, id: NewsId) -> DbResult<Option<News>> {
		Ok(self.tables.read().news.get(&id).cloned())
	}

	async fn latest_news(&self, limit: usize) -> DbResult<Vec<News>> {
		let mut rows: Vec<News> = self.tables.read().news.values().cloned().collect();
		sort_news(&mut rows);
		rows.truncate(limit);
		Ok(rows)
	}

	async fn count_news(&self) -> DbResult<usize> {
		Ok(self.tables.read().news.len())
	}

	async fn create_comment(&self, comment: NewComment) -> DbResult<Comment> {
		let mut tables = self.tables.write();
		tables.check_news_exists(comment.news_id)?;
		let row = tables.insert_comment(comment);
		tracing::debug!(comment_id = %row.id(), news_id = %row.news_id(), "Comment created");
		Ok(row)
	}

	async fn bulk_create_comments(&self, items: Vec<NewComment>) -> DbResult<Vec<Comment>> {
		let mut tables = self.tables.write();
		for item in &items {
			tables.check_news_exists(item.news_id)?;
		}
		let rows: Vec<Comment> = items
			.into_iter()
			.map(|item| tables.insert_comment(item))
			.collect();
		tracing::debug!(count = rows.len(), "Comments bulk-created");
		Ok(rows)
	}

	async fn get_comment(&self, id: CommentId) -> DbResult<Option<Comment>> {
		Ok(self.tables.read().comments.get(&id).cloned())
	}

	async fn comments_for(&self, news_id: NewsId) -> DbResult<Vec<Comment>> {
		let mut rows: Vec<Comment> = self
			.tables
			.read()
			.comments
			.values()
			.filter(|c| c.news_id() == news_id)
			.cloned()
			.collect();
		sort_comments(&mut rows);
		Ok(rows)
	}

	async fn update_comment_text(&self, id: CommentId, text: String) -> DbResult<Comment> {
		let mut tables = self.tables.write();
		let comment = tables
			.comments
			.get_mut(&id)
			.ok_or(DbError::DoesNotExist {
				model: "Comment",
				id: id.0,
			})?;
		comment.set_text(text);
		Ok(comment.clone())
	}

	async fn delete_comment(&self, id: CommentId) -> DbResult<()> {
		match self.tables.write().comments.remove(&id) {
			Some(_) => Ok(()),
			None => Err(DbError::DoesNotExist {
				model: "Comment",
				id: id.0,
			}),
		}
	}

	async fn count_comments(&self) -> DbResult<usize> {
		Ok(self.tables.read().comments.len())
	}
}
