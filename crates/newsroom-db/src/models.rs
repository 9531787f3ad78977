//! News and comment models

use chrono::{DateTime, Utc};
use newsroom_auth::{Owned, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary key of a [`News`] row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NewsId(pub i64);

/// Primary key of a [`Comment`] row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommentId(pub i64);

impl fmt::Display for NewsId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl fmt::Display for CommentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A published news item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
	pub id: NewsId,
	pub title: String,
	pub text: String,
	/// Publication timestamp
	pub date: DateTime<Utc>,
}

/// Insert payload for [`News`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNews {
	pub title: String,
	pub text: String,
	/// Defaults to the insertion time
	pub date: Option<DateTime<Utc>>,
}

impl NewNews {
	pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			text: text.into(),
			date: None,
		}
	}

	pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
		self.date = Some(date);
		self
	}
}

/// A comment under a news item.
///
/// Only the text can change after creation; the author is fixed for the
/// lifetime of the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
	id: CommentId,
	news_id: NewsId,
	author: UserId,
	text: String,
	created: DateTime<Utc>,
}

impl Comment {
	pub(crate) fn new(
		id: CommentId,
		news_id: NewsId,
		author: UserId,
		text: String,
		created: DateTime<Utc>,
	) -> Self {
		Self {
			id,
			news_id,
			author,
			text,
			created,
		}
	}

	pub fn id(&self) -> CommentId {
		self.id
	}

	pub fn news_id(&self) -> NewsId {
		self.news_id
	}

	pub fn author(&self) -> UserId {
		self.author
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	/// Creation timestamp
	pub fn created(&self) -> DateTime<Utc> {
		self.created
	}

	pub(crate) fn set_text(&mut self, text: String) {
		self.text = text;
	}
}

impl Owned for Comment {
	fn owner(&self) -> UserId {
		self.author
	}
}

/// Insert payload for [`Comment`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
	pub news_id: NewsId,
	pub author: UserId,
	pub text: String,
	/// Defaults to the insertion time
	pub created: Option<DateTime<Utc>>,
}

impl NewComment {
	pub fn new(news_id: NewsId, author: UserId, text: impl Into<String>) -> Self {
		Self {
			news_id,
			author,
			text: text.into(),
			created: None,
		}
	}

	pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
		self.created = Some(created);
		self
	}
}
