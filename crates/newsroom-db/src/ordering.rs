//! Display order of news and comments
//!
//! The two orders run in opposite directions: the home page shows the newest
//! news first, while comments read chronologically, oldest first.
//!
//! Both sorts are stable, so rows with equal timestamps keep insertion order.

use crate::models::{Comment, News};
use std::cmp::Ordering;

/// Newest news first.
pub fn news_order(a: &News, b: &News) -> Ordering {
	b.date.cmp(&a.date)
}

/// Oldest comment first.
pub fn comment_order(a: &Comment, b: &Comment) -> Ordering {
	a.created().cmp(&b.created())
}

pub fn sort_news(news: &mut [News]) {
	news.sort_by(news_order);
}

pub fn sort_comments(comments: &mut [Comment]) {
	comments.sort_by(comment_order);
}
