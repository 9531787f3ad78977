//! Page context: home listing, comment order, form presence

use chrono::{Duration, Utc};
use newsroom_conf::Settings;
use newsroom_db::{NewNews, Store};
use newsroom_forms::CommentForm;
use newsroom_integration_tests::{detail_url, home_url};
use newsroom_test::fixtures::{COMMENTS_BATCH_SIZE, Newsroom, newsroom};
use rstest::*;

#[rstest]
#[tokio::test]
async fn test_news_count(newsroom: Newsroom) {
	// Arrange
	newsroom.create_news().await;

	// Act
	let response = newsroom.client().get(&home_url()).await;

	// Assert
	let object_list = response.context.object_list.expect("object_list in context");
	assert_eq!(object_list.len(), newsroom.settings().news_count_on_home_page);
}

#[rstest]
#[tokio::test]
async fn test_news_count_follows_settings() {
	let newsroom = Newsroom::with_settings(Settings::default().with_news_count_on_home_page(3));
	newsroom.create_news().await;

	let response = newsroom.client().get(&home_url()).await;

	assert_eq!(response.context.object_list.map(|list| list.len()), Some(3));
}

#[rstest]
#[tokio::test]
async fn test_news_order(newsroom: Newsroom) {
	// Arrange
	newsroom.create_news().await;

	// Act
	let response = newsroom.client().get(&home_url()).await;

	// Assert
	let object_list = response.context.object_list.expect("object_list in context");
	let all_dates: Vec<_> = object_list.iter().map(|news| news.date).collect();
	let mut sorted_dates = all_dates.clone();
	sorted_dates.sort_by(|a, b| b.cmp(a));
	assert_eq!(all_dates, sorted_dates);
}

#[rstest]
#[tokio::test]
async fn test_home_page_orders_news_stored_oldest_first(newsroom: Newsroom) {
	// Arrange
	let limit = newsroom.settings().news_count_on_home_page;
	let start = Utc::now();
	let items = (0..=limit)
		.map(|index| {
			NewNews::new(format!("Новость {}", index), "Просто текст.")
				.with_date(start + Duration::days(index as i64))
		})
		.collect();
	let created = newsroom.store.bulk_create_news(items).await.unwrap();
	let oldest = created[0].id;

	// Act
	let response = newsroom.client().get(&home_url()).await;

	// Assert
	let object_list = response.context.object_list.expect("object_list in context");
	let ids: Vec<_> = object_list.iter().map(|news| news.id).collect();
	let expected: Vec<_> = created.iter().rev().take(limit).map(|news| news.id).collect();
	assert_eq!(ids, expected);
	assert!(!ids.contains(&oldest));
}

#[rstest]
#[tokio::test]
async fn test_home_page_drops_oldest_news(newsroom: Newsroom) {
	let created = newsroom.create_news().await;
	let oldest = created
		.iter()
		.min_by_key(|news| news.date)
		.map(|news| news.id)
		.expect("created news");

	let response = newsroom.client().get(&home_url()).await;

	let object_list = response.context.object_list.expect("object_list in context");
	assert!(object_list.iter().all(|news| news.id != oldest));
}

#[rstest]
#[tokio::test]
async fn test_comments_order(newsroom: Newsroom) {
	// Arrange
	let news = newsroom.news().await;
	newsroom.create_comments(&news).await;

	// Act
	let response = newsroom.client().get(&detail_url(news.id)).await;

	// Assert
	assert_eq!(response.context.news.as_ref().map(|n| n.id), Some(news.id));
	let comments = response.context.comments.expect("comments in context");
	assert_eq!(comments.len(), COMMENTS_BATCH_SIZE);
	let all_timestamps: Vec<_> = comments.iter().map(|comment| comment.created()).collect();
	let mut sorted_timestamps = all_timestamps.clone();
	sorted_timestamps.sort();
	assert_eq!(all_timestamps, sorted_timestamps);
}

#[rstest]
#[tokio::test]
async fn test_anonymous_client_has_no_form(newsroom: Newsroom) {
	let news = newsroom.news().await;

	let response = newsroom.client().get(&detail_url(news.id)).await;

	assert!(response.context.form.is_none());
}

#[rstest]
#[tokio::test]
async fn test_authorized_client_has_form(newsroom: Newsroom) {
	// Arrange
	let news = newsroom.news().await;

	// Act
	let response = newsroom.author_client().get(&detail_url(news.id)).await;

	// Assert
	let form: CommentForm = response.context.form.expect("form in context");
	assert!(!form.is_bound());
}
