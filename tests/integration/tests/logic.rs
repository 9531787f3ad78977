//! Comment creation, editing and deletion

use http::StatusCode;
use newsroom_db::Store;
use newsroom_forms::WARNING;
use newsroom_integration_tests::{
	delete_url, detail_url, edit_url, expected_login_redirect, url_to_comments,
};
use newsroom_test::fixtures::{COMMENT_TEXT, Newsroom, bad_words_data, form_data, newsroom};
use newsroom_test::{assert_form_error, assert_redirects, assert_status};
use rstest::*;

type FormData = Vec<(&'static str, &'static str)>;

#[rstest]
#[tokio::test]
async fn test_anonymous_user_cant_create_comment(newsroom: Newsroom, form_data: FormData) {
	// Arrange
	let news = newsroom.news().await;
	let url = detail_url(news.id);

	// Act
	let response = newsroom.client().post(&url, &form_data).await;

	// Assert
	assert_redirects(&response, &expected_login_redirect(&url));
	assert_eq!(newsroom.store.count_comments().await.unwrap(), 0);
}

#[rstest]
#[tokio::test]
async fn test_user_can_create_comment(newsroom: Newsroom, form_data: FormData) {
	// Arrange
	let news = newsroom.news().await;
	let existing = newsroom.comment(&news).await;
	let url = detail_url(news.id);

	// Act
	let response = newsroom.author_client().post(&url, &form_data).await;

	// Assert
	assert_redirects(&response, &url_to_comments(news.id));
	assert_eq!(newsroom.store.count_comments().await.unwrap(), 2);
	let comments = newsroom.store.comments_for(news.id).await.unwrap();
	let created = comments.last().expect("new comment");
	assert_eq!(created.text(), form_data[0].1);
	assert_eq!(created.author(), newsroom.author.id);
	assert_eq!(created.news_id(), news.id);
	let untouched = newsroom.store.get_comment(existing.id()).await.unwrap();
	assert_eq!(untouched.as_ref(), Some(&existing));
}

#[rstest]
#[tokio::test]
async fn test_user_cant_use_bad_words(newsroom: Newsroom, bad_words_data: FormData) {
	// Arrange
	let news = newsroom.news().await;

	// Act
	let response = newsroom
		.author_client()
		.post(&detail_url(news.id), &bad_words_data)
		.await;

	// Assert
	assert_status(&response, StatusCode::OK);
	let form = response.context.form.expect("form in context");
	assert_form_error(&form, "text", WARNING);
	assert_eq!(newsroom.store.count_comments().await.unwrap(), 0);
}

#[rstest]
#[case::blank("   ")]
#[case::missing("")]
#[tokio::test]
async fn test_user_cant_create_empty_comment(newsroom: Newsroom, #[case] text: &str) {
	let news = newsroom.news().await;

	let response = newsroom
		.author_client()
		.post(&detail_url(news.id), &[("text", text)])
		.await;

	let form = response.context.form.expect("form in context");
	assert_form_error(&form, "text", "This field is required.");
	assert_eq!(newsroom.store.count_comments().await.unwrap(), 0);
}

#[rstest]
#[tokio::test]
async fn test_author_can_delete_comment(newsroom: Newsroom, form_data: FormData) {
	// Arrange
	let news = newsroom.news().await;
	let comment = newsroom.comment(&news).await;

	// Act
	let response = newsroom
		.author_client()
		.post(&delete_url(comment.id()), &form_data)
		.await;

	// Assert
	assert_redirects(&response, &url_to_comments(news.id));
	assert_eq!(newsroom.store.count_comments().await.unwrap(), 0);
}

#[rstest]
#[tokio::test]
async fn test_author_can_edit_comment(newsroom: Newsroom, form_data: FormData) {
	// Arrange
	let news = newsroom.news().await;
	let comment = newsroom.comment(&news).await;

	// Act
	let response = newsroom
		.author_client()
		.post(&edit_url(comment.id()), &form_data)
		.await;

	// Assert
	assert_redirects(&response, &url_to_comments(news.id));
	let stored = newsroom
		.store
		.get_comment(comment.id())
		.await
		.unwrap()
		.expect("comment still exists");
	assert_eq!(stored.text(), form_data[0].1);
	assert_eq!(stored.author(), comment.author());
	assert_eq!(stored.news_id(), comment.news_id());
	assert_eq!(stored.created(), comment.created());
}

#[rstest]
#[tokio::test]
async fn test_author_cant_edit_comment_with_bad_words(
	newsroom: Newsroom,
	bad_words_data: FormData,
) {
	let news = newsroom.news().await;
	let comment = newsroom.comment(&news).await;

	let response = newsroom
		.author_client()
		.post(&edit_url(comment.id()), &bad_words_data)
		.await;

	let form = response.context.form.expect("form in context");
	assert_form_error(&form, "text", WARNING);
	let stored = newsroom.store.get_comment(comment.id()).await.unwrap();
	assert_eq!(stored.map(|c| c.text().to_string()), Some(COMMENT_TEXT.to_string()));
}

#[rstest]
#[tokio::test]
async fn test_user_cant_delete_comment_of_another_user(newsroom: Newsroom, form_data: FormData) {
	// Arrange
	let news = newsroom.news().await;
	let comment = newsroom.comment(&news).await;

	// Act
	let response = newsroom
		.reader_client()
		.post(&delete_url(comment.id()), &form_data)
		.await;

	// Assert
	assert_status(&response, StatusCode::NOT_FOUND);
	assert_eq!(newsroom.store.count_comments().await.unwrap(), 1);
}

#[rstest]
#[tokio::test]
async fn test_user_cant_edit_comment_of_another_user(newsroom: Newsroom, form_data: FormData) {
	// Arrange
	let news = newsroom.news().await;
	let comment = newsroom.comment(&news).await;

	// Act
	let response = newsroom
		.reader_client()
		.post(&edit_url(comment.id()), &form_data)
		.await;

	// Assert
	assert_status(&response, StatusCode::NOT_FOUND);
	let stored = newsroom.store.get_comment(comment.id()).await.unwrap();
	assert_eq!(stored.as_ref(), Some(&comment));
}

#[rstest]
#[tokio::test]
async fn test_anonymous_user_cant_delete_comment(newsroom: Newsroom, form_data: FormData) {
	let news = newsroom.news().await;
	let comment = newsroom.comment(&news).await;
	let url = delete_url(comment.id());

	let response = newsroom.client().post(&url, &form_data).await;

	assert_redirects(&response, &expected_login_redirect(&url));
	assert_eq!(newsroom.store.count_comments().await.unwrap(), 1);
}

#[rstest]
#[tokio::test]
async fn test_edit_page_is_prefilled_with_current_text(newsroom: Newsroom) {
	let news = newsroom.news().await;
	let comment = newsroom.comment(&news).await;

	let response = newsroom.author_client().get(&edit_url(comment.id())).await;

	let form = response.context.form.expect("form in context");
	assert_eq!(form.value(), Some(COMMENT_TEXT));
	assert_eq!(response.context.comment.as_ref(), Some(&comment));
}
