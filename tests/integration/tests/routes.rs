//! Page availability and redirects per actor

use http::StatusCode;
use newsroom_integration_tests::{
	delete_url, detail_url, edit_url, expected_login_redirect, home_url,
};
use newsroom_test::fixtures::{Newsroom, newsroom};
use newsroom_test::{assert_redirects, assert_status};
use newsroom_views::Route;
use rstest::*;

#[derive(Debug, Clone, Copy)]
enum Page {
	Home,
	Detail,
	Login,
	Logout,
	Signup,
}

impl Page {
	fn url(self, news_id: newsroom_db::NewsId) -> String {
		match self {
			Self::Home => home_url(),
			Self::Detail => detail_url(news_id),
			Self::Login => Route::Login.reverse(),
			Self::Logout => Route::Logout.reverse(),
			Self::Signup => Route::Signup.reverse(),
		}
	}
}

#[derive(Debug, Clone, Copy)]
enum CommentPage {
	Edit,
	Delete,
}

impl CommentPage {
	fn url(self, id: newsroom_db::CommentId) -> String {
		match self {
			Self::Edit => edit_url(id),
			Self::Delete => delete_url(id),
		}
	}
}

#[rstest]
#[case::home(Page::Home)]
#[case::detail(Page::Detail)]
#[case::login(Page::Login)]
#[case::logout(Page::Logout)]
#[case::signup(Page::Signup)]
#[tokio::test]
async fn test_pages_availability_for_anonymous_user(newsroom: Newsroom, #[case] page: Page) {
	// Arrange
	let news = newsroom.news().await;
	let client = newsroom.client();

	// Act
	let response = client.get(&page.url(news.id)).await;

	// Assert
	assert_status(&response, StatusCode::OK);
}

#[rstest]
#[case::detail(Page::Detail)]
#[case::login(Page::Login)]
#[case::signup(Page::Signup)]
#[tokio::test]
async fn test_pages_availability_for_auth_user(newsroom: Newsroom, #[case] page: Page) {
	let news = newsroom.news().await;
	let client = newsroom.reader_client();

	let response = client.get(&page.url(news.id)).await;

	assert_status(&response, StatusCode::OK);
}

#[rstest]
#[tokio::test]
async fn test_comment_pages_availability_for_different_users(
	newsroom: Newsroom,
	#[values(CommentPage::Edit, CommentPage::Delete)] page: CommentPage,
	#[values(true, false)] as_author: bool,
) {
	// Arrange
	let news = newsroom.news().await;
	let comment = newsroom.comment(&news).await;
	let (client, expected_status) = if as_author {
		(newsroom.author_client(), StatusCode::OK)
	} else {
		(newsroom.reader_client(), StatusCode::NOT_FOUND)
	};

	// Act
	let response = client.get(&page.url(comment.id())).await;

	// Assert
	assert_status(&response, expected_status);
}

#[rstest]
#[tokio::test]
async fn test_redirects(
	newsroom: Newsroom,
	#[values(CommentPage::Edit, CommentPage::Delete)] page: CommentPage,
) {
	// Arrange
	let news = newsroom.news().await;
	let comment = newsroom.comment(&news).await;
	let url = page.url(comment.id());

	// Act
	let response = newsroom.client().get(&url).await;

	// Assert
	assert_redirects(&response, &expected_login_redirect(&url));
}

#[rstest]
#[tokio::test]
async fn test_anonymous_redirect_does_not_reveal_missing_comment(
	newsroom: Newsroom,
	#[values(CommentPage::Edit, CommentPage::Delete)] page: CommentPage,
) {
	let url = page.url(newsroom_db::CommentId(404));

	let response = newsroom.client().get(&url).await;

	assert_redirects(&response, &expected_login_redirect(&url));
}

#[rstest]
#[tokio::test]
async fn test_cross_user_response_matches_missing_comment(
	newsroom: Newsroom,
	#[values(CommentPage::Edit, CommentPage::Delete)] page: CommentPage,
) {
	// Arrange
	let news = newsroom.news().await;
	let comment = newsroom.comment(&news).await;
	let reader = newsroom.reader_client();

	// Act
	let foreign = reader.get(&page.url(comment.id())).await;
	let missing = reader.get(&page.url(newsroom_db::CommentId(404))).await;

	// Assert
	assert_status(&foreign, StatusCode::NOT_FOUND);
	assert_eq!(foreign.status, missing.status);
	assert_eq!(foreign.headers, missing.headers);
	assert_eq!(foreign.context, missing.context);
}

#[rstest]
#[tokio::test]
async fn test_missing_news_is_not_found(newsroom: Newsroom) {
	let response = newsroom.client().get(&detail_url(newsroom_db::NewsId(404))).await;

	assert_status(&response, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn test_logged_out_client_is_treated_as_anonymous(newsroom: Newsroom) {
	// Arrange
	let news = newsroom.news().await;
	let comment = newsroom.comment(&news).await;
	let mut client = newsroom.author_client();
	client.logout();
	let url = edit_url(comment.id());

	// Act
	let response = client.get(&url).await;

	// Assert
	assert_redirects(&response, &expected_login_redirect(&url));
}
