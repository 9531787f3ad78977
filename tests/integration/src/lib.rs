//! Shared URL helpers for the newsroom integration tests

use newsroom_db::{CommentId, NewsId};
use newsroom_views::{Route, comments_url, login_redirect_url};

pub const LOGIN_URL: &str = "/auth/login/";

pub fn home_url() -> String {
	Route::Home.reverse()
}

pub fn detail_url(id: NewsId) -> String {
	Route::Detail(id).reverse()
}

pub fn edit_url(id: CommentId) -> String {
	Route::Edit(id).reverse()
}

pub fn delete_url(id: CommentId) -> String {
	Route::Delete(id).reverse()
}

/// Detail page of `id`, anchored at its comments
pub fn url_to_comments(id: NewsId) -> String {
	comments_url(id)
}

/// Where an anonymous request to `url` is sent
pub fn expected_login_redirect(url: &str) -> String {
	login_redirect_url(LOGIN_URL, url)
}
