//! Named routes
//!
//! Every page has a symbolic name (`news:detail`, `users:login`, ...) that
//! reverses to a path and resolves back from one.

use newsroom_db::{CommentId, NewsId};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt;

// Characters left as-is in the `next` query parameter.
const NEXT_PARAM: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'/')
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'~');

/// Anchor of the comment list on the detail page.
pub const COMMENTS_ANCHOR: &str = "#comments";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
	Home,
	Detail(NewsId),
	Edit(CommentId),
	Delete(CommentId),
	Login,
	Logout,
	Signup,
}

impl Route {
	/// Namespaced route name.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Home => "news:home",
			Self::Detail(_) => "news:detail",
			Self::Edit(_) => "news:edit",
			Self::Delete(_) => "news:delete",
			Self::Login => "users:login",
			Self::Logout => "users:logout",
			Self::Signup => "users:signup",
		}
	}

	/// Builds the path of this route.
	///
	/// # Examples
	///
	/// ```
	/// use newsroom_db::{CommentId, NewsId};
	/// use newsroom_views::Route;
	///
	/// assert_eq!(Route::Home.reverse(), "/");
	/// assert_eq!(Route::Detail(NewsId(3)).reverse(), "/news/3/");
	/// assert_eq!(Route::Edit(CommentId(5)).reverse(), "/edit_comment/5/");
	/// ```
	pub fn reverse(&self) -> String {
		match self {
			Self::Home => "/".to_string(),
			Self::Detail(id) => format!("/news/{}/", id),
			Self::Edit(id) => format!("/edit_comment/{}/", id),
			Self::Delete(id) => format!("/delete_comment/{}/", id),
			Self::Login => "/auth/login/".to_string(),
			Self::Logout => "/auth/logout/".to_string(),
			Self::Signup => "/auth/signup/".to_string(),
		}
	}

	/// Matches a request path against the route table. Any query string is
	/// ignored.
	///
	/// # Examples
	///
	/// ```
	/// use newsroom_db::NewsId;
	/// use newsroom_views::Route;
	///
	/// assert_eq!(Route::resolve("/news/7/"), Some(Route::Detail(NewsId(7))));
	/// assert_eq!(Route::resolve("/news/seven/"), None);
	/// ```
	pub fn resolve(path: &str) -> Option<Self> {
		let path = path.split_once('?').map_or(path, |(path, _)| path);
		match path {
			"/" => return Some(Self::Home),
			"/auth/login/" => return Some(Self::Login),
			"/auth/logout/" => return Some(Self::Logout),
			"/auth/signup/" => return Some(Self::Signup),
			_ => {}
		}

		let inner = path.strip_prefix('/')?.strip_suffix('/')?;
		let (prefix, id) = inner.split_once('/')?;
		// Plain digits only, like `reverse` produces.
		if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
			return None;
		}
		let id: i64 = id.parse().ok()?;
		match prefix {
			"news" => Some(Self::Detail(NewsId(id))),
			"edit_comment" => Some(Self::Edit(CommentId(id))),
			"delete_comment" => Some(Self::Delete(CommentId(id))),
			_ => None,
		}
	}
}

impl fmt::Display for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.name())
	}
}

/// Detail page of `news_id`, scrolled to its comments.
pub fn comments_url(news_id: NewsId) -> String {
	format!("{}{}", Route::Detail(news_id).reverse(), COMMENTS_ANCHOR)
}

/// `login_url?next=<next>`, the target for anonymous users.
///
/// # Examples
///
/// ```
/// use newsroom_views::routes::login_redirect_url;
///
/// assert_eq!(login_redirect_url("/auth/login/", "/news/1/"), "/auth/login/?next=/news/1/");
/// assert_eq!(
///     login_redirect_url("/auth/login/", "/news/1/?a=b"),
///     "/auth/login/?next=/news/1/%3Fa%3Db"
/// );
/// ```
pub fn login_redirect_url(login_url: &str, next: &str) -> String {
	format!(
		"{}?next={}",
		login_url,
		utf8_percent_encode(next, NEXT_PARAM)
	)
}
