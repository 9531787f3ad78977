//! Request and response types seen by the views

use crate::error::{ViewError, ViewResult};
use http::header::LOCATION;
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use newsroom_db::{Comment, News};
use newsroom_forms::CommentForm;
use std::collections::HashMap;

/// An inbound request, already stripped down to what the views need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
	pub method: Method,
	pub path: String,
	/// Session key, if the client sent one
	pub session: Option<String>,
	/// Decoded form body
	pub form: HashMap<String, String>,
}

impl Request {
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self {
			method,
			path: path.into(),
			session: None,
			form: HashMap::new(),
		}
	}

	pub fn get(path: impl Into<String>) -> Self {
		Self::new(Method::GET, path)
	}

	pub fn post(path: impl Into<String>, form: HashMap<String, String>) -> Self {
		Self {
			form,
			..Self::new(Method::POST, path)
		}
	}

	/// POST request from an `application/x-www-form-urlencoded` body.
	///
	/// # Examples
	///
	/// ```
	/// use newsroom_views::Request;
	///
	/// let request = Request::post_urlencoded("/news/1/", "text=%D0%9F%D1%80%D0%B8%D0%B2%D0%B5%D1%82").unwrap();
	/// assert_eq!(request.form.get("text").map(String::as_str), Some("Привет"));
	/// ```
	pub fn post_urlencoded(path: impl Into<String>, body: &str) -> ViewResult<Self> {
		let form: HashMap<String, String> =
			serde_urlencoded::from_str(body).map_err(|e| ViewError::BadRequest(e.to_string()))?;
		Ok(Self::post(path, form))
	}

	pub fn with_session(mut self, session: impl Into<String>) -> Self {
		self.session = Some(session.into());
		self
	}
}

/// Data handed to the page template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
	/// Home page listing
	pub object_list: Option<Vec<News>>,
	pub news: Option<News>,
	/// Comments of `news`, oldest first
	pub comments: Option<Vec<Comment>>,
	pub comment: Option<Comment>,
	pub form: Option<CommentForm>,
}

/// A rendered response.
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub context: Context,
}

impl Response {
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			context: Context::default(),
		}
	}

	/// 200 with a page context
	pub fn ok(context: Context) -> Self {
		Self {
			context,
			..Self::new(StatusCode::OK)
		}
	}

	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	pub fn bad_request() -> Self {
		Self::new(StatusCode::BAD_REQUEST)
	}

	pub fn method_not_allowed() -> Self {
		Self::new(StatusCode::METHOD_NOT_ALLOWED)
	}

	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// 302 to `url`
	pub fn redirect(url: &str) -> Self {
		match HeaderValue::from_str(url) {
			Ok(value) => {
				let mut response = Self::new(StatusCode::FOUND);
				response.headers.insert(LOCATION, value);
				response
			}
			Err(e) => {
				tracing::error!("Invalid redirect target {:?}: {}", url, e);
				Self::internal_server_error()
			}
		}
	}

	/// Redirect target, if this is a redirect.
	pub fn location(&self) -> Option<&str> {
		self.headers
			.get(LOCATION)
			.and_then(|value| value.to_str().ok())
	}
}
