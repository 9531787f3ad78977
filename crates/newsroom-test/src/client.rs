//! In-process test client
//!
//! Sends requests straight to a [`NewsSite`] and keeps the session key of a
//! forced login between requests.

use newsroom_auth::{SessionActorResolver, User};
use newsroom_views::{NewsSite, Request, Response};
use std::collections::HashMap;
use std::sync::Arc;

/// Client bound to one site, optionally logged in.
///
/// # Examples
///
/// ```
/// use http::StatusCode;
/// use newsroom_auth::SessionActorResolver;
/// use newsroom_conf::Settings;
/// use newsroom_db::InMemoryStore;
/// use newsroom_test::TestClient;
/// use newsroom_views::NewsSite;
/// use std::sync::Arc;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let resolver = Arc::new(SessionActorResolver::new());
/// let site = NewsSite::new(Arc::new(InMemoryStore::new()), resolver.clone(), Settings::default()).unwrap();
/// let client = TestClient::new(Arc::new(site), resolver);
///
/// assert_eq!(client.get("/").await.status, StatusCode::OK);
/// # }
/// ```
#[derive(Clone)]
pub struct TestClient {
	site: Arc<NewsSite>,
	sessions: Arc<SessionActorResolver>,
	session: Option<String>,
}

impl TestClient {
	pub fn new(site: Arc<NewsSite>, sessions: Arc<SessionActorResolver>) -> Self {
		Self {
			site,
			sessions,
			session: None,
		}
	}

	/// Logs `user` in without credentials.
	pub fn force_login(&mut self, user: &User) {
		self.logout();
		self.session = Some(self.sessions.login(user.clone()));
	}

	pub fn logout(&mut self) {
		if let Some(key) = self.session.take() {
			self.sessions.logout(&key);
		}
	}

	pub fn is_logged_in(&self) -> bool {
		self.session.is_some()
	}

	pub async fn get(&self, path: &str) -> Response {
		self.send(Request::get(path)).await
	}

	/// POSTs `data` as form fields.
	pub async fn post(&self, path: &str, data: &[(&str, &str)]) -> Response {
		let form: HashMap<String, String> = data
			.iter()
			.map(|(key, value)| (key.to_string(), value.to_string()))
			.collect();
		self.send(Request::post(path, form)).await
	}

	async fn send(&self, request: Request) -> Response {
		let request = match &self.session {
			Some(key) => request.with_session(key.clone()),
			None => request,
		};
		self.site.handle(request).await
	}
}
