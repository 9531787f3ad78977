//! Actor resolution
//!
//! The view layer never inspects sessions itself; it asks an injected
//! [`ActorResolver`] to classify the request.

use crate::actor::{Actor, User};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// Classifies a request's session state as an [`Actor`].
///
/// Implementations must be side-effect free: resolving the same session twice
/// yields the same actor.
#[async_trait]
pub trait ActorResolver: Send + Sync {
	/// Returns the actor behind `session`, or [`Actor::Anonymous`] when there
	/// is no session or it is unknown.
	async fn resolve(&self, session: Option<&str>) -> Actor;
}

/// In-memory session table mapping session keys to users.
///
/// # Examples
///
/// ```
/// use newsroom_auth::{ActorResolver, SessionActorResolver, User, UserId};
///
/// let resolver = SessionActorResolver::new();
/// let key = resolver.login(User::new(UserId(1), "author"));
/// assert!(resolver.is_active(&key));
///
/// resolver.logout(&key);
/// assert!(!resolver.is_active(&key));
/// ```
#[derive(Debug, Default)]
pub struct SessionActorResolver {
	sessions: RwLock<HashMap<String, User>>,
}

impl SessionActorResolver {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts a session for `user` and returns its key.
	pub fn login(&self, user: User) -> String {
		let key = Uuid::new_v4().to_string();
		tracing::debug!(user_id = %user.id, "Session opened");
		self.sessions.write().insert(key.clone(), user);
		key
	}

	/// Ends a session. Unknown keys are ignored.
	pub fn logout(&self, key: &str) {
		if let Some(user) = self.sessions.write().remove(key) {
			tracing::debug!(user_id = %user.id, "Session closed");
		}
	}

	pub fn is_active(&self, key: &str) -> bool {
		self.sessions.read().contains_key(key)
	}
}

#[async_trait]
impl ActorResolver for SessionActorResolver {
	async fn resolve(&self, session: Option<&str>) -> Actor {
		let user = session.and_then(|key| self.sessions.read().get(key).cloned());
		match user {
			Some(user) => Actor::authenticated(user),
			None => Actor::anonymous(),
		}
	}
}
